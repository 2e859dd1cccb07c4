//! Glyph measurement.
//!
//! A glyph is one extended grapheme cluster. Box-drawing characters are
//! three bytes in UTF-8 and a decomposed `é` is two code points, yet each
//! occupies one cell, so neither byte nor `char` counts are usable here.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over the glyphs of `text`.
#[inline]
pub fn glyphs(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
}

/// ASCII text where every byte is its own glyph. `"\r\n"` is a single
/// cluster, so carriage returns leave the fast path.
#[inline]
fn one_byte_glyphs(text: &str) -> bool {
    text.is_ascii() && !text.contains('\r')
}

/// Number of glyphs in `text`.
#[inline]
pub fn glyph_count(text: &str) -> usize {
    if one_byte_glyphs(text) {
        return text.len();
    }
    text.graphemes(true).count()
}

/// The first `max` glyphs of `text`, borrowed.
pub fn truncate_glyphs(text: &str, max: usize) -> &str {
    if one_byte_glyphs(text) {
        return &text[..text.len().min(max)];
    }
    match text.grapheme_indices(true).nth(max) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_counts_bytes() {
        assert_eq!(glyph_count(""), 0);
        assert_eq!(glyph_count("hello"), 5);
    }

    #[test]
    fn box_drawing_counts_one_each() {
        assert_eq!("┏━━┓".len(), 12);
        assert_eq!(glyph_count("┏━━┓"), 4);
    }

    #[test]
    fn combining_sequence_is_one_glyph() {
        assert_eq!(glyph_count("he\u{0301}"), 2);
        assert_eq!(glyph_count("hé"), 2);
    }

    #[test]
    fn truncate_never_splits_glyphs() {
        assert_eq!(truncate_glyphs("┌─┐", 2), "┌─");
        assert_eq!(truncate_glyphs("e\u{0301}x", 1), "e\u{0301}");
        assert_eq!(truncate_glyphs("abc", 0), "");
        assert_eq!(truncate_glyphs("abc", 10), "abc");
    }

    #[test]
    fn crlf_is_one_glyph() {
        assert_eq!(glyph_count("x\r\n"), 2);
        assert_eq!(glyph_count("x\r\n"), glyphs("x\r\n").count());
        assert_eq!(glyph_count("\r"), 1);
        assert_eq!(truncate_glyphs("x\r\ny", 2), "x\r\n");
        assert_eq!(truncate_glyphs("\r\n", 1), "\r\n");
    }

    #[test]
    fn glyphs_iterates_clusters() {
        let parts: Vec<_> = glyphs("a│e\u{0301}").collect();
        assert_eq!(parts, ["a", "│", "e\u{0301}"]);
    }
}
