//! Fixed-width fitting.

use crate::glyph::{glyph_count, truncate_glyphs};

/// Pad `text` with spaces or truncate it to exactly `width` glyphs.
#[inline]
pub fn set_length(text: &str, width: usize) -> String {
    set_length_with(text, width, " ", false)
}

/// Pad or truncate `text` to `width` glyphs.
///
/// With `end_with_space` a single space is appended before measuring, which
/// is how labels embedded in border lines keep a gap before the fill.
/// Short text is followed by `pad` repeated once per missing glyph; a pad
/// wider than one glyph therefore widens the result proportionally. Long
/// text is cut after `width` glyphs with no ellipsis.
pub fn set_length_with(text: &str, width: usize, pad: &str, end_with_space: bool) -> String {
    let mut out = String::with_capacity(text.len() + width);
    out.push_str(text);
    if end_with_space {
        out.push(' ');
    }

    let count = glyph_count(&out);
    if count <= width {
        for _ in count..width {
            out.push_str(pad);
        }
        out
    } else {
        truncate_glyphs(&out, width).to_owned()
    }
}
