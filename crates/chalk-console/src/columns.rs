//! Column table buffering and layout.
//!
//! While a column is active, printed text is collected into a row/column
//! matrix instead of being drawn. Flushing lays the matrix out as rows of
//! padded cells.

use chalk_core::config::ChalkConfig;
use chalk_text::{glyph_count, set_length_with};

use crate::glyphs::{FRAME_HORIZONTAL, FRAME_VERTICAL};

/// Buffered cells plus the cursor for the next buffered print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnBuffer {
    rows: Vec<Vec<String>>,
    /// 1-based index of the column being filled; 0 when column mode is off.
    active_column: usize,
    /// Row of the last buffered print in the active column.
    active_row: Option<usize>,
}

impl ColumnBuffer {
    /// An empty buffer with column mode off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether prints are being buffered.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active_column != 0
    }

    /// 1-based active column, 0 when inactive.
    #[inline]
    pub const fn active_column(&self) -> usize {
        self.active_column
    }

    /// Buffered rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Move to the next column and restart at its first row.
    pub fn begin_column(&mut self) {
        self.active_column += 1;
        self.active_row = None;
    }

    /// Store `text` in the next row of the active column.
    ///
    /// Every row is widened to the active column so that later columns
    /// never leave holes in earlier rows. Does nothing when inactive.
    pub fn push(&mut self, text: &str) {
        if !self.is_active() {
            return;
        }
        let row = self.active_row.map_or(0, |row| row + 1);
        self.active_row = Some(row);

        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        for cells in &mut self.rows {
            if cells.len() < self.active_column {
                cells.resize_with(self.active_column, String::new);
            }
        }
        self.rows[row][self.active_column - 1] = text.to_owned();
    }

    /// Take the buffered rows and leave column mode.
    pub fn take(&mut self) -> Vec<Vec<String>> {
        self.active_column = 0;
        self.active_row = None;
        std::mem::take(&mut self.rows)
    }
}

/// How buffered columns are laid out on flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Draw a light frame with junctions around the table.
    pub framed: bool,
    /// Stretch columns to share the full row width instead of fitting content.
    pub fit_to_width: bool,
    /// Glyph used to pad cells to their column width, `-` by default.
    pub pad: String,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            framed: false,
            fit_to_width: true,
            pad: "-".to_owned(),
        }
    }
}

impl ColumnLayout {
    /// Default layout: unframed, fit to width, padded with `-`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default layout padded with the configured column glyph.
    #[must_use]
    pub fn from_config(config: &ChalkConfig) -> Self {
        Self::default().pad(config.column_pad.clone())
    }

    /// Set whether the table is framed.
    #[must_use]
    pub fn framed(mut self, framed: bool) -> Self {
        self.framed = framed;
        self
    }

    /// Set whether columns stretch to the row width.
    #[must_use]
    pub fn fit_to_width(mut self, fit: bool) -> Self {
        self.fit_to_width = fit;
        self
    }

    /// Set the padding glyph.
    #[must_use]
    pub fn pad(mut self, pad: impl Into<String>) -> Self {
        self.pad = pad.into();
        self
    }

    /// Text placed between adjacent cells.
    pub fn separator(&self) -> String {
        if self.framed {
            format!(" {FRAME_VERTICAL} ")
        } else {
            " ".to_owned()
        }
    }

    /// Column widths for `rows` given the row text width `available`.
    ///
    /// Content widths are the widest cell per column. When fitting, every
    /// column gets an equal share of `available` after separators, and the
    /// last column takes the remainder so rows fill it exactly. This is not
    /// the plain `available / n - 2` share, which leaves rows short of the
    /// border whenever the separators do not add up to two glyphs a column.
    pub fn widths(&self, rows: &[Vec<String>], available: usize) -> Vec<usize> {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(glyph_count(cell));
            }
        }

        if self.fit_to_width && columns > 0 {
            let separators = glyph_count(&self.separator()) * (columns - 1);
            let usable = available.saturating_sub(separators);
            let share = usable / columns;
            widths.fill(share);
            if let Some(last) = widths.last_mut() {
                *last += usable % columns;
            }
        }
        widths
    }

    /// One table row: each cell padded to its column width, joined by the separator.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let separator = self.separator();
        let mut out = String::new();
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                out.push_str(&separator);
            }
            let cell = row.get(i).map_or("", String::as_str);
            out.push_str(&set_length_with(cell, *width, &self.pad, false));
        }
        out
    }
}

/// Horizontal rule of a framed table, `interior` glyphs wide.
///
/// Each column contributes its width plus the two spaces around it, and
/// `junction` marks where the cell separators of the rows fall.
pub fn divider(widths: &[usize], junction: &str, interior: usize) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| FRAME_HORIZONTAL.repeat(width + 2))
        .collect();
    set_length_with(&segments.join(junction), interior, FRAME_HORIZONTAL, false)
}
