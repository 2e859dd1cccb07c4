#![forbid(unsafe_code)]

//! Growable character canvas.
//!
//! A [`Canvas`] is a grid of [`Pixel`]s addressed by [`Pos`] (`x` = row,
//! `y` = column). Shapes are painted with the [`Draw`](crate::drawing::Draw)
//! primitives and the result is emitted line by line with [`Canvas::flush`].
//!
//! # Invariants
//!
//! 1. Rows are contiguous from 0 to the highest row touched; the cells of a
//!    row are contiguous from 0 to its highest column touched.
//! 2. [`Canvas::set`] is the only operation that grows the grid, and it
//!    grows it for any coordinate regardless of the configured extents.
//! 3. [`Canvas::get`] and [`Canvas::get_mut`] never grow the grid.
//! 4. After [`Canvas::flush`] the grid holds exactly the fixed height in
//!    rows, each with exactly the fixed width in blank pixels (an unbounded
//!    dimension is left empty).
//!
//! # Example
//!
//! ```
//! use chalk_core::{Extent, Pos, Sink};
//! use chalk_render::{Canvas, Pixel};
//!
//! let mut canvas = Canvas::new(Extent::Unbounded, Extent::Unbounded);
//! canvas.set(Pos::new(1, 2), Pixel::from('#'));
//!
//! let mut sink = Sink::capture();
//! canvas.flush(&mut sink).unwrap();
//! assert_eq!(sink.captured().unwrap(), ["", "  #"]);
//! ```

use std::fmt;
use std::io;

use chalk_core::config::ChalkConfig;
use chalk_core::geometry::{Axis, Extent, Pos};
use chalk_core::sink::Sink;

/// One canvas cell holding a single glyph.
///
/// The glyph is usually one displayed character, possibly multi-byte
/// (box-drawing characters are three bytes in UTF-8), but any string is
/// accepted and written verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    glyph: String,
}

impl Pixel {
    /// Create a pixel from a glyph.
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
        }
    }

    /// A pixel holding a single space.
    #[must_use]
    pub fn blank() -> Self {
        Self::new(" ")
    }

    /// The glyph this pixel displays.
    #[inline]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Whether this pixel is a single space.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.glyph == " "
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::blank()
    }
}

impl From<&str> for Pixel {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}

impl From<char> for Pixel {
    fn from(glyph: char) -> Self {
        Self::new(glyph.to_string())
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyph)
    }
}

/// Error raised by indexed canvas access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// The coordinate on `axis` is not below `bound`.
    ///
    /// `bound` is the configured extent when that was exceeded, otherwise
    /// the number of cells allocated so far along the axis.
    OutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { axis, index, bound } => {
                let dimension = match axis {
                    Axis::X => "height",
                    Axis::Y => "width",
                };
                write!(
                    f,
                    "{} index {index} out of range ({dimension} {bound})",
                    axis.as_str()
                )
            }
        }
    }
}

impl std::error::Error for CanvasError {}

/// A growable grid of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<Pixel>>,
    width: Extent,
    height: Extent,
}

impl Default for Canvas {
    /// 128 columns wide, unbounded height.
    fn default() -> Self {
        Self::new(
            Extent::Fixed(chalk_core::config::DEFAULT_CANVAS_WIDTH),
            Extent::Unbounded,
        )
    }
}

impl Canvas {
    /// Create a canvas with the given extents.
    ///
    /// A fixed height pre-allocates that many rows; the rows start without
    /// cells.
    #[must_use]
    pub fn new(width: Extent, height: Extent) -> Self {
        let rows = vec![Vec::new(); height.fixed().unwrap_or_default()];
        Self {
            rows,
            width,
            height,
        }
    }

    /// Create a canvas sized by configuration.
    #[must_use]
    pub fn from_config(config: &ChalkConfig) -> Self {
        Self::new(config.canvas_width, config.canvas_height)
    }

    /// Configured width (column bound).
    #[inline]
    pub const fn width(&self) -> Extent {
        self.width
    }

    /// Configured height (row bound).
    #[inline]
    pub const fn height(&self) -> Extent {
        self.height
    }

    /// Number of rows currently allocated.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cells of row `x`, if allocated.
    #[inline]
    pub fn row(&self, x: usize) -> Option<&[Pixel]> {
        self.rows.get(x).map(Vec::as_slice)
    }

    fn check(&self, pos: Pos) -> Result<(), CanvasError> {
        for (axis, extent) in [(Axis::X, self.height), (Axis::Y, self.width)] {
            let index = pos.along(axis);
            if !extent.admits(index) {
                return Err(CanvasError::OutOfRange {
                    axis,
                    index,
                    bound: extent.fixed().unwrap_or_default(),
                });
            }
        }
        Ok(())
    }

    fn unallocated(&self, pos: Pos) -> CanvasError {
        match self.rows.get(pos.x) {
            None => CanvasError::OutOfRange {
                axis: Axis::X,
                index: pos.x,
                bound: self.rows.len(),
            },
            Some(row) => CanvasError::OutOfRange {
                axis: Axis::Y,
                index: pos.y,
                bound: row.len(),
            },
        }
    }

    /// Get the pixel at `pos`.
    ///
    /// Fails when `pos` lies outside a fixed extent or its cell has not been
    /// allocated yet. Never grows the grid.
    pub fn get(&self, pos: Pos) -> Result<&Pixel, CanvasError> {
        self.check(pos)?;
        self.rows
            .get(pos.x)
            .and_then(|row| row.get(pos.y))
            .ok_or_else(|| self.unallocated(pos))
    }

    /// Get the pixel at `pos` for in-place mutation.
    ///
    /// Same bounds rules as [`Canvas::get`].
    pub fn get_mut(&mut self, pos: Pos) -> Result<&mut Pixel, CanvasError> {
        self.check(pos)?;
        if self.rows.get(pos.x).is_none_or(|row| pos.y >= row.len()) {
            return Err(self.unallocated(pos));
        }
        Ok(&mut self.rows[pos.x][pos.y])
    }

    /// Overwrite the pixel at `pos`, growing the grid as needed.
    ///
    /// New rows start empty; new cells in the target row are blank.
    pub fn set(&mut self, pos: Pos, pixel: Pixel) {
        if pos.x >= self.rows.len() {
            chalk_core::trace!(rows = pos.x + 1, "canvas: grow rows");
            self.rows.resize_with(pos.x + 1, Vec::new);
        }
        let row = &mut self.rows[pos.x];
        if pos.y >= row.len() {
            row.resize_with(pos.y + 1, Pixel::blank);
        }
        row[pos.y] = pixel;
    }

    /// Reset the pixel at `pos` to blank, growing the grid as needed.
    pub fn erase(&mut self, pos: Pos) {
        self.set(pos, Pixel::blank());
    }

    /// The lines [`Canvas::flush`] would write, without resetting the grid.
    pub fn render_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Pixel::glyph).collect())
            .collect()
    }

    /// Write every row to `sink`, then reset the grid.
    ///
    /// Glyphs within a row are concatenated with no separator. On a write
    /// error the grid is left untouched.
    pub fn flush(&mut self, sink: &mut Sink) -> io::Result<()> {
        let span = chalk_core::debug_span!("canvas_flush", rows = self.rows.len());
        let _guard = span.enter();

        let mut line = String::new();
        for row in &self.rows {
            line.clear();
            for pixel in row {
                line.push_str(pixel.glyph());
            }
            sink.write_line(&line)?;
        }
        self.reset();
        chalk_core::debug!(width = %self.width, height = %self.height, "canvas: flushed");
        Ok(())
    }

    /// Drop all content and re-seed the grid from the configured extents.
    pub fn reset(&mut self) {
        self.rows.clear();
        if let Some(height) = self.height.fixed() {
            let row = vec![Pixel::blank(); self.width.fixed().unwrap_or_default()];
            self.rows.resize(height, row);
        }
    }
}
