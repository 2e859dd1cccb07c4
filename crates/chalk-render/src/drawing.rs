#![forbid(unsafe_code)]

//! Drawing primitives for the canvas.
//!
//! Every primitive writes through [`Canvas::set`], so drawing never fails
//! and grows the grid to fit whatever it touches.
//!
//! Frames are drawn as a single perimeter walk that starts at corner `a`:
//! along `x` to `b.x`, along `y` to `b.y`, back along `x` to `a.x` and back
//! along `y` to `a.y`. Each unit step stamps the cell it lands on, so the
//! starting corner is stamped last, on arrival, and a degenerate frame with
//! `a == b` stamps nothing.

use chalk_core::geometry::{Axis, Pos};

use crate::canvas::{Canvas, Pixel};

/// Glyphs used to draw a decorated frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGlyphs {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    /// Stamped on steps along `y`.
    pub horizontal: &'static str,
    /// Stamped on steps along `x`.
    pub vertical: &'static str,
}

impl FrameGlyphs {
    /// Light box-drawing characters.
    pub const LIGHT: Self = Self {
        top_left: "┌",
        top_right: "┐",
        bottom_left: "└",
        bottom_right: "┘",
        horizontal: "─",
        vertical: "│",
    };

    /// Heavy box-drawing characters.
    pub const HEAVY: Self = Self {
        top_left: "┏",
        top_right: "┓",
        bottom_left: "┗",
        bottom_right: "┛",
        horizontal: "━",
        vertical: "┃",
    };

    /// [`HEAVY`](Self::HEAVY) when `bold`, otherwise [`LIGHT`](Self::LIGHT).
    #[inline]
    pub const fn weight(bold: bool) -> Self {
        if bold { Self::HEAVY } else { Self::LIGHT }
    }
}

/// Extension trait for drawing on a [`Canvas`].
pub trait Draw {
    /// Stamp `pixel` along an axis-aligned path from `a` to `b`, both ends
    /// included: first along `x`, then along `y`.
    fn line(&mut self, a: Pos, b: Pos, pixel: &Pixel);

    /// Stamp `pixel` on the perimeter of the rectangle with corners `a` and `b`.
    fn rectangle_frame(&mut self, a: Pos, b: Pos, pixel: &Pixel);

    /// Fill the half-open box `[min.x, max.x) × [min.y, max.y)` spanned by
    /// `a` and `b`; the far row and column are left untouched.
    fn rectangle_filled(&mut self, a: Pos, b: Pos, pixel: &Pixel);

    /// Draw a frame with edge glyphs by axis, then overwrite the corners:
    /// `a` top-left, `(a.x, b.y)` top-right, `b` bottom-right and
    /// `(b.x, a.y)` bottom-left.
    fn rectangle_frame_with(&mut self, a: Pos, b: Pos, glyphs: FrameGlyphs);

    /// [`rectangle_frame_with`](Draw::rectangle_frame_with) using heavy
    /// glyphs when `bold`, light ones otherwise.
    fn rectangle_nice_frame(&mut self, a: Pos, b: Pos, bold: bool) {
        self.rectangle_frame_with(a, b, FrameGlyphs::weight(bold));
    }
}

impl Canvas {
    /// Step from `pos` along `axis` until it reaches `target`, stamping each
    /// cell landed on.
    fn walk(&mut self, pos: &mut Pos, axis: Axis, target: usize, pixel: &Pixel) {
        let mut at = pos.along(axis);
        while at != target {
            if at < target {
                at += 1;
            } else {
                at -= 1;
            }
            *pos = pos.with(axis, at);
            self.set(*pos, pixel.clone());
        }
    }
}

impl Draw for Canvas {
    fn line(&mut self, a: Pos, b: Pos, pixel: &Pixel) {
        let mut pos = a;
        self.set(pos, pixel.clone());
        self.walk(&mut pos, Axis::X, b.x, pixel);
        self.walk(&mut pos, Axis::Y, b.y, pixel);
    }

    fn rectangle_frame(&mut self, a: Pos, b: Pos, pixel: &Pixel) {
        let mut pos = a;
        self.walk(&mut pos, Axis::X, b.x, pixel);
        self.walk(&mut pos, Axis::Y, b.y, pixel);
        self.walk(&mut pos, Axis::X, a.x, pixel);
        self.walk(&mut pos, Axis::Y, a.y, pixel);
    }

    fn rectangle_filled(&mut self, a: Pos, b: Pos, pixel: &Pixel) {
        let (lo, hi) = a.normalized(b);
        for x in lo.x..hi.x {
            for y in lo.y..hi.y {
                self.set(Pos::new(x, y), pixel.clone());
            }
        }
    }

    fn rectangle_frame_with(&mut self, a: Pos, b: Pos, glyphs: FrameGlyphs) {
        let vertical = Pixel::new(glyphs.vertical);
        let horizontal = Pixel::new(glyphs.horizontal);

        let mut pos = a;
        self.walk(&mut pos, Axis::X, b.x, &vertical);
        self.walk(&mut pos, Axis::Y, b.y, &horizontal);
        self.walk(&mut pos, Axis::X, a.x, &vertical);
        self.walk(&mut pos, Axis::Y, a.y, &horizontal);

        // Corners last so they win over edge glyphs.
        self.set(a, Pixel::new(glyphs.top_left));
        self.set(Pos::new(a.x, b.y), Pixel::new(glyphs.top_right));
        self.set(b, Pixel::new(glyphs.bottom_right));
        self.set(Pos::new(b.x, a.y), Pixel::new(glyphs.bottom_left));
    }
}
