#![forbid(unsafe_code)]

//! Render kernel: pixels, the growable canvas, and drawing primitives.

pub mod canvas;
pub mod drawing;

pub use canvas::{Canvas, CanvasError, Pixel};
pub use drawing::{Draw, FrameGlyphs};
