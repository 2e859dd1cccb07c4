#![forbid(unsafe_code)]

//! Glyph-width text layout for chalk.
//!
//! Every bordered line chalk draws is assembled from pieces whose widths must
//! sum to a fixed total. This crate provides the measuring and fitting
//! primitives that guarantee it:
//! - [`glyph_count`] - length of a string in glyphs (grapheme clusters)
//! - [`truncate_glyphs`] - keep the first `n` glyphs
//! - [`set_length`] / [`set_length_with`] - pad or truncate to exactly `n` glyphs
//!
//! # Example
//! ```
//! use chalk_text::{set_length, set_length_with};
//!
//! assert_eq!(set_length("hi", 4), "hi  ");
//! assert_eq!(set_length_with("abc", 5, "-", false), "abc--");
//! assert_eq!(set_length_with("Title", 8, "─", true), "Title ──");
//! assert_eq!(set_length("abcdef", 5), "abcde");
//! ```

pub mod glyph;
pub mod layout;

pub use glyph::{glyph_count, glyphs, truncate_glyphs};
pub use layout::{set_length, set_length_with};
