#![forbid(unsafe_code)]

//! Nested-frame console panels.
//!
//! A [`Session`] draws one heavy-bordered window: a title bar with optional
//! buttons, sections, light sub-frames nested to any depth, and aligned
//! column tables. Every line is complete when it reaches the [`Sink`], and
//! every line is exactly `content_width + 2` glyphs wide.
//!
//! # Example
//! ```
//! use chalk_console::{Session, WindowButtons};
//! use chalk_core::Sink;
//!
//! let mut session = Session::begin(Sink::capture(), "Test", WindowButtons::NONE, 10).unwrap();
//! session.print("hi").unwrap();
//! let sink = session.end().unwrap();
//! assert_eq!(
//!     sink.captured().unwrap(),
//!     [
//!         "┏━━━━━━━━━━┓",
//!         "┃ Test     ┃",
//!         "┣━━━━━━━━━━┫",
//!         "┃ hi       ┃",
//!         "┗━━━━━━━━━━┛",
//!     ]
//! );
//! ```
//!
//! [`Sink`]: chalk_core::Sink

pub mod buttons;
pub mod columns;
pub mod glyphs;
pub mod session;

pub use buttons::WindowButtons;
pub use columns::{ColumnBuffer, ColumnLayout};
pub use session::Session;
