#![forbid(unsafe_code)]

//! Core: geometry, output sinks, configuration, and logging for chalk.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod sink;

pub use config::{ChalkConfig, ConfigError, ConfigParse};
pub use geometry::{Axis, Extent, Pos};
pub use sink::Sink;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
