#![forbid(unsafe_code)]

//! chalk public facade crate.
//!
//! Re-exports the panel renderer, the character canvas and their shared
//! types, and offers a prelude for day-to-day usage.
//!
//! ```
//! use chalk::prelude::*;
//!
//! fn panel() -> chalk::Result<Vec<String>> {
//!     let mut session = Session::begin(Sink::capture(), "Test", WindowButtons::NONE, 10)?;
//!     session.print("hi")?;
//!     let mut sink = session.end()?;
//!     Ok(sink.take_captured())
//! }
//!
//! assert_eq!(panel().unwrap()[3], "┃ hi       ┃");
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use chalk_core::config::{ChalkConfig, ConfigError, ConfigParse};
pub use chalk_core::geometry::{Axis, Extent, Pos};
pub use chalk_core::sink::Sink;

// --- Text re-exports -------------------------------------------------------

pub use chalk_text::{glyph_count, set_length, set_length_with, truncate_glyphs};

// --- Render re-exports -----------------------------------------------------

pub use chalk_render::{Canvas, CanvasError, Draw, FrameGlyphs, Pixel};

// --- Console re-exports ----------------------------------------------------

pub use chalk_console::{ColumnLayout, Session, WindowButtons};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for chalk.
#[derive(Debug)]
pub enum Error {
    /// Writing to the sink failed.
    Io(std::io::Error),
    /// Indexed canvas access outside the grid.
    Canvas(CanvasError),
    /// One or more configuration values were rejected.
    Config(Vec<ConfigError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Canvas(err) => write!(f, "{err}"),
            Self::Config(errors) => {
                write!(f, "invalid configuration: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Canvas(err) => Some(err),
            Self::Config(errors) => errors
                .first()
                .map(|err| err as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<CanvasError> for Error {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(vec![err])
    }
}

impl From<Vec<ConfigError>> for Error {
    fn from(errors: Vec<ConfigError>) -> Self {
        Self::Config(errors)
    }
}

/// Standard result type for chalk APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Load configuration from the `CHALK_*` environment variables.
///
/// Unparsable values are logged and replaced by their defaults; a config
/// that still fails [`ChalkConfig::validate`] is an error.
pub fn load_config() -> Result<ChalkConfig> {
    load_config_with(|key| std::env::var(key).ok())
}

/// [`load_config`] with an injectable variable lookup.
pub fn load_config_with<F>(get: F) -> Result<ChalkConfig>
where
    F: FnMut(&str) -> Option<String>,
{
    let parsed = ChalkConfig::from_env_with(get);
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    for error in &parsed.errors {
        chalk_core::warn!(%error, "ignoring invalid configuration value");
    }
    parsed.config.validate()?;
    Ok(parsed.config)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Canvas, ChalkConfig, ColumnLayout, Draw, Error, Extent, Pixel, Pos, Result, Session,
        Sink, WindowButtons,
    };

    pub use crate::{console, core, render, text};
}

pub use chalk_console as console;
pub use chalk_core as core;
pub use chalk_render as render;
pub use chalk_text as text;
