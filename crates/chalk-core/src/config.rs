#![forbid(unsafe_code)]

//! Environment-driven configuration.
//!
//! Every knob has a default; environment variables override individual
//! fields. Parsing never fails outright: invalid values are reported as
//! [`ConfigError`]s and the default for that field is kept.
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `CHALK_CANVAS_WIDTH` | `canvas_width` | `128` |
//! | `CHALK_CANVAS_HEIGHT` | `canvas_height` | `unbounded` |
//! | `CHALK_CONSOLE_WIDTH` | `console_width` | `64` |
//! | `CHALK_COLUMN_PAD` | `column_pad` | `"-"` |

use std::env;
use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::Extent;

const ENV_CANVAS_WIDTH: &str = "CHALK_CANVAS_WIDTH";
const ENV_CANVAS_HEIGHT: &str = "CHALK_CANVAS_HEIGHT";
const ENV_CONSOLE_WIDTH: &str = "CHALK_CONSOLE_WIDTH";
const ENV_COLUMN_PAD: &str = "CHALK_COLUMN_PAD";

/// Default canvas width in cells.
pub const DEFAULT_CANVAS_WIDTH: usize = 128;
/// Default requested panel width in glyphs.
pub const DEFAULT_CONSOLE_WIDTH: usize = 64;

/// Runtime configuration for canvases and panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChalkConfig {
    /// Configured canvas width.
    pub canvas_width: Extent,
    /// Configured canvas height.
    pub canvas_height: Extent,
    /// Requested panel width passed to `begin`.
    pub console_width: usize,
    /// Glyph used to pad column cells.
    pub column_pad: String,
}

impl Default for ChalkConfig {
    fn default() -> Self {
        Self {
            canvas_width: Extent::Fixed(DEFAULT_CANVAS_WIDTH),
            canvas_height: Extent::Unbounded,
            console_width: DEFAULT_CONSOLE_WIDTH,
            column_pad: "-".to_owned(),
        }
    }
}

/// Result of parsing configuration: the effective config and every rejected value.
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: ChalkConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ChalkConfig {
    /// Parse config from environment variables, dropping diagnostics.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config from an arbitrary key lookup.
    pub fn from_env_with<F>(mut get: F) -> ConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_CANVAS_WIDTH) {
            match Extent::parse(&value) {
                Some(parsed) => config.canvas_width = parsed,
                None => errors.push(ConfigError::new(
                    "canvas_width",
                    value,
                    "expected integer or unbounded",
                )),
            }
        }

        if let Some(value) = get(ENV_CANVAS_HEIGHT) {
            match Extent::parse(&value) {
                Some(parsed) => config.canvas_height = parsed,
                None => errors.push(ConfigError::new(
                    "canvas_height",
                    value,
                    "expected integer or unbounded",
                )),
            }
        }

        if let Some(value) = get(ENV_CONSOLE_WIDTH) {
            match value.trim().parse::<usize>() {
                Ok(parsed) => config.console_width = parsed,
                Err(_) => errors.push(ConfigError::new(
                    "console_width",
                    value,
                    "expected non-negative integer",
                )),
            }
        }

        if let Some(value) = get(ENV_COLUMN_PAD) {
            if value.graphemes(true).count() == 1 {
                config.column_pad = value;
            } else {
                errors.push(ConfigError::new(
                    "column_pad",
                    value,
                    "expected exactly one glyph",
                ));
            }
        }

        ConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.column_pad.graphemes(true).count() != 1 {
            errors.push(ConfigError::new(
                "column_pad",
                self.column_pad.clone(),
                "expected exactly one glyph",
            ));
        }
        if self.canvas_width == Extent::Fixed(0) {
            errors.push(ConfigError::new("canvas_width", "0", "must be >= 1"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
