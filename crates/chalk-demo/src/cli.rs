#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Rendering options come from `CHALK_*` environment variables through
//! [`chalk::ChalkConfig`]; flags here only pick what to draw and override
//! the panel width.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
chalk demo: sample debug console and canvas diagram

USAGE:
    chalk-demo [OPTIONS]

OPTIONS:
    --width=N        Requested panel width (default: CHALK_CONSOLE_WIDTH or 64)
    --console        Draw only the debug console
    --canvas         Draw only the canvas diagram
    --help, -h       Show this help message
    --version, -V    Show version

ENVIRONMENT VARIABLES:
    CHALK_CANVAS_WIDTH    Canvas width in cells, or 'unbounded' (default: 128)
    CHALK_CANVAS_HEIGHT   Canvas height in rows, or 'unbounded' (default)
    CHALK_CONSOLE_WIDTH   Requested panel width (default: 64)
    CHALK_COLUMN_PAD      Single glyph used to pad table cells (default: '-')
    RUST_LOG              Log filter for diagnostics on stderr";

/// Which scenes to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenes {
    All,
    Console,
    Canvas,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Panel width override.
    pub width: Option<usize>,
    pub scenes: Scenes,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            width: None,
            scenes: Scenes::All,
        }
    }
}

impl Opts {
    /// Parse the process arguments, exiting on `--help`, `--version` or bad input.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1)) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("chalk-demo {VERSION}");
                process::exit(0);
            }
            Err(message) => {
                eprintln!("{message}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from<I>(args: I) -> Result<Parsed, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--version" | "-V" => return Ok(Parsed::Version),
                "--console" => opts.scenes = Scenes::Console,
                "--canvas" => opts.scenes = Scenes::Canvas,
                other => {
                    if let Some(val) = other.strip_prefix("--width=") {
                        match val.parse() {
                            Ok(n) => opts.width = Some(n),
                            Err(_) => return Err(format!("Invalid --width value: {val}")),
                        }
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }
        Ok(Parsed::Run(opts))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Opts),
    Help,
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Parsed, String> {
        Opts::parse_from(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn default_opts() {
        assert_eq!(parse(&[]), Ok(Parsed::Run(Opts::default())));
    }

    #[test]
    fn width_and_scene_flags() {
        let parsed = parse(&["--width=40", "--canvas"]);
        assert_eq!(
            parsed,
            Ok(Parsed::Run(Opts {
                width: Some(40),
                scenes: Scenes::Canvas,
            }))
        );
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--width=x", "-h"]), Err("Invalid --width value: x".into()));
        assert_eq!(parse(&["-h", "--width=x"]), Ok(Parsed::Help));
        assert_eq!(parse(&["-V"]), Ok(Parsed::Version));
    }

    #[test]
    fn unknown_argument_rejected() {
        assert_eq!(parse(&["--nope"]), Err("Unknown argument: --nope".into()));
    }

    #[test]
    fn help_text_lists_env_vars() {
        for var in [
            "CHALK_CANVAS_WIDTH",
            "CHALK_CANVAS_HEIGHT",
            "CHALK_CONSOLE_WIDTH",
            "CHALK_COLUMN_PAD",
        ] {
            assert!(HELP_TEXT.contains(var), "{var}");
        }
    }
}
