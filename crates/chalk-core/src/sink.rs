#![forbid(unsafe_code)]

//! Output sinks.
//!
//! Panels and canvases never write to stdout directly. Every finished line
//! goes through a [`Sink`], which either captures it in memory or forwards it
//! to an [`io::Write`] implementation.
//!
//! ```
//! use chalk_core::Sink;
//!
//! let mut sink = Sink::capture();
//! sink.write_line("┏━━┓").unwrap();
//! assert_eq!(sink.captured(), Some(&["┏━━┓".to_string()][..]));
//! ```

use std::fmt;
use std::io::{self, Write};

/// Destination for rendered lines.
pub enum Sink {
    /// Keep lines in memory (tests, embedding in other output).
    Capture(Vec<String>),
    /// Write lines to an `io::Write`, each followed by `\n`.
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Create a capture sink.
    #[must_use]
    pub fn capture() -> Self {
        Self::Capture(Vec::new())
    }

    /// Create a writer sink.
    pub fn writer<W: Write + Send + 'static>(w: W) -> Self {
        Self::Writer(Box::new(w))
    }

    /// Sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::writer(io::stdout())
    }

    /// Emit one line. The line must not contain the terminating newline.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Self::Capture(lines) => {
                lines.push(line.to_owned());
                Ok(())
            }
            Self::Writer(w) => {
                w.write_all(line.as_bytes())?;
                w.write_all(b"\n")
            }
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Capture(_) => Ok(()),
            Self::Writer(w) => w.flush(),
        }
    }

    /// Captured lines (only for the capture sink).
    #[must_use]
    pub fn captured(&self) -> Option<&[String]> {
        match self {
            Self::Capture(lines) => Some(lines),
            Self::Writer(_) => None,
        }
    }

    /// Take the captured lines, leaving the capture empty.
    pub fn take_captured(&mut self) -> Vec<String> {
        match self {
            Self::Capture(lines) => std::mem::take(lines),
            Self::Writer(_) => Vec::new(),
        }
    }

    /// Captured output joined with newlines, each line terminated.
    #[must_use]
    pub fn captured_text(&self) -> String {
        let mut out = String::new();
        for line in self.captured().unwrap_or_default() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::capture()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capture(lines) => f.debug_tuple("Capture").field(&lines.len()).finish(),
            Self::Writer(_) => f.debug_tuple("Writer").finish(),
        }
    }
}
