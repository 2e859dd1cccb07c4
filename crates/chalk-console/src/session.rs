//! Panel sessions.
//!
//! A [`Session`] owns the [`Sink`] for as long as the panel is open. Opening
//! draws the title bar, closing draws the bottom border and hands the sink
//! back, so every panel is closed exactly once.

use std::io;

use chalk_core::sink::Sink;
use chalk_text::{glyph_count, glyphs, set_length, set_length_with};

use crate::buttons::{BUTTON_WIDTH, WindowButtons};
use crate::columns::{ColumnBuffer, ColumnLayout, divider};
use crate::glyphs::*;

/// An open console panel.
///
/// All lines share the same width, `content_width() + 2` glyphs, as long as
/// the panel is wide enough for its nesting depth.
#[derive(Debug)]
pub struct Session {
    sink: Sink,
    content_width: usize,
    depth: usize,
    columns: ColumnBuffer,
}

impl Session {
    /// Open a panel and draw its title bar.
    ///
    /// Each enabled button takes four glyphs out of `requested_width` while
    /// enough remains. The interior is never narrower than the title plus
    /// one space on each side.
    pub fn begin(
        sink: Sink,
        title: &str,
        buttons: WindowButtons,
        requested_width: usize,
    ) -> io::Result<Self> {
        let mut width = requested_width;
        for _ in 0..buttons.count() {
            if width >= BUTTON_WIDTH {
                width -= BUTTON_WIDTH;
            }
        }
        let width = width.max(glyph_count(title) + 2);

        let mut session = Self {
            sink,
            content_width: width + buttons.reserved_width(),
            depth: 0,
            columns: ColumnBuffer::new(),
        };
        chalk_core::debug!(
            title,
            content_width = session.content_width,
            buttons = buttons.count(),
            "console: begin"
        );

        let horizontal = WINDOW_HORIZONTAL.repeat(width);
        let tab = WINDOW_HORIZONTAL.repeat(BUTTON_WIDTH - 1);

        let mut top = format!("{WINDOW_TOP_LEFT}{horizontal}");
        let mut bar = format!(
            "{WINDOW_VERTICAL} {} ",
            set_length(title, width.saturating_sub(2))
        );
        let mut separator = format!("{WINDOW_TEE_LEFT}{horizontal}");
        for label in buttons.labels() {
            top.push_str(BUTTON_TEE_DOWN);
            top.push_str(&tab);
            bar.push_str(&format!("{BUTTON_DIVIDER} {label} "));
            separator.push_str(BUTTON_TEE_UP);
            separator.push_str(&tab);
        }
        top.push_str(WINDOW_TOP_RIGHT);
        bar.push_str(WINDOW_VERTICAL);
        separator.push_str(WINDOW_TEE_RIGHT);

        session.emit(&top)?;
        session.emit(&bar)?;
        session.emit(&separator)?;
        Ok(session)
    }

    /// Interior width of the panel in glyphs.
    #[inline]
    pub const fn content_width(&self) -> usize {
        self.content_width
    }

    /// Number of open sub-frames.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Whether prints are currently buffered into columns.
    #[inline]
    pub const fn in_column_mode(&self) -> bool {
        self.columns.is_active()
    }

    /// The sink lines are written to.
    #[inline]
    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Draw a section header across the full width and close all sub-frames.
    ///
    /// Sub-frames still open are abandoned without their bottom borders.
    pub fn begin_section(&mut self, title: &str) -> io::Result<()> {
        let label = set_length_with(
            title,
            self.content_width.saturating_sub(3),
            FRAME_HORIZONTAL,
            true,
        );
        let line = format!("{SECTION_LEFT}{FRAME_HORIZONTAL} {label}{FRAME_HORIZONTAL}{SECTION_RIGHT}");
        self.emit(&line)?;
        self.depth = 0;
        Ok(())
    }

    /// Open a light sub-frame, with `label` in its top border unless empty.
    pub fn begin_frame(&mut self, label: &str) -> io::Result<()> {
        let span = self.span();
        let body = if label.is_empty() {
            format!(
                "{FRAME_TOP_LEFT}{}{FRAME_TOP_RIGHT}",
                FRAME_HORIZONTAL.repeat(span.saturating_sub(2))
            )
        } else {
            format!(
                "{FRAME_TOP_LEFT}{FRAME_HORIZONTAL} {}{FRAME_HORIZONTAL}{FRAME_TOP_RIGHT}",
                set_length_with(label, span.saturating_sub(5), FRAME_HORIZONTAL, true)
            )
        };
        let line = self.nest(&body);
        self.emit(&line)?;
        self.depth += 1;
        Ok(())
    }

    /// Close the innermost sub-frame. Does nothing when none is open.
    ///
    /// The frame stays open when its bottom border cannot be written.
    pub fn end_frame(&mut self) -> io::Result<()> {
        if self.depth == 0 {
            return Ok(());
        }
        self.depth -= 1;
        let body = format!(
            "{FRAME_BOTTOM_LEFT}{}{FRAME_BOTTOM_RIGHT}",
            FRAME_HORIZONTAL.repeat(self.span().saturating_sub(2))
        );
        let line = self.nest(&body);
        if let Err(err) = self.emit(&line) {
            self.depth += 1;
            return Err(err);
        }
        Ok(())
    }

    /// Print one line of text inside the innermost frame.
    ///
    /// In column mode the text is buffered into the active column instead
    /// and nothing is written until [`flush_columns`](Self::flush_columns).
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        if self.columns.is_active() {
            chalk_core::trace!(column = self.columns.active_column(), "console: buffer cell");
            self.columns.push(text);
            return Ok(());
        }
        let inner = set_length(text, self.span().saturating_sub(2));
        let line = self.nest(&format!(" {inner} "));
        self.emit(&line)
    }

    /// Print `text` one glyph per line.
    pub fn vertical_print(&mut self, text: &str) -> io::Result<()> {
        for glyph in glyphs(text) {
            self.print(glyph)?;
        }
        Ok(())
    }

    /// Start buffering prints into the next column.
    pub fn begin_column(&mut self) {
        self.columns.begin_column();
        chalk_core::trace!(column = self.columns.active_column(), "console: begin column");
    }

    /// Lay out and print the buffered columns, then leave column mode.
    ///
    /// The buffer is consumed even when a write fails; the depth is always
    /// restored to its value on entry.
    pub fn flush_columns(&mut self, layout: &ColumnLayout) -> io::Result<()> {
        let rows = self.columns.take();
        if rows.is_empty() {
            return Ok(());
        }

        let framed_depth = usize::from(layout.framed);
        let available = self
            .content_width
            .saturating_sub(2 * (self.depth + framed_depth) + 2);
        let widths = layout.widths(&rows, available);
        chalk_core::debug!(
            rows = rows.len(),
            columns = widths.len(),
            framed = layout.framed,
            "console: flush columns"
        );

        let interior = self.span().saturating_sub(2);
        if layout.framed {
            let body = format!(
                "{FRAME_TOP_LEFT}{}{FRAME_TOP_RIGHT}",
                divider(&widths, FRAME_TEE_DOWN, interior)
            );
            let line = self.nest(&body);
            self.emit(&line)?;
            self.depth += 1;
        }

        let printed = rows
            .iter()
            .try_for_each(|row| self.print(&layout.render_row(row, &widths)));

        if layout.framed {
            self.depth -= 1;
        }
        printed?;

        if layout.framed {
            let body = format!(
                "{FRAME_BOTTOM_LEFT}{}{FRAME_BOTTOM_RIGHT}",
                divider(&widths, FRAME_TEE_UP, interior)
            );
            let line = self.nest(&body);
            self.emit(&line)?;
        }
        Ok(())
    }

    /// Draw the bottom border and return the sink.
    pub fn end(mut self) -> io::Result<Sink> {
        let line = format!(
            "{WINDOW_BOTTOM_LEFT}{}{WINDOW_BOTTOM_RIGHT}",
            WINDOW_HORIZONTAL.repeat(self.content_width)
        );
        self.emit(&line)?;
        self.sink.flush()?;
        chalk_core::debug!(depth = self.depth, "console: end");
        Ok(self.sink)
    }

    /// Width available at the current depth, between the nesting bars.
    fn span(&self) -> usize {
        self.content_width.saturating_sub(2 * self.depth)
    }

    /// Surround `body` with the window border and one bar per open frame.
    fn nest(&self, body: &str) -> String {
        let bars = BUTTON_DIVIDER.repeat(self.depth);
        format!("{WINDOW_VERTICAL}{bars}{body}{bars}{WINDOW_VERTICAL}")
    }

    fn emit(&mut self, line: &str) -> io::Result<()> {
        chalk_core::trace!(line, "console: emit");
        self.sink.write_line(line)
    }
}
