//! Best-effort terminal control over any [`Write`] stream.
//!
//! Every operation is a single write followed by a flush. Failures are dropped at
//! [`Terminal::emit`]: decoration must never change the host program's control flow.

use std::fmt;
use std::io::{self, Write};

use crate::consts::Mode;
use crate::escape::{
    CLEAR_LINE, CLEAR_LINE_AFTER, CLEAR_LINE_BEFORE, CLEAR_SCREEN, CLEAR_SCREEN_AFTER,
    CLEAR_SCREEN_BEFORE, RESTORE_CURSOR, SAVE_CURSOR, esc,
};
use crate::style::Style;

/// Wraps an output stream. The stream is never closed here; take it back with
/// [`Terminal::into_inner`].
#[derive(Debug)]
pub struct Terminal<W: Write> {
    out: W,
}

impl Terminal<io::Stdout> {
    /// A terminal over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Terminal<io::Stderr> {
    /// A terminal over the process's standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Terminal<W> {
    /// Wrap `out` without taking over its lifecycle.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Give the stream back, still open.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, s: &str) {
        if let Err(e) = self
            .out
            .write_all(s.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::trace!(error = %e, len = s.len(), "terminal write dropped");
        }
    }

    /// Write `value` as-is.
    pub fn print(&mut self, value: impl fmt::Display) {
        self.emit(&value.to_string());
    }

    /// Write `value` followed by a newline.
    pub fn println(&mut self, value: impl fmt::Display) {
        self.emit(&format!("{value}\n"));
    }

    /// Write pre-formatted arguments, e.g. `term.printf(format_args!("{frame} {label}"))`.
    pub fn printf(&mut self, args: fmt::Arguments<'_>) {
        self.emit(&fmt::format(args));
    }

    /// Write `value` wrapped in `style` and a full reset.
    pub fn print_styled(&mut self, style: &Style, value: impl fmt::Display) {
        self.emit(&style.paint(value));
    }

    /// Save the cursor position (`ESC 7`).
    pub fn save_position(&mut self) {
        self.emit(SAVE_CURSOR);
    }

    /// Move the cursor back to the saved position (`ESC 8`).
    pub fn restore_position(&mut self) {
        self.emit(RESTORE_CURSOR);
    }

    /// Clear from the cursor to the end of the screen.
    pub fn clear_after_cursor(&mut self) {
        self.emit(CLEAR_SCREEN_AFTER);
    }

    /// Clear from the start of the screen to the cursor.
    pub fn clear_before_cursor(&mut self) {
        self.emit(CLEAR_SCREEN_BEFORE);
    }

    /// Clear the whole screen.
    pub fn clear_screen(&mut self) {
        self.emit(CLEAR_SCREEN);
    }

    /// Clear from the cursor to the end of the line.
    pub fn clear_line_after_cursor(&mut self) {
        self.emit(CLEAR_LINE_AFTER);
    }

    /// Clear from the start of the line to the cursor.
    pub fn clear_line_before_cursor(&mut self) {
        self.emit(CLEAR_LINE_BEFORE);
    }

    /// Clear the current line.
    pub fn clear_line(&mut self) {
        self.emit(CLEAR_LINE);
    }

    /// Write the SGR sequence for `modes`, leaving them active.
    pub fn set(&mut self, modes: &[Mode]) {
        self.emit(&esc(modes));
    }
}
