//! Text styling with SGR sequences.

use std::fmt;
use std::io::{self, Write};

use crate::consts::Mode;
use crate::escape::{RESET, esc};

/// A set of SGR modes applied to a span of text.
///
/// The enter sequence is built once in [`Style::new`]. Every painted span ends
/// with a full reset, so attributes never leak into whatever follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    esc: String,
}

impl Style {
    pub fn new(modes: &[Mode]) -> Self {
        Self { esc: esc(modes) }
    }

    /// The cached enter sequence.
    pub fn enter(&self) -> &str {
        &self.esc
    }

    fn wrap(&self, payload: &str) -> String {
        let mut out = String::with_capacity(self.esc.len() + payload.len() + RESET.len());
        out.push_str(&self.esc);
        out.push_str(payload);
        out.push_str(RESET);
        out
    }

    pub fn paint(&self, value: impl fmt::Display) -> String {
        self.wrap(&value.to_string())
    }

    /// Like [`Style::paint`] with a trailing newline inside the styled span.
    pub fn paintln(&self, value: impl fmt::Display) -> String {
        self.wrap(&format!("{value}\n"))
    }

    /// Paint pre-formatted arguments, e.g. `style.paint_fmt(format_args!("{n} files"))`.
    pub fn paint_fmt(&self, args: fmt::Arguments<'_>) -> String {
        self.wrap(&fmt::format(args))
    }

    /// Borrow this style as a [`Display`](fmt::Display) adapter around `value`.
    pub fn styled<T: fmt::Display>(&self, value: T) -> Painted<'_, T> {
        Painted { style: self, value }
    }

    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W, value: impl fmt::Display) {
        put(w, &self.paint(value));
    }

    pub fn writeln_to<W: Write + ?Sized>(&self, w: &mut W, value: impl fmt::Display) {
        put(w, &self.paintln(value));
    }

    pub fn write_fmt_to<W: Write + ?Sized>(&self, w: &mut W, args: fmt::Arguments<'_>) {
        put(w, &self.paint_fmt(args));
    }

    pub fn print(&self, value: impl fmt::Display) {
        put(&mut io::stdout().lock(), &self.paint(value));
    }

    pub fn println(&self, value: impl fmt::Display) {
        put(&mut io::stdout().lock(), &self.paintln(value));
    }

    pub fn print_fmt(&self, args: fmt::Arguments<'_>) {
        put(&mut io::stdout().lock(), &self.paint_fmt(args));
    }
}

/// Output of [`Style::styled`]; formats as the painted value.
#[derive(Debug, Clone, Copy)]
pub struct Painted<'a, T> {
    style: &'a Style,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.style.esc, self.value, RESET)
    }
}

// Styled output is cosmetic; a broken writer must not take the caller down.
fn put<W: Write + ?Sized>(w: &mut W, s: &str) {
    if let Err(e) = w.write_all(s.as_bytes()).and_then(|()| w.flush()) {
        tracing::trace!(error = %e, "styled write dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BOLD, FG_GREEN, FG_RED, UNDERLINE};

    #[test]
    fn enter_is_cached_sequence() {
        let style = Style::new(&[BOLD, FG_RED]);
        assert_eq!(style.enter(), "\x1b[1;31m");
    }

    #[test]
    fn paint_wraps_with_enter_and_reset() {
        let style = Style::new(&[BOLD]);
        assert_eq!(style.paint("hi"), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn paint_accepts_any_display() {
        let style = Style::new(&[FG_GREEN]);
        assert_eq!(style.paint(42), "\x1b[32m42\x1b[0m");
    }

    #[test]
    fn paintln_keeps_newline_inside_span() {
        let style = Style::new(&[UNDERLINE]);
        assert_eq!(style.paintln("row"), "\x1b[4mrow\n\x1b[0m");
    }

    #[test]
    fn paint_fmt_formats_arguments() {
        let style = Style::new(&[FG_RED]);
        let n = 3;
        assert_eq!(
            style.paint_fmt(format_args!("{n} errors")),
            "\x1b[31m3 errors\x1b[0m"
        );
    }

    #[test]
    fn reset_always_last_even_with_embedded_escapes() {
        let inner = Style::new(&[UNDERLINE]).paint("x");
        let payloads = ["", "plain", "\x1b[1munclosed", inner.as_str(), "\x1b[0m"];
        let style = Style::new(&[BOLD, FG_RED]);
        for payload in payloads {
            let out = style.paint(payload);
            assert!(out.starts_with(style.enter()));
            assert!(out.ends_with("\x1b[0m"));
            assert_eq!(&out[style.enter().len()..out.len() - RESET.len()], payload);
        }
    }

    #[test]
    fn styled_matches_paint() {
        let style = Style::new(&[BOLD]);
        assert_eq!(format!("{}", style.styled("ok")), style.paint("ok"));
        assert_eq!(
            format!("[{}]", style.styled(7)),
            format!("[{}]", style.paint(7))
        );
    }

    #[test]
    fn write_to_writes_painted_bytes() {
        let style = Style::new(&[BOLD]);
        let mut buf = Vec::new();
        style.write_to(&mut buf, "a");
        style.writeln_to(&mut buf, "b");
        style.write_fmt_to(&mut buf, format_args!("{}", 'c'));
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\x1b[1ma\x1b[0m\x1b[1mb\n\x1b[0m\x1b[1mc\x1b[0m"
        );
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn write_to_broken_writer_is_silent() {
        let style = Style::new(&[BOLD]);
        style.write_to(&mut Broken, "lost");
        style.writeln_to(&mut Broken, "lost");
    }

    #[test]
    fn style_is_shareable_across_threads() {
        let style = std::sync::Arc::new(Style::new(&[FG_GREEN]));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let style = style.clone();
                std::thread::spawn(move || style.paint(i))
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), format!("\x1b[32m{i}\x1b[0m"));
        }
    }
}
