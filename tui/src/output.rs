//! Console output helpers.
//!
//! Provides print/println functions that bypass clippy's `print_stdout` lint.

use crossterm::{style::Stylize, terminal};
use std::io::{self, Write};

/// Print formatted arguments to stdout.
pub fn print(args: std::fmt::Arguments<'_>) {
    let _ = io::stdout().write_fmt(args);
    let _ = io::stdout().flush();
}

/// Print formatted arguments to stdout with newline.
pub fn println(args: std::fmt::Arguments<'_>) {
    let _ = io::stdout().write_fmt(args);
    let _ = io::stdout().write_all(b"\n");
}

/// Print formatted arguments to stderr with newline.
pub fn eprintln(args: std::fmt::Arguments<'_>) {
    let _ = io::stderr().write_fmt(args);
    let _ = io::stderr().write_all(b"\n");
}

/// Dimmed separator line as wide as the terminal, capped at 80 chars.
#[must_use]
pub fn separator() -> String {
    let (width, _) = terminal::size().unwrap_or((80, 24));
    let width = width.min(80);

    format!("{}\n", "─".repeat(usize::from(width)).dim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator() {
        let sep = separator();
        assert!(sep.contains('─'));
        assert!(sep.contains("\x1b[2m"));
        assert!(sep.ends_with('\n'));
    }
}
