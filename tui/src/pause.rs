//! Blocking "press any key" wait.

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use std::io::{self, BufRead, IsTerminal};

/// Restores cooked terminal mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    /// Switch the terminal to raw mode.
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until the user presses a key.
///
/// On a terminal this waits for a single key press. When stdin is
/// redirected it waits for one line or end of input instead.
///
/// # Errors
///
/// Returns an error if the terminal cannot be switched to raw mode or
/// stdin cannot be read.
pub fn wait_for_keypress() -> io::Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        wait_for_key_event()
    } else {
        wait_for_line(&mut stdin.lock())
    }
}

/// Wait for a key press event in raw mode.
fn wait_for_key_event() -> io::Result<()> {
    let _raw = RawModeGuard::enable()?;
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}

/// Consume one line, or nothing at end of input.
fn wait_for_line(reader: &mut impl BufRead) -> io::Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}
