//! Terminal setup and teardown.
//!
//! Raw mode plus alternate screen for the TUI, with a panic hook that
//! restores the terminal before the panic message prints.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: raw mode + alternate screen.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Safe to call multiple times; errors are ignored so cleanup never
/// masks the error that caused the shutdown.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal first.
///
/// Without this a panic inside the draw loop leaves the shell in raw
/// mode with the panic message swallowed by the alternate screen.
pub fn setup_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        leave_tui_mode(&mut io::stdout());
        original(info);
    }));
}
