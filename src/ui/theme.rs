//! Color theme constants for the postboard UI.
//!
//! Minimal dark palette, applied consistently across both panels.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel
pub const COLOR_BORDER_FOCUS: Color = Color::White;

/// Accent color for the selected row
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for secondary info (emails, hints, comment bodies)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Spinner and in-flight load indicators
pub const COLOR_LOADING: Color = Color::LightGreen;

/// Failure lines in the panels and status bar
pub const COLOR_ERROR: Color = Color::Red;

/// Post titles
pub const COLOR_TITLE: Color = Color::Cyan;

/// Spinner animation frames, advanced once per UI tick.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// The spinner frame for a given tick.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}
