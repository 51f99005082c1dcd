//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme definitions and colors
//! - Button and text input controls
//! - Shared widgets (popups, status bar)
//! - Main render entry point

pub mod button;
pub mod input;
pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
pub use theme::Theme;

/// Flatten a test buffer into newline-separated rows
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
