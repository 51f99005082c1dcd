//! Theme definitions for workoutlog
//!
//! Provides three built-in themes: Gruvbox, Nord, and Transparent.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    pub accent: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Buttons
    pub button_bg: Color,
    pub button_fg: Color,
    pub destructive: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Gruvbox => Self::gruvbox(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Gruvbox dark theme (default)
    pub fn gruvbox() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),        // #282828
            fg: Color::Rgb(235, 219, 178),     // #ebdbb2
            fg_dim: Color::Rgb(146, 131, 116), // #928374

            accent: Color::Rgb(254, 128, 25), // #fe8019

            success: Color::Rgb(184, 187, 38), // #b8bb26
            error: Color::Rgb(251, 73, 52),    // #fb4934

            border: Color::Rgb(80, 73, 69),            // #504945
            border_focused: Color::Rgb(168, 153, 132), // #a89984
            selection_bg: Color::Rgb(80, 73, 69),      // #504945
            selection_fg: Color::Rgb(235, 219, 178),   // #ebdbb2

            button_bg: Color::Rgb(69, 133, 136),  // #458588
            button_fg: Color::Rgb(251, 241, 199), // #fbf1c7
            destructive: Color::Rgb(204, 36, 29), // #cc241d
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),        // #2e3440
            fg: Color::Rgb(236, 239, 244),     // #eceff4
            fg_dim: Color::Rgb(76, 86, 106),   // #4c566a

            accent: Color::Rgb(136, 192, 208), // #88c0d0

            success: Color::Rgb(163, 190, 140), // #a3be8c
            error: Color::Rgb(191, 97, 106),    // #bf616a

            border: Color::Rgb(59, 66, 82),            // #3b4252
            border_focused: Color::Rgb(136, 192, 208), // #88c0d0
            selection_bg: Color::Rgb(76, 86, 106),     // #4c566a
            selection_fg: Color::Rgb(236, 239, 244),   // #eceff4

            button_bg: Color::Rgb(94, 129, 172),   // #5e81ac
            button_fg: Color::Rgb(236, 239, 244),  // #eceff4
            destructive: Color::Rgb(191, 97, 106), // #bf616a
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,

            accent: Color::Cyan,

            success: Color::Green,
            error: Color::Red,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,

            button_bg: Color::Blue,
            button_fg: Color::White,
            destructive: Color::Red,
        }
    }

    // Style helpers for common UI patterns

    /// Background for blocks and panels
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    /// Validation message banner
    pub fn message(&self) -> Style {
        Style::default()
            .fg(self.error)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Input placeholder text
    pub fn placeholder(&self) -> Style {
        Style::default()
            .fg(self.fg_dim)
            .bg(self.bg)
            .add_modifier(Modifier::ITALIC)
    }

    // Button style fragments, composed by `Button::style`

    pub fn button_base(&self) -> Style {
        Style::default()
            .fg(self.button_fg)
            .bg(self.button_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled(&self) -> Style {
        Style::default()
            .fg(self.fg_dim)
            .bg(self.border)
            .remove_modifier(Modifier::BOLD)
    }

    pub fn button_focused(&self) -> Style {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }

    pub fn button_destructive(&self) -> Style {
        Style::default().bg(self.destructive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let gruvbox = Theme::from_name(ThemeName::Gruvbox);
        assert_eq!(gruvbox.bg, Color::Rgb(40, 40, 40));

        let nord = Theme::from_name(ThemeName::Nord);
        assert_eq!(nord.bg, Color::Rgb(46, 52, 64));

        let transparent = Theme::from_name(ThemeName::Transparent);
        assert_eq!(transparent.bg, Color::Reset);
    }

    #[test]
    fn test_disabled_button_drops_bold() {
        let theme = Theme::gruvbox();
        let composed = theme.button_base().patch(theme.button_disabled());
        assert!(!composed.add_modifier.contains(Modifier::BOLD));
        assert_eq!(composed.bg, Some(theme.border));
    }
}
