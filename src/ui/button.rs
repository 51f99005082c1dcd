//! Pressable button
//!
//! A pure function of its props: label, flags and a caller style override.
//! Nothing is stored between frames.

use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Caller-supplied style override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Plain,
    /// Keyboard focus is on this button
    Focused,
}

#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    pub label: &'a str,
    pub disabled: bool,
    pub destructive: bool,
    pub style: ButtonStyle,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            disabled: false,
            destructive: false,
            style: ButtonStyle::Plain,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Invoke `on_press` unless disabled. Returns whether it ran.
    pub fn press(&self, on_press: impl FnOnce()) -> bool {
        if self.disabled {
            return false;
        }
        on_press();
        true
    }

    /// Composed style: base, disabled, caller override, then destructive
    /// last so the caller cannot mask it.
    pub fn composed_style(&self, theme: &Theme) -> Style {
        let mut style = theme.button_base();
        if self.disabled {
            style = style.patch(theme.button_disabled());
        }
        if self.style == ButtonStyle::Focused {
            style = style.patch(theme.button_focused());
        }
        if self.destructive {
            style = style.patch(theme.button_destructive());
        }
        style
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if self.style == ButtonStyle::Focused {
            theme.border_focused()
        } else {
            theme.border()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(theme.block_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label = Paragraph::new(self.label)
            .style(self.composed_style(theme))
            .alignment(Alignment::Center);
        frame.render_widget(label, inner);
    }
}
