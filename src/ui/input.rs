//! Single-line text input
//!
//! The value itself lives in the store; this module only draws it and turns
//! key presses into the next value.

use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub focused: bool,
}

impl<'a> Input<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: None,
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.focused {
                theme.border_focused()
            } else {
                theme.border()
            })
            .style(theme.block_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = Vec::new();
        match (self.value.is_empty(), self.placeholder) {
            (true, Some(placeholder)) if !self.focused => {
                spans.push(Span::styled(placeholder, theme.placeholder()));
            }
            _ => spans.push(Span::styled(self.value, theme.text())),
        }
        if self.focused {
            spans.push(Span::styled("▏", theme.title()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}

/// Next value after `key`, or None if the key does not edit text
pub fn edit(value: &str, key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(String::new())
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut next = value.to_string();
            next.push(c);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = value.to_string();
            next.pop()?;
            Some(next)
        }
        _ => None,
    }
}
