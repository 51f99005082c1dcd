//! Image picker
//!
//! Terminals have no camera, so this route asks for the path of an image
//! file instead and hands it to the draft.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::path::Path;

use crate::navigation::Navigate;
use crate::store::action::change_image;
use crate::store::Dispatch;
use crate::ui::button::{Button, ButtonStyle};
use crate::ui::input::{self, Input};
use crate::ui::Theme;

pub const PATH_PROMPT: &str = "Please enter the path of an image.";

#[derive(Debug, Clone, Default)]
pub struct CameraScreen {
    path: String,
    message: Option<String>,
}

impl CameraScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Attach the entered path to the draft and leave the picker
    pub fn use_image(&mut self, dispatch: &mut dyn Dispatch, nav: &mut dyn Navigate) -> bool {
        let path = self.path.trim();
        if path.is_empty() {
            self.message = Some(PATH_PROMPT.to_string());
            return false;
        }

        let expanded = expand_home(path);
        if !Path::new(&expanded).is_file() {
            self.message = Some(format!("No file at {}", expanded));
            return false;
        }

        self.message = None;
        dispatch.dispatch(change_image(&expanded));
        nav.back();
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent, dispatch: &mut dyn Dispatch, nav: &mut dyn Navigate) {
        match key.code {
            KeyCode::Esc => {
                nav.back();
            }
            KeyCode::Enter => {
                self.use_image(dispatch, nav);
            }
            _ => {
                if let Some(next) = input::edit(&self.path, key) {
                    self.path = next;
                }
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .style(theme.block_style())
            .title(" Choose Image ")
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(if self.message().is_some() { 2 } else { 0 }),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

        if let Some(message) = self.message() {
            frame.render_widget(
                Paragraph::new(Line::styled(message, theme.message()))
                    .wrap(Wrap { trim: true }),
                rows[0],
            );
        }
        frame.render_widget(Paragraph::new("Image Path").style(theme.text_dim()), rows[1]);
        Input::new(&self.path)
            .placeholder("~/Pictures/workout.jpg")
            .focused(true)
            .render(frame, rows[2], theme);
        Button::new("Use Image")
            .disabled(self.path.trim().is_empty())
            .style(ButtonStyle::Plain)
            .render(frame, rows[3], theme);
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> String {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest).to_string_lossy().into_owned(),
        _ => path.to_string(),
    }
}
