//! Create / edit workout form
//!
//! The screen is a view over the store's draft plus one piece of local
//! state, the validation message. Whether it creates or edits is decided
//! solely by the `workout_id` route parameter: present means edit mode,
//! which labels the submit button "Save" and offers Delete.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::navigation::{Navigate, Route};
use crate::store::action::{change_name, change_type, delete_workout, save_workout};
use crate::store::{AppState, Dispatch, SaveParams};
use crate::ui::button::{Button, ButtonStyle};
use crate::ui::input::{self, Input};
use crate::ui::{widgets, Theme};

pub const TITLE: &str = "Edit Workout";

/// Shown when submitting without a workout type
pub const TYPE_PROMPT: &str = "Please enter a workout type.";

const TYPE_PLACEHOLDER: &str = "Run, swim, weights, etc.";

/// Everything the screen reads from the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditWorkoutProps {
    pub workout_id: Option<String>,
    pub name: String,
    pub kind: String,
    pub image_uri: Option<String>,
}

impl EditWorkoutProps {
    pub fn is_editing(&self) -> bool {
        self.workout_id.is_some()
    }

    /// Both name and type must be non-blank before submitting
    pub fn submit_disabled(&self) -> bool {
        self.name.trim().is_empty() || self.kind.trim().is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Save"
        } else {
            "Create"
        }
    }

    pub fn image_button_label(&self) -> &'static str {
        if self.image_uri.is_some() {
            "Change Image"
        } else {
            "Add Image"
        }
    }
}

/// Selector: draft fields plus the route's workout id, defaulting to empty.
/// An empty id means create mode.
pub fn select_props(state: &AppState, workout_id: Option<&str>) -> EditWorkoutProps {
    let draft = state.draft.as_ref();
    EditWorkoutProps {
        workout_id: workout_id.filter(|id| !id.is_empty()).map(str::to_string),
        name: draft.map(|d| d.name.clone()).unwrap_or_default(),
        kind: draft.map(|d| d.kind.clone()).unwrap_or_default(),
        image_uri: draft.and_then(|d| d.image_uri.clone()),
    }
}

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Type,
    Image,
    Submit,
    Delete,
}

impl Field {
    fn order(editing: bool) -> &'static [Field] {
        if editing {
            &[Field::Name, Field::Type, Field::Image, Field::Submit, Field::Delete]
        } else {
            &[Field::Name, Field::Type, Field::Image, Field::Submit]
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditWorkoutScreen {
    message: Option<String>,
    focus: Field,
}

impl EditWorkoutScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn name_changed(&self, text: &str, dispatch: &mut dyn Dispatch) {
        dispatch.dispatch(change_name(text));
    }

    pub fn type_changed(&self, text: &str, dispatch: &mut dyn Dispatch) {
        dispatch.dispatch(change_type(text));
    }

    /// Validate, then commit the draft. Returns whether a save was dispatched.
    pub fn save_workout(&mut self, props: &EditWorkoutProps, dispatch: &mut dyn Dispatch) -> bool {
        if props.kind.trim().is_empty() {
            self.message = Some(TYPE_PROMPT.to_string());
            return false;
        }
        self.message = None;

        let params = match &props.workout_id {
            Some(id) => SaveParams {
                date: None,
                workout_id: Some(id.clone()),
            },
            None => SaveParams {
                date: Some(Local::now()),
                workout_id: None,
            },
        };
        dispatch.dispatch(save_workout(params));
        true
    }

    pub fn delete_workout(&self, props: &EditWorkoutProps, dispatch: &mut dyn Dispatch) {
        if let Some(id) = &props.workout_id {
            dispatch.dispatch(delete_workout(id));
        }
    }

    pub fn go_to_camera(&self, nav: &mut dyn Navigate) {
        nav.navigate(Route::Camera);
    }

    fn submit_button(props: &EditWorkoutProps, focused: bool) -> Button<'static> {
        Button::new(props.submit_label())
            .disabled(props.submit_disabled())
            .style(button_style(focused))
    }

    fn move_focus(&mut self, editing: bool, forward: bool) {
        let order = Field::order(editing);
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (idx + 1) % order.len()
        } else {
            (idx + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        props: &EditWorkoutProps,
        dispatch: &mut dyn Dispatch,
        nav: &mut dyn Navigate,
    ) {
        let editing = props.is_editing();
        if !Field::order(editing).contains(&self.focus) {
            self.focus = Field::Submit;
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            Self::submit_button(props, false).press(|| {
                self.save_workout(props, dispatch);
            });
            return;
        }

        match key.code {
            KeyCode::Esc => {
                nav.back();
            }
            KeyCode::Tab | KeyCode::Down => self.move_focus(editing, true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(editing, false),
            KeyCode::Enter => match self.focus {
                Field::Name | Field::Type => self.move_focus(editing, true),
                Field::Image => {
                    Button::new(props.image_button_label()).press(|| self.go_to_camera(nav));
                }
                Field::Submit => {
                    Self::submit_button(props, true).press(|| {
                        self.save_workout(props, dispatch);
                    });
                }
                Field::Delete => {
                    Button::new("Delete")
                        .destructive(true)
                        .press(|| self.delete_workout(props, dispatch));
                }
            },
            _ => match self.focus {
                Field::Name => {
                    if let Some(next) = input::edit(&props.name, key) {
                        self.name_changed(&next, dispatch);
                    }
                }
                Field::Type => {
                    if let Some(next) = input::edit(&props.kind, key) {
                        self.type_changed(&next, dispatch);
                    }
                }
                _ => {}
            },
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, props: &EditWorkoutProps, theme: &Theme) {
        let block = Block::default()
            .style(theme.block_style())
            .title(format!(" {} ", TITLE))
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let column = centered_column(inner, 50);
        let rows = Layout::vertical([
            Constraint::Length(if self.message().is_some() { 2 } else { 0 }),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(if props.image_uri.is_some() { 4 } else { 0 }),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(if props.is_editing() { 3 } else { 0 }),
            Constraint::Min(0),
        ])
        .split(column);

        if let Some(message) = self.message() {
            frame.render_widget(
                Paragraph::new(Line::styled(message, theme.message())),
                rows[0],
            );
        }

        frame.render_widget(Paragraph::new("Workout Name").style(theme.text_dim()), rows[1]);
        Input::new(&props.name)
            .focused(self.focus() == Field::Name)
            .render(frame, rows[2], theme);

        frame.render_widget(Paragraph::new("Workout Type").style(theme.text_dim()), rows[3]);
        Input::new(&props.kind)
            .placeholder(TYPE_PLACEHOLDER)
            .focused(self.focus() == Field::Type)
            .render(frame, rows[4], theme);

        if let Some(uri) = &props.image_uri {
            widgets::render_image(frame, uri, theme, rows[5]);
        }

        Button::new(props.image_button_label())
            .style(button_style(self.focus() == Field::Image))
            .render(frame, rows[6], theme);

        Self::submit_button(props, self.focus() == Field::Submit).render(frame, rows[7], theme);

        if props.is_editing() {
            Button::new("Delete")
                .destructive(true)
                .style(button_style(self.focus() == Field::Delete))
                .render(frame, rows[8], theme);
        }
    }
}

fn button_style(focused: bool) -> ButtonStyle {
    if focused {
        ButtonStyle::Focused
    } else {
        ButtonStyle::Plain
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
