//! Workout list, the root route

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::navigation::{Navigate, Route};
use crate::store::{Action, AppState, Dispatch};
use crate::types::Workout;
use crate::ui::Theme;

#[derive(Debug, Clone, Default)]
pub struct WorkoutListScreen {
    selected: usize,
}

impl WorkoutListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Open the edit screen with a fresh draft
    pub fn new_workout(&self, dispatch: &mut dyn Dispatch, nav: &mut dyn Navigate) {
        dispatch.dispatch(Action::BeginCreate);
        nav.navigate(Route::EditWorkout { workout_id: None });
    }

    /// Open the edit screen for the selected workout
    pub fn edit_selected(&self, state: &AppState, dispatch: &mut dyn Dispatch, nav: &mut dyn Navigate) {
        let Some(workout) = state.workouts_by_date().get(self.selected).copied() else {
            return;
        };
        let id = workout.id.clone();
        dispatch.dispatch(Action::BeginEdit(id.clone()));
        nav.navigate(Route::EditWorkout { workout_id: Some(id) });
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        dispatch: &mut dyn Dispatch,
        nav: &mut dyn Navigate,
    ) {
        let count = state.workouts.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected < count.saturating_sub(1) {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.selected = 0,
            KeyCode::Char('G') | KeyCode::End => self.selected = count.saturating_sub(1),
            KeyCode::Char('n') => self.new_workout(dispatch, nav),
            KeyCode::Enter | KeyCode::Char('e') => self.edit_selected(state, dispatch, nav),
            _ => {}
        }
    }

    /// Keep the cursor inside the list after deletions
    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let workouts = state.workouts_by_date();

        let block = Block::default()
            .style(theme.block_style())
            .title(format!(" Workouts ({}) ", workouts.len()))
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if workouts.is_empty() {
            let empty = Paragraph::new(vec![
                Line::raw(""),
                Line::styled("No workouts yet", theme.text_dim()),
                Line::styled("Press [n] to log one", theme.text_dim()),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let items: Vec<ListItem> = workouts
            .iter()
            .enumerate()
            .map(|(i, workout)| workout_row(workout, i == self.selected(), theme))
            .collect();

        let mut list_state = ListState::default().with_selected(Some(self.selected()));
        frame.render_stateful_widget(List::new(items), inner, &mut list_state);
    }
}

fn workout_row<'a>(workout: &'a Workout, selected: bool, theme: &Theme) -> ListItem<'a> {
    let style = if selected { theme.selected() } else { theme.text() };
    let marker = if workout.has_image() { "▣ " } else { "  " };

    ListItem::new(Line::from(vec![
        Span::styled(marker, theme.text_dim()),
        Span::styled(format!("{}  ", workout.formatted_date()), theme.text_dim()),
        Span::styled(format!("{:<24}", workout.name), style),
        Span::styled(workout.kind.as_str(), theme.title()),
    ]))
}
