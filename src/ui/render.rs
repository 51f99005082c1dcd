//! Main rendering module
//!
//! Draws the header with the route trail, the screen on top of the
//! navigation stack, the status bar, and any popup overlays.

use crate::app::{App, PopupState};
use crate::navigation::Route;
use crate::screens::edit_workout::select_props;
use crate::screens::{CameraScreen, EditWorkoutScreen};
use crate::ui::widgets;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(10),   // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_screen(frame, app, layout[1]);
    render_status_bar(frame, app, layout[2]);
    render_popups(frame, app, area);
}

/// Header: app name and the title of the current route
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(" workoutlog", theme.title())];
    if app.navigator.depth() > 1 {
        spans.push(Span::styled("  ‹ ", theme.text_dim()));
    } else {
        spans.push(Span::styled("  · ", theme.text_dim()));
    }
    spans.push(Span::styled(app.navigator.current().title(), theme.text()));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Render the screen on top of the stack
fn render_screen(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let state = app.store.state();

    match app.navigator.current() {
        Route::WorkoutList => app.list_screen.render(frame, area, state, theme),
        Route::EditWorkout { .. } => {
            let props = app
                .store
                .select(|s| select_props(s, app.navigator.param_workout_id()));
            match &app.edit_screen {
                Some(screen) => screen.render(frame, area, &props, theme),
                None => EditWorkoutScreen::new().render(frame, area, &props, theme),
            }
        }
        Route::Camera => match &app.camera_screen {
            Some(screen) => screen.render(frame, area, theme),
            None => CameraScreen::new().render(frame, area, theme),
        },
    }
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.navigator.current() {
        Route::WorkoutList => "[n] New  [Enter] Edit  [j/k] Navigate  [t] Theme  [q] Quit",
        Route::EditWorkout { .. } => "[Tab] Next  [Enter] Press  [Ctrl+S] Submit  [Esc] Back",
        Route::Camera => "[Enter] Use Image  [Esc] Cancel",
    };
    let right = if app.no_save { "no-save" } else { "" };

    widgets::render_status_bar(frame, hints, right, &app.theme, area);
}

/// Render popups if active
fn render_popups(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    match &app.popup {
        PopupState::None => {}
        PopupState::Error { title, message } => {
            widgets::render_error_popup(frame, title, message, theme, area);
        }
    }

    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, theme, area);
    }
}
