//! Application state and event handling
//!
//! Owns the store, the navigation stack and the mounted screens, and routes
//! key events to whichever screen is on top. After every event it reacts to
//! store changes: leaving the edit screen once its draft is committed, and
//! persisting the workout list.

use crate::config::Config;
use crate::navigation::{Navigator, Route};
use crate::screens::edit_workout::select_props;
use crate::screens::{CameraScreen, EditWorkoutScreen, WorkoutListScreen};
use crate::storage;
use crate::store::{Action, Dispatch, Store, Subscription};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
    pub no_save: bool,
    pub data_file: PathBuf,

    pub store: Store,
    pub navigator: Navigator,

    // Mounted screens; edit and camera exist only while on the stack
    pub list_screen: WorkoutListScreen,
    pub edit_screen: Option<EditWorkoutScreen>,
    pub camera_screen: Option<CameraScreen>,

    pub popup: PopupState,
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)

    changes: Subscription,
    saved_revision: u64,
}

/// Popup overlay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    None,
    Error { title: String, message: String },
}

impl App {
    /// Create the app and load workouts from `data_file`
    pub fn new(config: Config, data_file: PathBuf, no_save: bool) -> Result<Self> {
        let theme = Theme::from_name(config.theme);
        let workouts = storage::load_workouts(&data_file)?;

        let mut store = Store::default();
        store.dispatch(Action::LoadWorkouts(workouts));
        let saved_revision = store.state().revision;
        let changes = store.subscribe();

        Ok(Self {
            should_quit: false,
            config,
            theme,
            no_save,
            data_file,

            store,
            navigator: Navigator::new(Route::WorkoutList),

            list_screen: WorkoutListScreen::new(),
            edit_screen: None,
            camera_screen: None,

            popup: PopupState::None,
            flash_message: None,

            changes,
            saved_revision,
        })
    }

    /// Clear expired flash messages; called once per loop iteration
    pub fn tick(&mut self) {
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let PopupState::Error { .. } = self.popup {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o')) {
                self.popup = PopupState::None;
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.navigator.current().clone() {
            Route::WorkoutList => self.handle_list_key(key),
            Route::EditWorkout { .. } => {
                let workout_id = self.navigator.param_workout_id();
                let props = self.store.select(|s| select_props(s, workout_id));
                let screen = self.edit_screen.get_or_insert_with(EditWorkoutScreen::new);
                screen.handle_key(key, &props, &mut self.store, &mut self.navigator);
            }
            Route::Camera => {
                let screen = self.camera_screen.get_or_insert_with(CameraScreen::new);
                screen.handle_key(key, &mut self.store, &mut self.navigator);
            }
        }

        self.sync();
        Ok(())
    }

    /// Handle keys on the workout list
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {
                let state = self.store.state().clone();
                self.list_screen
                    .handle_key(key, &state, &mut self.store, &mut self.navigator);
            }
        }
    }

    /// React to navigation and store changes
    fn sync(&mut self) {
        // a failed write is retried on every event until it succeeds
        let persisted = self.persist();
        if self.changes.changed(&self.store) {
            self.leave_committed_edit(persisted);
            self.list_screen.clamp(self.store.state().workouts.len());
        }
        self.sync_screens();
    }

    /// Mount screens that just got pushed, drop those popped off
    fn sync_screens(&mut self) {
        let on_stack = |nav: &Navigator, camera: bool| {
            nav.contains(|r| match r {
                Route::Camera => camera,
                Route::EditWorkout { .. } => !camera,
                Route::WorkoutList => false,
            })
        };

        if on_stack(&self.navigator, false) {
            self.edit_screen.get_or_insert_with(EditWorkoutScreen::new);
        } else {
            self.edit_screen = None;
        }

        if on_stack(&self.navigator, true) {
            self.camera_screen.get_or_insert_with(CameraScreen::new);
        } else {
            self.camera_screen = None;
        }
    }

    /// A save or delete clears the draft; return to the list when it does
    fn leave_committed_edit(&mut self, persisted: bool) {
        let editing = self
            .navigator
            .contains(|r| matches!(r, Route::EditWorkout { .. }));
        if !editing || self.store.state().draft.is_some() {
            return;
        }

        let deleted = self
            .navigator
            .param_workout_id()
            .is_some_and(|id| self.store.state().workout(id).is_none());
        let message = if deleted { "Workout deleted" } else { "Workout saved" };
        info!(persisted, "{}", message);

        self.navigator.back_to(|r| *r == Route::WorkoutList);
        if persisted {
            self.show_flash(message, false);
        }
    }

    /// Write workouts to disk if they changed since the last successful
    /// write. Returns false if the write failed.
    fn persist(&mut self) -> bool {
        let revision = self.store.state().revision;
        if revision == self.saved_revision {
            return true;
        }

        if self.no_save {
            info!(revision, "not saving workouts (--no-save)");
            self.saved_revision = revision;
            return true;
        }

        match storage::save_workouts(&self.data_file, &self.store.state().workouts) {
            Ok(()) => {
                self.saved_revision = revision;
                true
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), revision, "failed to save workouts");
                self.show_error("Save Failed", &format!("{:#}", e));
                false
            }
        }
    }

    fn cycle_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        self.theme = Theme::from_name(self.config.theme);
        info!(theme = self.config.theme.as_str(), "theme changed");

        if self.no_save {
            return;
        }
        if let Err(e) = self.config.save() {
            warn!(error = %format!("{:#}", e), "failed to save config");
            self.show_error("Config Error", &format!("{:#}", e));
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.popup = PopupState::Error {
            title: title.to_string(),
            message: message.to_string(),
        };
    }

    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.to_string(), is_error, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::edit_workout::TYPE_PROMPT;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn scratch_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "workoutlog-app-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir_all(&path);
        path
    }

    #[test]
    fn test_create_workout_flow() {
        let path = scratch_file("create");
        let mut app = App::new(Config::default(), path.clone(), false).unwrap();

        press(&mut app, KeyCode::Char('n'));
        assert!(app.edit_screen.is_some());

        type_text(&mut app, "Lunch laps");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Swim");
        ctrl(&mut app, 's');

        assert_eq!(app.navigator.current(), &Route::WorkoutList);
        assert!(app.edit_screen.is_none());
        let workouts = &app.store.state().workouts;
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].name, "Lunch laps");
        assert_eq!(workouts[0].kind, "Swim");
        assert_eq!(app.flash_message.as_ref().unwrap().0, "Workout saved");

        assert_eq!(storage::load_workouts(&path).unwrap(), *workouts);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_edit_then_delete_flow() {
        let path = scratch_file("delete");
        let mut app = App::new(Config::default(), path.clone(), false).unwrap();

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Squats");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Weights");
        ctrl(&mut app, 's');

        press(&mut app, KeyCode::Enter);
        let id = app.store.state().workouts[0].id.clone();
        assert_eq!(app.navigator.param_workout_id(), Some(id.as_str()));

        // Name -> wraps backwards onto Delete
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.navigator.current(), &Route::WorkoutList);
        assert!(app.store.state().workouts.is_empty());
        assert_eq!(app.flash_message.as_ref().unwrap().0, "Workout deleted");
        assert!(storage::load_workouts(&path).unwrap().is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_failed_save_is_retried() {
        let path = scratch_file("retry");
        let mut app = App::new(Config::default(), path.clone(), false).unwrap();

        // a directory in place of the data file makes the write fail
        std::fs::create_dir_all(path.join("blocker")).unwrap();

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Rows");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Erg");
        ctrl(&mut app, 's');

        assert_eq!(app.navigator.current(), &Route::WorkoutList);
        assert!(matches!(app.popup, PopupState::Error { .. }));
        assert!(app.flash_message.is_none());
        assert!(!path.with_extension("json.tmp").exists());

        std::fs::remove_dir_all(&path).unwrap();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.popup, PopupState::None);

        assert!(app.persist());
        assert_eq!(storage::load_workouts(&path).unwrap(), app.store.state().workouts);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_failed_save_retried_on_next_key() {
        let path = scratch_file("retry-key");
        let mut app = App::new(Config::default(), path.clone(), false).unwrap();
        std::fs::create_dir_all(path.join("blocker")).unwrap();

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Hill");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Run");
        ctrl(&mut app, 's');
        assert!(matches!(app.popup, PopupState::Error { .. }));

        std::fs::remove_dir_all(&path).unwrap();
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('j'));

        assert_eq!(app.popup, PopupState::None);
        assert_eq!(storage::load_workouts(&path).unwrap().len(), 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_escape_keeps_workouts_unchanged() {
        let path = scratch_file("escape");
        let mut app = App::new(Config::default(), path.clone(), false).unwrap();

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Abandoned");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.navigator.current(), &Route::WorkoutList);
        assert!(app.edit_screen.is_none());
        assert!(app.store.state().workouts.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_no_save_skips_disk() {
        let path = scratch_file("nosave");
        let mut app = App::new(Config::default(), path.clone(), true).unwrap();

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Spin");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bike");
        ctrl(&mut app, 's');

        assert_eq!(app.store.state().workouts.len(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_message_survives_camera_round_trip() {
        let mut app = App::new(Config::default(), scratch_file("camera"), true).unwrap();

        press(&mut app, KeyCode::Char('n'));
        // empty type, submitted through the screen directly
        let props = select_props(app.store.state(), None);
        app.edit_screen
            .as_mut()
            .unwrap()
            .save_workout(&props, &mut app.store);
        assert_eq!(app.edit_screen.as_ref().unwrap().message(), Some(TYPE_PROMPT));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.current(), &Route::Camera);
        assert!(app.camera_screen.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.camera_screen.is_none());
        assert_eq!(app.edit_screen.as_ref().unwrap().message(), Some(TYPE_PROMPT));
    }

    #[test]
    fn test_error_popup_swallows_keys_until_dismissed() {
        let mut app = App::new(Config::default(), scratch_file("popup"), true).unwrap();
        app.show_error("Save Failed", "disk full");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.navigator.depth(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.popup, PopupState::None);
    }

    #[test]
    fn test_quit_only_from_list() {
        let mut app = App::new(Config::default(), scratch_file("quit"), true).unwrap();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
