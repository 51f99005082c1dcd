//! Actions and their creators

use chrono::{DateTime, Local};

use crate::types::Workout;

/// Parameters for committing the current draft.
///
/// `workout_id` set means update that workout; otherwise a new workout is
/// created with `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveParams {
    pub date: Option<DateTime<Local>>,
    pub workout_id: Option<String>,
}

/// A requested state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the committed list (startup hydration)
    LoadWorkouts(Vec<Workout>),
    /// Start an empty draft
    BeginCreate,
    /// Start a draft from an existing workout
    BeginEdit(String),
    ChangeName(String),
    ChangeType(String),
    ChangeImage(String),
    SaveWorkout(SaveParams),
    DeleteWorkout(String),
}

impl Action {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::LoadWorkouts(_) => "load_workouts",
            Action::BeginCreate => "begin_create",
            Action::BeginEdit(_) => "begin_edit",
            Action::ChangeName(_) => "change_name",
            Action::ChangeType(_) => "change_type",
            Action::ChangeImage(_) => "change_image",
            Action::SaveWorkout(_) => "save_workout",
            Action::DeleteWorkout(_) => "delete_workout",
        }
    }
}

pub fn save_workout(params: SaveParams) -> Action {
    Action::SaveWorkout(params)
}

pub fn delete_workout(workout_id: &str) -> Action {
    Action::DeleteWorkout(workout_id.to_string())
}

pub fn change_name(name: &str) -> Action {
    Action::ChangeName(name.to_string())
}

pub fn change_type(kind: &str) -> Action {
    Action::ChangeType(kind.to_string())
}

pub fn change_image(image_uri: &str) -> Action {
    Action::ChangeImage(image_uri.to_string())
}
