//! Core data types for workoutlog
//!
//! Committed workouts, the in-progress draft, and small display helpers.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A committed workout record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub image_uri: Option<String>,
    pub date: DateTime<Local>,
}

impl Workout {
    /// Format the date for display
    pub fn formatted_date(&self) -> String {
        self.date.format("%d.%m.%y %H:%M").to_string()
    }

    pub fn has_image(&self) -> bool {
        self.image_uri.is_some()
    }
}

/// The in-progress, not-yet-committed workout being edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub workout_id: Option<String>,
    pub name: String,
    pub kind: String,
    pub image_uri: Option<String>,
}

impl WorkoutDraft {
    /// Draft pre-populated from an existing workout
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            workout_id: Some(workout.id.clone()),
            name: workout.name.clone(),
            kind: workout.kind.clone(),
            image_uri: workout.image_uri.clone(),
        }
    }
}

/// Last path component of an image URI, for compact display
pub fn image_label(uri: &str) -> &str {
    let trimmed = uri.trim_end_matches('/');
    trimmed
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(uri)
}
