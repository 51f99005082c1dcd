//! Application state snapshot

use crate::types::{Workout, WorkoutDraft};

/// Everything the store holds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Committed workouts, in insertion order
    pub workouts: Vec<Workout>,
    /// Draft being edited, if an edit screen opened one
    pub draft: Option<WorkoutDraft>,
    /// Bumped whenever `workouts` changes
    pub revision: u64,
}

impl AppState {
    pub fn workout(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Workouts sorted newest first
    pub fn workouts_by_date(&self) -> Vec<&Workout> {
        let mut sorted: Vec<&Workout> = self.workouts.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
