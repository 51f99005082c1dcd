//! Pure state transitions

use chrono::{DateTime, Local};

use super::action::{Action, SaveParams};
use super::state::AppState;
use crate::types::{Workout, WorkoutDraft};

/// Compute the next snapshot. Never mutates `state`.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::LoadWorkouts(workouts) => {
            next.workouts = workouts.clone();
            next.revision += 1;
        }
        Action::BeginCreate => {
            next.draft = Some(WorkoutDraft::default());
        }
        Action::BeginEdit(id) => {
            next.draft = Some(
                state
                    .workout(id)
                    .map(WorkoutDraft::from_workout)
                    .unwrap_or_default(),
            );
        }
        Action::ChangeName(name) => {
            next.draft.get_or_insert_with(WorkoutDraft::default).name = name.clone();
        }
        Action::ChangeType(kind) => {
            next.draft.get_or_insert_with(WorkoutDraft::default).kind = kind.clone();
        }
        Action::ChangeImage(uri) => {
            next.draft.get_or_insert_with(WorkoutDraft::default).image_uri = Some(uri.clone());
        }
        Action::SaveWorkout(params) => {
            if let Some(draft) = next.draft.take() {
                if commit_draft(&mut next.workouts, &draft, params) {
                    next.revision += 1;
                }
            }
        }
        Action::DeleteWorkout(id) => {
            let before = next.workouts.len();
            next.workouts.retain(|w| &w.id != id);
            if next.workouts.len() != before {
                next.revision += 1;
            }
            next.draft = None;
        }
    }

    next
}

/// Apply the draft to the workout list. Returns whether the list changed.
fn commit_draft(workouts: &mut Vec<Workout>, draft: &WorkoutDraft, params: &SaveParams) -> bool {
    match (&params.workout_id, params.date) {
        (Some(id), _) => match workouts.iter_mut().find(|w| &w.id == id) {
            Some(workout) => {
                workout.name = draft.name.clone();
                workout.kind = draft.kind.clone();
                workout.image_uri = draft.image_uri.clone();
                true
            }
            None => false,
        },
        (None, Some(date)) => {
            let id = unique_id(workouts, date);
            workouts.push(Workout {
                id,
                name: draft.name.clone(),
                kind: draft.kind.clone(),
                image_uri: draft.image_uri.clone(),
                date,
            });
            true
        }
        (None, None) => false,
    }
}

/// Id derived from the creation time, suffixed until unused
fn unique_id(workouts: &[Workout], date: DateTime<Local>) -> String {
    let base = date.timestamp_millis().to_string();
    let taken = |id: &str| workouts.iter().any(|w| w.id == id);

    if !taken(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn workout(id: &str, name: &str, kind: &str) -> Workout {
        Workout {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            image_uri: None,
            date: at(6),
        }
    }

    fn draft(name: &str, kind: &str) -> AppState {
        AppState {
            draft: Some(WorkoutDraft {
                name: name.into(),
                kind: kind.into(),
                ..WorkoutDraft::default()
            }),
            ..AppState::default()
        }
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = AppState::default();
        let next = reduce(&state, &Action::ChangeName("Legs".into()));
        assert!(state.draft.is_none());
        assert_eq!(next.draft.unwrap().name, "Legs");
    }

    #[test]
    fn test_begin_edit_populates_draft() {
        let state = AppState {
            workouts: vec![workout("w1", "Morning", "Run")],
            ..AppState::default()
        };
        let next = reduce(&state, &Action::BeginEdit("w1".into()));
        let draft = next.draft.unwrap();
        assert_eq!(draft.workout_id.as_deref(), Some("w1"));
        assert_eq!(draft.name, "Morning");
    }

    #[test]
    fn test_begin_edit_unknown_id_gives_empty_draft() {
        let next = reduce(&AppState::default(), &Action::BeginEdit("nope".into()));
        assert_eq!(next.draft, Some(WorkoutDraft::default()));
    }

    #[test]
    fn test_save_creates_workout_and_clears_draft() {
        let state = draft("Evening", "Swim");
        let params = SaveParams { date: Some(at(18)), workout_id: None };
        let next = reduce(&state, &Action::SaveWorkout(params));

        assert!(next.draft.is_none());
        assert_eq!(next.workouts.len(), 1);
        assert_eq!(next.workouts[0].name, "Evening");
        assert_eq!(next.workouts[0].kind, "Swim");
        assert_eq!(next.workouts[0].date, at(18));
        assert_eq!(next.revision, state.revision + 1);
    }

    #[test]
    fn test_save_with_id_updates_existing() {
        let mut state = draft("Renamed", "Bike");
        state.workouts.push(workout("w1", "Morning", "Run"));
        let params = SaveParams { date: None, workout_id: Some("w1".into()) };
        let next = reduce(&state, &Action::SaveWorkout(params));

        assert_eq!(next.workouts.len(), 1);
        assert_eq!(next.workouts[0].name, "Renamed");
        assert_eq!(next.workouts[0].kind, "Bike");
        assert_eq!(next.workouts[0].date, at(6));
        assert!(next.draft.is_none());
    }

    #[test]
    fn test_save_without_draft_is_noop() {
        let state = AppState::default();
        let params = SaveParams { date: Some(at(9)), workout_id: None };
        assert_eq!(reduce(&state, &Action::SaveWorkout(params)), state);
    }

    #[test]
    fn test_same_millisecond_ids_are_suffixed() {
        let params = SaveParams { date: Some(at(7)), workout_id: None };
        let first = reduce(&draft("A", "Run"), &Action::SaveWorkout(params.clone()));
        let mut second_input = first.clone();
        second_input.draft = draft("B", "Run").draft;
        let second = reduce(&second_input, &Action::SaveWorkout(params));

        let ids: Vec<&str> = second.workouts.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert!(ids[1].ends_with("-2"));
    }

    #[test]
    fn test_delete_removes_workout() {
        let mut state = AppState {
            workouts: vec![workout("w1", "Morning", "Run"), workout("w2", "Noon", "Lift")],
            ..AppState::default()
        };
        state.draft = Some(WorkoutDraft::default());
        let next = reduce(&state, &Action::DeleteWorkout("w1".into()));

        assert_eq!(next.workouts.len(), 1);
        assert_eq!(next.workouts[0].id, "w2");
        assert!(next.draft.is_none());
    }

    #[test]
    fn test_change_image_sets_uri() {
        let next = reduce(&draft("a", "b"), &Action::ChangeImage("/p.png".into()));
        assert_eq!(next.draft.unwrap().image_uri.as_deref(), Some("/p.png"));
    }
}
