//! Workout persistence
//!
//! Workouts are kept as a pretty-printed JSON array. A missing file is an
//! empty log, not an error.

use crate::types::Workout;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load workouts from `path`
pub fn load_workouts(path: &Path) -> Result<Vec<Workout>> {
    if !path.exists() {
        info!(path = %path.display(), "no workouts file yet");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read workouts from {:?}", path))?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let workouts: Vec<Workout> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse workouts from {:?}", path))?;
    info!(count = workouts.len(), path = %path.display(), "loaded workouts");
    Ok(workouts)
}

/// Write workouts to `path`, creating parent directories
pub fn save_workouts(path: &Path, workouts: &[Workout]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {:?}", parent))?;
    }

    let content = serde_json::to_string_pretty(workouts).context("Failed to serialize workouts")?;

    // replace atomically via a sibling temp file
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).with_context(|| format!("Failed to write {:?}", tmp))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("Failed to replace {:?}", path));
    }

    info!(count = workouts.len(), path = %path.display(), "saved workouts");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "workoutlog-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = scratch_dir("missing");
        let workouts = load_workouts(&dir.join("workouts.json")).unwrap();
        assert!(workouts.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("save");
        let path = dir.join("nested").join("workouts.json");
        let workouts = vec![Workout {
            id: "1714543200000".into(),
            name: "Intervals".into(),
            kind: "Run".into(),
            image_uri: None,
            date: Local.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        }];

        save_workouts(&path, &workouts).unwrap();
        assert_eq!(load_workouts(&path).unwrap(), workouts);
        assert!(!path.with_extension("json.tmp").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_failed_replace_removes_temp_file() {
        let dir = scratch_dir("replace");
        let path = dir.join("workouts.json");
        // a non-empty directory cannot be replaced by a file
        fs::create_dir_all(path.join("blocker")).unwrap();

        let err = save_workouts(&path, &[]).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to replace"));
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.is_dir());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("workouts.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_workouts(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse workouts"));

        let _ = fs::remove_dir_all(&dir);
    }
}
