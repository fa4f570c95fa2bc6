//! TOML-based tracker state persistence.
//!
//! The engine types perform no I/O themselves; this module is the
//! persistence collaborator the host drives, one save per mutating
//! call. State lives at `~/.config/resolve/state.toml`.
//!
//! The habit-completion set is keyed by calendar day: a set saved
//! earlier today survives a restart, but a set from a previous day is
//! stale and is dropped on load even though `complete_day()` was never
//! called for it.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::StorageError;
use crate::tracker::Tracker;

/// On-disk representation of the tracker state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateFile {
    /// Calendar day the in-flight habit set belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    habits_day: Option<NaiveDate>,
    tracker: Tracker,
}

impl StateFile {
    /// Default state file path inside [`data_dir`].
    pub fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join("state.toml"))
    }

    /// Load the tracker from the default path.
    ///
    /// Returns `Ok(None)` if no state has been saved yet. A habit set
    /// recorded on a day other than `today` is cleared.
    pub fn load(today: NaiveDate) -> Result<Option<Tracker>, StorageError> {
        Self::load_from(&Self::path()?, today)
    }

    /// Save the tracker to the default path, keying the habit set to
    /// `today`.
    pub fn save(tracker: &Tracker, today: NaiveDate) -> Result<(), StorageError> {
        Self::save_to(&Self::path()?, tracker, today)
    }

    /// Load from an explicit path. See [`load`](Self::load).
    pub fn load_from(path: &Path, today: NaiveDate) -> Result<Option<Tracker>, StorageError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path).map_err(|e| StorageError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file: StateFile =
            toml::from_str(&raw).map_err(|e| StorageError::ParseFailed(e.to_string()))?;

        let mut tracker = file.tracker;
        if file.habits_day != Some(today) {
            tracker.challenge.clear_completed_today();
        }
        Ok(Some(tracker))
    }

    /// Save to an explicit path. See [`save`](Self::save).
    pub fn save_to(path: &Path, tracker: &Tracker, today: NaiveDate) -> Result<(), StorageError> {
        let file = StateFile {
            habits_day: Some(today),
            tracker: tracker.clone(),
        };
        let raw = toml::to_string_pretty(&file).map_err(|e| StorageError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| StorageError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        assert!(StateFile::load_from(&path, t0().date_naive())
            .unwrap()
            .is_none());
    }

    #[test]
    fn round_trips_same_day_habit_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        let today = t0().date_naive();

        let mut tracker = Tracker::new(t0());
        tracker.challenge.start(t0()).unwrap();
        tracker.challenge.toggle_habit(0).unwrap();
        tracker.challenge.toggle_habit(3).unwrap();

        StateFile::save_to(&path, &tracker, today).unwrap();
        let loaded = StateFile::load_from(&path, today).unwrap().unwrap();

        assert_eq!(loaded, tracker);
        assert!(loaded.challenge.completed_today().contains(&3));
    }

    #[test]
    fn stale_habit_set_is_cleared_on_a_new_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");

        let mut tracker = Tracker::new(t0());
        tracker.challenge.start(t0()).unwrap();
        tracker.challenge.toggle_habit(1).unwrap();
        StateFile::save_to(&path, &tracker, t0().date_naive()).unwrap();

        let tomorrow = (t0() + Duration::days(1)).date_naive();
        let loaded = StateFile::load_from(&path, tomorrow).unwrap().unwrap();

        assert!(loaded.challenge.completed_today().is_empty());
        // Everything but the habit set is untouched.
        assert_eq!(loaded.challenge.day_number(), 1);
        assert!(loaded.challenge.is_active());
        assert_eq!(loaded.streak, tracker.streak);
    }

    #[test]
    fn corrupt_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(matches!(
            StateFile::load_from(&path, t0().date_naive()),
            Err(StorageError::ParseFailed(_))
        ));
    }
}
