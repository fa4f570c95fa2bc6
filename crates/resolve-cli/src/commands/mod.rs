//! CLI subcommand implementations.
//!
//! Each command loads the persisted tracker, applies at most one
//! mutation, saves, and prints. Mutations are serialized by the
//! one-command-per-invocation model; the engine assumes exactly that.

pub mod challenge;
pub mod habit;
pub mod relapse;
pub mod status;

use chrono::{DateTime, Utc};
use resolve_core::{Event, StateFile, Tracker};

/// Load persisted state, creating fresh state on first run.
pub(crate) fn load_tracker(now: DateTime<Utc>) -> Result<Tracker, Box<dyn std::error::Error>> {
    Ok(StateFile::load(now.date_naive())?.unwrap_or_else(|| Tracker::new(now)))
}

/// Persist state. Every mutating command saves immediately after the
/// engine call so memory and disk do not diverge.
pub(crate) fn save_tracker(
    tracker: &Tracker,
    now: DateTime<Utc>,
) -> Result<(), Box<dyn std::error::Error>> {
    StateFile::save(tracker, now.date_naive())?;
    Ok(())
}

/// Render an engine event as one output line.
pub(crate) fn print_event(event: &Event) {
    match event {
        Event::ChallengeStarted {
            level_index,
            target_days,
            ..
        } => println!(
            "challenge started: level {} ({target_days} days)",
            level_index + 1
        ),
        Event::DayCompleted { day_number, .. } => println!("day {day_number} complete"),
        Event::LevelCompleted {
            level_index,
            target_days,
            ..
        } => println!("level {} complete ({target_days} days)", level_index + 1),
        Event::AllLevelsMastered { .. } => {
            println!("all levels mastered -- the cycle restarts from level 1")
        }
        Event::ProgressReset { .. } => {
            println!("progress reset: streak back to zero, challenge day back to 1")
        }
    }
}
