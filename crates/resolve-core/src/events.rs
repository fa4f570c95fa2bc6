use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the engine produces an Event.
/// Mutating calls return the events they emit; the host decides how to
/// present them (celebration, haptics, nothing at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ChallengeStarted {
        level_index: usize,
        target_days: u32,
        at: DateTime<Utc>,
    },
    /// A challenge day was completed and the day counter advanced.
    DayCompleted {
        /// The day number that was just finished (1-based within the level).
        day_number: u32,
        at: DateTime<Utc>,
    },
    /// A whole level's day target was reached.
    LevelCompleted {
        level_index: usize,
        target_days: u32,
        at: DateTime<Utc>,
    },
    /// The final day of the final level was completed. The challenge
    /// resets to inactive at level 0 so the whole cycle can be replayed.
    AllLevelsMastered {
        at: DateTime<Utc>,
    },
    /// A relapse was confirmed: streak restarted, challenge day reset.
    ProgressReset {
        at: DateTime<Utc>,
    },
}
