//! Top-level tracker: owns the streak clock and the challenge engine
//! and coordinates the one cross-cutting transition, the relapse.
//!
//! The relapse rule is deliberately asymmetric: the streak clock
//! restarts from zero and the current challenge day is lost, but the
//! challenge level is preserved. Levels already earned survive a slip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::challenge::ChallengeEngine;
use crate::events::Event;
use crate::streak::StreakClock;

/// The full persistable recovery state: one streak clock, one
/// challenge engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracker {
    pub streak: StreakClock,
    pub challenge: ChallengeEngine,
}

impl Tracker {
    /// Fresh state: streak starting now, challenge inactive at level 0.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            streak: StreakClock::new(now),
            challenge: ChallengeEngine::new(),
        }
    }

    /// Apply a confirmed relapse.
    ///
    /// Restarts the streak clock and sends the challenge back to day 1
    /// of its current level (an inactive challenge stays inactive).
    /// Confirmation UI, haptics and persistence are the host's concern;
    /// the returned event is the hook for all of them.
    pub fn relapse(&mut self, now: DateTime<Utc>) -> Event {
        self.streak.restart(now);
        self.challenge.reset_day();
        Event::ProgressReset { at: now }
    }
}
