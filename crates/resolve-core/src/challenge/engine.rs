//! Challenge engine implementation.
//!
//! The challenge is a sequence of escalating day-count goals. Each day
//! within a level requires the whole daily habit list to be marked
//! complete before the day counter may advance. The engine is a plain
//! state machine: no threads, no timers, no I/O. The caller supplies
//! `now` on every mutating call that needs it.
//!
//! ## State Transitions
//!
//! ```text
//! Inactive -> Active -> (level complete) -> Active at next level
//!                    -> (final level complete) -> Inactive at level 0
//! ```
//!
//! Level completion and "all levels mastered" are transient conditions
//! resolved inside `complete_day()`; they are never observable as a
//! stored state, only as emitted [`Event`]s.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::habits::habit_count;
use crate::error::EngineError;
use crate::events::Event;

/// Day-count target for each challenge level, in order.
pub const LEVEL_TARGETS: [u32; 8] = [7, 14, 30, 60, 90, 120, 180, 365];

/// Read-only view of the challenge state for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSnapshot {
    pub is_active: bool,
    pub level_index: usize,
    pub target_days: u32,
    /// Day currently being attempted (1-based while active, 0 before start).
    pub day_number: u32,
    pub completed_today: Vec<usize>,
}

/// Core challenge state machine.
///
/// `level_index` never decreases except through the full-cycle
/// wraparound after the final level; a relapse resets the day counter
/// but leaves the level untouched (see [`crate::Tracker::relapse`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeEngine {
    is_active: bool,
    level_index: usize,
    /// Day currently being attempted within the level. 0 means the
    /// challenge has not been started; 1-based while active.
    day_number: u32,
    /// Habit indices completed for the current day only.
    #[serde(default)]
    completed_today: BTreeSet<usize>,
    /// Calendar day of the last successful `complete_day()`. Guards
    /// against advancing twice on the same day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_completion_day: Option<NaiveDate>,
}

impl Default for ChallengeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeEngine {
    /// Create an inactive engine at level 0.
    pub fn new() -> Self {
        Self {
            is_active: false,
            level_index: 0,
            day_number: 0,
            completed_today: BTreeSet::new(),
            last_completion_day: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn day_number(&self) -> u32 {
        self.day_number
    }

    /// Day-count target of the current level. Saturates to the last
    /// level rather than indexing out of bounds.
    pub fn target(&self) -> u32 {
        LEVEL_TARGETS
            .get(self.level_index)
            .copied()
            .unwrap_or(LEVEL_TARGETS[LEVEL_TARGETS.len() - 1])
    }

    pub fn completed_today(&self) -> &BTreeSet<usize> {
        &self.completed_today
    }

    pub fn all_habits_completed_today(&self) -> bool {
        self.completed_today.len() == habit_count()
    }

    /// Build a read-only snapshot for display.
    pub fn snapshot(&self) -> ChallengeSnapshot {
        ChallengeSnapshot {
            is_active: self.is_active,
            level_index: self.level_index,
            target_days: self.target(),
            day_number: self.day_number,
            completed_today: self.completed_today.iter().copied().collect(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Activate the challenge on day 1 of the current level.
    ///
    /// A fresh engine starts at level 0; an engine that wrapped around
    /// after mastering every level is back at level 0 as well. The
    /// stored level is preserved so progress earned before a pause is
    /// not lost.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<Event, EngineError> {
        if self.is_active {
            return Err(EngineError::InvalidState {
                operation: "start",
                state: "active",
            });
        }
        self.is_active = true;
        self.day_number = 1;
        self.completed_today.clear();
        self.last_completion_day = None;
        Ok(Event::ChallengeStarted {
            level_index: self.level_index,
            target_days: self.target(),
            at: now,
        })
    }

    /// Flip completion of one habit for the current day.
    ///
    /// Toggling never advances the day; advancing is explicit via
    /// [`complete_day`](Self::complete_day). Returns the new membership
    /// (true = now completed).
    pub fn toggle_habit(&mut self, index: usize) -> Result<bool, EngineError> {
        if !self.is_active {
            return Err(EngineError::InvalidState {
                operation: "toggle_habit",
                state: "inactive",
            });
        }
        if index >= habit_count() {
            return Err(EngineError::HabitOutOfBounds {
                index,
                len: habit_count(),
            });
        }
        if self.completed_today.remove(&index) {
            Ok(false)
        } else {
            self.completed_today.insert(index);
            Ok(true)
        }
    }

    /// Advance the day counter, cascading into level completion.
    ///
    /// Defended no-op (returns no events) unless the challenge is
    /// active, every habit is complete, and the day has not already
    /// been advanced for `now`'s calendar day. The cascade itself never
    /// errors.
    pub fn complete_day(&mut self, now: DateTime<Utc>) -> Vec<Event> {
        let today = now.date_naive();
        if !self.is_active
            || !self.all_habits_completed_today()
            || self.last_completion_day == Some(today)
        {
            return Vec::new();
        }

        let finished_day = self.day_number;
        self.last_completion_day = Some(today);
        self.completed_today.clear();
        self.day_number += 1;

        let mut events = vec![Event::DayCompleted {
            day_number: finished_day,
            at: now,
        }];

        if self.day_number > self.target() {
            events.push(Event::LevelCompleted {
                level_index: self.level_index,
                target_days: self.target(),
                at: now,
            });
            if self.level_index + 1 >= LEVEL_TARGETS.len() {
                // Whole cycle mastered: wrap to an inactive level 0 so
                // the sequence can be replayed, rather than pinning the
                // user at max level forever.
                events.push(Event::AllLevelsMastered { at: now });
                self.is_active = false;
                self.level_index = 0;
                self.day_number = 0;
                self.last_completion_day = None;
            } else {
                self.level_index += 1;
                self.day_number = 1;
            }
        }

        events
    }

    /// Relapse arm: back to day 1 of the current level.
    ///
    /// The level index is deliberately untouched -- a relapse costs the
    /// streak and the current day, not levels already earned. No-op if
    /// the challenge is inactive.
    pub fn reset_day(&mut self) {
        if !self.is_active {
            return;
        }
        self.day_number = 1;
        self.completed_today.clear();
        self.last_completion_day = None;
    }

    /// Drop a habit set that belongs to an earlier calendar day.
    ///
    /// The persistence layer calls this when loaded state carries a
    /// habit set recorded on a previous day.
    pub fn clear_completed_today(&mut self) {
        self.completed_today.clear();
    }
}
