//! Streak clock: elapsed abstinence time since a start instant.
//!
//! The clock is wall-clock based and holds no internal thread or timer.
//! The caller is responsible for polling `elapsed()` periodically
//! (the display layer does so at 1 Hz). All derived fields are computed
//! on demand from the single stored instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

/// Elapsed streak time, decomposed for display.
///
/// `hours`/`minutes`/`seconds` are the remainder within the current
/// streak day (0-23 / 0-59 / 0-59), not wall-clock fields of `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a non-negative total-seconds interval.
    fn from_seconds(total: i64) -> Self {
        let rem = total % SECS_PER_DAY;
        Elapsed {
            days: total / SECS_PER_DAY,
            hours: rem / SECS_PER_HOUR,
            minutes: (rem % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: rem % SECS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }
}

/// Elapsed-time tracker for the current streak.
///
/// The start instant is the single source of truth; everything else is
/// derived per read. Restarting is the only mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakClock {
    started_at: DateTime<Utc>,
}

impl StreakClock {
    /// Create a clock starting now.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { started_at: now }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Reset the streak to zero. All subsequent reads reflect the new
    /// start instant immediately.
    pub fn restart(&mut self, now: DateTime<Utc>) {
        self.started_at = now;
    }

    /// Elapsed time since the start instant, decomposed for display.
    ///
    /// If `now` is earlier than the start instant (clock skew), the
    /// result clamps to zero rather than erroring.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Elapsed {
        let total = (now - self.started_at).num_seconds().max(0);
        Elapsed::from_seconds(total)
    }

    /// Whole elapsed days, the input to milestone evaluation.
    pub fn elapsed_days(&self, now: DateTime<Utc>) -> i64 {
        self.elapsed(now).days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(0, 0).unwrap()
    }

    #[test]
    fn elapsed_at_start_is_zero() {
        let now = epoch();
        let clock = StreakClock::new(now);
        assert_eq!(clock.elapsed(now), Elapsed::ZERO);
    }

    #[test]
    fn restart_zeroes_elapsed() {
        let mut clock = StreakClock::new(epoch());
        let later = epoch() + Duration::days(12) + Duration::seconds(7);
        assert_eq!(clock.elapsed(later).days, 12);

        clock.restart(later);
        assert_eq!(clock.elapsed(later), Elapsed::ZERO);
    }

    #[test]
    fn remainder_fields_are_within_current_day() {
        let clock = StreakClock::new(epoch());
        let now = epoch()
            + Duration::days(3)
            + Duration::hours(23)
            + Duration::minutes(59)
            + Duration::seconds(59);
        let e = clock.elapsed(now);
        assert_eq!(
            e,
            Elapsed {
                days: 3,
                hours: 23,
                minutes: 59,
                seconds: 59
            }
        );
    }

    #[test]
    fn clock_skew_clamps_to_zero() {
        let clock = StreakClock::new(epoch() + Duration::hours(5));
        assert_eq!(clock.elapsed(epoch()), Elapsed::ZERO);
    }

    proptest! {
        #[test]
        fn days_is_floor_of_seconds(total in 0i64..400 * 86_400) {
            let clock = StreakClock::new(epoch());
            let now = epoch() + Duration::seconds(total);
            prop_assert_eq!(clock.elapsed(now).days, total / 86_400);
        }

        #[test]
        fn decomposition_round_trips(total in 0i64..400 * 86_400) {
            let clock = StreakClock::new(epoch());
            let now = epoch() + Duration::seconds(total);
            let e = clock.elapsed(now);
            prop_assert_eq!(e.total_seconds(), total);
            prop_assert!((0..24).contains(&e.hours));
            prop_assert!((0..60).contains(&e.minutes));
            prop_assert!((0..60).contains(&e.seconds));
        }
    }
}
