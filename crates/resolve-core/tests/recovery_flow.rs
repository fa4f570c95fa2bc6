//! Integration tests for the full recovery workflow.
//!
//! These tests exercise the streak clock, challenge engine and relapse
//! coordination together, the way the CLI host drives them, including
//! persistence round-trips across simulated restarts.

use chrono::{DateTime, Duration, Utc};
use resolve_core::challenge::habit_count;
use resolve_core::{milestone, Elapsed, Event, StateFile, Tracker, LEVEL_TARGETS};

fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn complete_one_day(tracker: &mut Tracker, now: DateTime<Utc>) -> Vec<Event> {
    for i in 0..habit_count() {
        tracker.challenge.toggle_habit(i).unwrap();
    }
    tracker.challenge.complete_day(now)
}

#[test]
fn test_streak_display_over_first_week() {
    let tracker = Tracker::new(t0());

    let now = t0() + Duration::days(6) + Duration::hours(4) + Duration::minutes(30);
    let e = tracker.streak.elapsed(now);
    assert_eq!(e.days, 6);
    assert_eq!(e.hours, 4);
    assert_eq!(e.minutes, 30);
    assert_eq!(e.seconds, 0);

    // Day 7 is both a milestone and a notable day.
    let days = tracker.streak.elapsed_days(t0() + Duration::days(7));
    assert_eq!(milestone::evaluate(days).unwrap().name, "One Week");
    assert!(milestone::is_notable_day(days));
}

#[test]
fn test_challenge_climbs_through_levels() {
    let mut tracker = Tracker::new(t0());
    tracker.challenge.start(t0()).unwrap();

    let mut level_events = Vec::new();
    for day in 0..(7 + 14) {
        let events = complete_one_day(&mut tracker, t0() + Duration::days(day));
        level_events.extend(
            events
                .into_iter()
                .filter(|e| matches!(e, Event::LevelCompleted { .. })),
        );
    }

    assert_eq!(level_events.len(), 2);
    assert_eq!(tracker.challenge.level_index(), 2);
    assert_eq!(tracker.challenge.target(), 30);
    assert_eq!(tracker.challenge.day_number(), 1);
}

#[test]
fn test_relapse_mid_level_is_asymmetric() {
    let mut tracker = Tracker::new(t0());
    tracker.challenge.start(t0()).unwrap();

    // Finish levels 0-2, then 19 days into level 3.
    let mut day = 0i64;
    for _ in 0..(7 + 14 + 30 + 19) {
        complete_one_day(&mut tracker, t0() + Duration::days(day));
        day += 1;
    }
    assert_eq!(tracker.challenge.level_index(), 3);
    assert_eq!(tracker.challenge.day_number(), 20);

    let now = t0() + Duration::days(day) + Duration::hours(3);
    let event = tracker.relapse(now);

    assert_eq!(event, Event::ProgressReset { at: now });
    // Streak: fully reset.
    assert_eq!(tracker.streak.elapsed(now), Elapsed::ZERO);
    // Challenge: day reset, level preserved, still active.
    assert_eq!(tracker.challenge.level_index(), 3);
    assert_eq!(tracker.challenge.day_number(), 1);
    assert!(tracker.challenge.completed_today().is_empty());
    assert!(tracker.challenge.is_active());
}

#[test]
fn test_full_cycle_masters_all_levels_and_wraps() {
    let mut tracker = Tracker::new(t0());
    tracker.challenge.start(t0()).unwrap();

    let total_days: i64 = LEVEL_TARGETS.iter().map(|&t| t as i64).sum();
    let mut saw_mastered = false;
    for day in 0..total_days {
        let events = complete_one_day(&mut tracker, t0() + Duration::days(day));
        if events
            .iter()
            .any(|e| matches!(e, Event::AllLevelsMastered { .. }))
        {
            saw_mastered = true;
            assert_eq!(day, total_days - 1, "mastery only on the final day");
        }
    }

    assert!(saw_mastered);
    assert!(!tracker.challenge.is_active());
    assert_eq!(tracker.challenge.level_index(), 0);
    assert_eq!(tracker.challenge.day_number(), 0);
}

#[test]
fn test_state_survives_restart_within_the_day() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");
    let today = t0().date_naive();

    let mut tracker = Tracker::new(t0());
    tracker.challenge.start(t0()).unwrap();
    tracker.challenge.toggle_habit(0).unwrap();
    tracker.challenge.toggle_habit(2).unwrap();
    StateFile::save_to(&path, &tracker, today).unwrap();

    // Same-day restart: in-flight habit set survives.
    let mut restored = StateFile::load_from(&path, today).unwrap().unwrap();
    assert_eq!(restored, tracker);

    // Finish the rest of the habits and advance.
    for i in 0..habit_count() {
        if !restored.challenge.completed_today().contains(&i) {
            restored.challenge.toggle_habit(i).unwrap();
        }
    }
    let events = restored.challenge.complete_day(t0());
    assert!(!events.is_empty());
    assert_eq!(restored.challenge.day_number(), 2);
}

#[test]
fn test_overnight_restart_drops_stale_habits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    let mut tracker = Tracker::new(t0());
    tracker.challenge.start(t0()).unwrap();
    for i in 0..habit_count() {
        tracker.challenge.toggle_habit(i).unwrap();
    }
    // All habits done but the day was never advanced before quitting.
    StateFile::save_to(&path, &tracker, t0().date_naive()).unwrap();

    let tomorrow = (t0() + Duration::days(1)).date_naive();
    let restored = StateFile::load_from(&path, tomorrow).unwrap().unwrap();

    assert!(restored.challenge.completed_today().is_empty());
    assert_eq!(restored.challenge.day_number(), 1);
}
