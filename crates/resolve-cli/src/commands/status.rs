use chrono::Utc;
use resolve_core::{milestone, ChallengeSnapshot, Elapsed};
use serde::Serialize;

/// JSON payload for `status --json`.
#[derive(Serialize)]
struct StatusReport {
    streak: Elapsed,
    challenge: ChallengeSnapshot,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let tracker = super::load_tracker(now)?;

    if json {
        let report = StatusReport {
            streak: tracker.streak.elapsed(now),
            challenge: tracker.challenge.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let e = tracker.streak.elapsed(now);
    println!(
        "clean for {}d {:02}h {:02}m {:02}s",
        e.days, e.hours, e.minutes, e.seconds
    );

    if let Some(m) = milestone::evaluate(e.days) {
        println!("milestone: {} -- {}", m.name, m.message);
    } else if milestone::is_notable_day(e.days) {
        println!("day {} is a notable day", e.days);
    }

    let snap = tracker.challenge.snapshot();
    if snap.is_active {
        println!(
            "challenge: level {} -- day {}/{} ({}/{} habits done today)",
            snap.level_index + 1,
            snap.day_number,
            snap.target_days,
            snap.completed_today.len(),
            resolve_core::challenge::habit_count(),
        );
    } else {
        println!("challenge: not active (run `resolve challenge start`)");
    }

    Ok(())
}
