//! The fixed daily habit list.
//!
//! Each challenge day requires every habit to be marked complete before
//! the day can be advanced. Habits are addressed by index into this
//! table. Per-habit point values seen in checklist views elsewhere are
//! presentational scorekeeping and have no effect on progression.

/// The habits required every day of the challenge, in display order.
pub const DAILY_HABITS: [&str; 5] = [
    "Cold shower in the morning",
    "Exercise for at least 20 minutes",
    "Meditate for 10 minutes",
    "No screens in the last hour before bed",
    "Write an evening journal entry",
];

/// Number of habits that must be completed per day.
pub fn habit_count() -> usize {
    DAILY_HABITS.len()
}
