mod engine;
mod habits;

pub use engine::{ChallengeEngine, ChallengeSnapshot, LEVEL_TARGETS};
pub use habits::{habit_count, DAILY_HABITS};
