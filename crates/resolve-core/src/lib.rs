//! # Resolve Core Library
//!
//! This library provides the core business logic for Resolve, a
//! personal-recovery tracker. It implements a CLI-first philosophy where
//! all operations are available via a standalone CLI binary; any GUI is
//! expected to be a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Streak Clock**: A wall-clock-based elapsed-time tracker. Holds no
//!   internal timer; the caller polls `elapsed()` (typically at 1 Hz)
//! - **Challenge Engine**: A day/level state machine driven by explicit
//!   habit toggles and day completions
//! - **Milestones**: A pure lookup from elapsed days to a named
//!   celebration
//! - **Storage**: TOML-based state persistence, driven by the host
//!
//! ## Key Components
//!
//! - [`StreakClock`]: Elapsed abstinence time since the last restart
//! - [`ChallengeEngine`]: Core challenge state machine
//! - [`Tracker`]: Owns both and coordinates the relapse reset
//! - [`StateFile`]: State persistence for the host

pub mod challenge;
pub mod error;
pub mod events;
pub mod milestone;
pub mod storage;
pub mod streak;
pub mod tracker;

pub use challenge::{ChallengeEngine, ChallengeSnapshot, DAILY_HABITS, LEVEL_TARGETS};
pub use error::{CoreError, EngineError, Result, StorageError};
pub use events::Event;
pub use milestone::{Milestone, MILESTONES};
pub use storage::StateFile;
pub use streak::{Elapsed, StreakClock};
pub use tracker::Tracker;
