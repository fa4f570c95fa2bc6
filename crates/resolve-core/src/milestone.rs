//! Milestone lookup: elapsed days to a named celebration.
//!
//! Milestones are exact day matches, not ranges -- day 30 is a
//! milestone, day 31 is not. `is_notable_day` is the broader predicate
//! behind the lighter visual emphasis: every milestone day, plus every
//! multiple of 15 once past day 90.

use serde::Serialize;

/// A named day-count threshold worth celebrating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub threshold_days: i64,
    pub name: &'static str,
    pub message: &'static str,
}

/// The fixed milestone table, ordered by threshold.
pub const MILESTONES: [Milestone; 10] = [
    Milestone {
        threshold_days: 1,
        name: "First Day",
        message: "One full day. The hardest step is behind you.",
    },
    Milestone {
        threshold_days: 3,
        name: "Three Days",
        message: "The fog starts to lift around now. Keep going.",
    },
    Milestone {
        threshold_days: 7,
        name: "One Week",
        message: "Seven days. Your streak is becoming a habit.",
    },
    Milestone {
        threshold_days: 14,
        name: "Two Weeks",
        message: "Fourteen days. Momentum is on your side.",
    },
    Milestone {
        threshold_days: 30,
        name: "One Month",
        message: "A full month. This is real change.",
    },
    Milestone {
        threshold_days: 45,
        name: "45 Days",
        message: "Forty-five days. Old urges are losing their grip.",
    },
    Milestone {
        threshold_days: 60,
        name: "Two Months",
        message: "Sixty days. You are rewiring for good.",
    },
    Milestone {
        threshold_days: 90,
        name: "Three Months",
        message: "Ninety days. The classic recovery marker.",
    },
    Milestone {
        threshold_days: 180,
        name: "Six Months",
        message: "Half a year. A different life.",
    },
    Milestone {
        threshold_days: 365,
        name: "One Year",
        message: "One year. You did it once; you can keep it forever.",
    },
];

/// Look up the milestone for an exact day count, if any.
pub fn evaluate(days: i64) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| m.threshold_days == days)
}

/// True for milestone days and, past day 90, every multiple of 15.
/// Drives a lighter visual emphasis than the full milestone message.
pub fn is_notable_day(days: i64) -> bool {
    evaluate(days).is_some() || (days > 90 && days % 15 == 0)
}
