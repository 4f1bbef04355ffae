//! Input triple shared by the rating and advice heuristics.

use serde::{Deserialize, Serialize};

/// Sleep hours, screen hours and wind-down gap for one submission.
///
/// `sleep_hours` is `None` when either clock input failed to parse and
/// `gap_hours` is `None` when no screen cutoff was given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SleepReading {
    pub sleep_hours: Option<f64>,
    pub screen_hours: f64,
    pub gap_hours: Option<f64>,
}

impl SleepReading {
    pub fn new(sleep_hours: Option<f64>, screen_hours: f64, gap_hours: Option<f64>) -> Self {
        Self {
            sleep_hours,
            screen_hours,
            gap_hours,
        }
    }

    pub(crate) fn sleep_within(&self, low: f64, high: f64) -> bool {
        self.sleep_hours
            .map(|hours| hours >= low && hours <= high)
            .unwrap_or(false)
    }

    pub(crate) fn sleep_matches(&self, predicate: impl Fn(f64) -> bool) -> bool {
        self.sleep_hours.map(predicate).unwrap_or(false)
    }

    pub(crate) fn gap_matches(&self, predicate: impl Fn(f64) -> bool) -> bool {
        self.gap_hours.map(predicate).unwrap_or(false)
    }
}
