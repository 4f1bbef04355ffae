//! Shared metrics record and the bar fills derived from it.
//!
//! `MetricsState` has a single owner (the calculator state). Chart renderers
//! only ever see a `&MetricsState` snapshot.

use serde::{Deserialize, Serialize};

use super::reading::SleepReading;

pub const TARGET_SLEEP_HOURS: f64 = 9.0;
pub const MAX_WINDDOWN_HOURS: f64 = 2.0;
/// Consistency is not derived from any input yet; the bar shows a fixed fill.
pub const CONSISTENCY_PLACEHOLDER_PCT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsState {
    pub sleep: f64,
    pub target: f64,
    pub screens: f64,
    pub winddown: f64,
}

impl Default for MetricsState {
    fn default() -> Self {
        Self {
            sleep: 7.5,
            target: TARGET_SLEEP_HOURS,
            screens: 2.5,
            winddown: 0.6,
        }
    }
}

impl MetricsState {
    /// Overwrite every input-derived field from an accepted submission.
    pub fn record(&mut self, sleep_hours: f64, reading: &SleepReading) {
        self.sleep = sleep_hours;
        self.target = TARGET_SLEEP_HOURS;
        self.screens = reading.screen_hours;
        self.winddown = reading
            .gap_hours
            .map(|gap| gap.clamp(0.0, MAX_WINDDOWN_HOURS))
            .unwrap_or(0.0);
    }

    pub fn bar_fills(&self) -> BarFills {
        BarFills {
            sleep_pct: sleep_fill_pct(self.sleep),
            winddown_pct: winddown_fill_pct(self.winddown),
            consistency_pct: CONSISTENCY_PLACEHOLDER_PCT,
        }
    }
}

/// Widths (in percent) of the three progress rows in the metrics section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarFills {
    pub sleep_pct: f64,
    pub winddown_pct: f64,
    pub consistency_pct: f64,
}

pub fn clamp_pct(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

pub fn sleep_fill_pct(sleep_hours: f64) -> f64 {
    clamp_pct((sleep_hours / 10.0).min(1.0) * 100.0)
}

pub fn winddown_fill_pct(winddown_hours: f64) -> f64 {
    clamp_pct((winddown_hours / 1.5).min(1.0) * 100.0)
}

/// Blend of raw screen exposure and how close to bedtime screens stopped.
/// A missing cutoff counts as full proximity pressure.
pub fn screen_overlap_score(screen_hours: f64, gap_hours: Option<f64>) -> f64 {
    if screen_hours == 0.0 {
        return 0.0;
    }
    let exposure = (screen_hours / 3.0).min(1.0);
    let proximity = gap_hours
        .map(|gap| (1.0 - gap / 1.5).max(0.0))
        .unwrap_or(1.0);
    (exposure * 0.6 + proximity * 0.4).min(1.0)
}

pub fn screen_overlap_pct(screen_hours: f64, gap_hours: Option<f64>) -> f64 {
    clamp_pct(screen_overlap_score(screen_hours, gap_hours) * 100.0)
}
