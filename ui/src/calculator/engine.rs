//! Calculator submission pipeline: raw form text in, assessment out.

use serde::Serialize;

use crate::core::clock::{circular_gap_hours, elapsed_hours, parse_clock};
use crate::core::format::{format_clock_input, format_hours};
use crate::error::CalcError;

use super::advice::{select_advice, Advice};
use super::metrics::{screen_overlap_pct, sleep_fill_pct, MetricsState};
use super::rating::{rate, Rating};
use super::reading::SleepReading;

pub const MIN_SLEEP_HOURS: f64 = 0.25;
pub const MAX_SLEEP_HOURS: f64 = 14.0;
pub const MAX_SCREEN_HOURS: f64 = 12.0;

/// Raw text of the four calculator inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SleepForm {
    pub bedtime: String,
    pub wake: String,
    pub screen_hours: String,
    pub screen_cutoff: String,
}

impl SleepForm {
    pub fn new(bedtime: &str, wake: &str, screen_hours: &str, screen_cutoff: &str) -> Self {
        Self {
            bedtime: bedtime.to_string(),
            wake: wake.to_string(),
            screen_hours: screen_hours.to_string(),
            screen_cutoff: screen_cutoff.to_string(),
        }
    }
}

/// Everything the results panel shows for an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub reading: SleepReading,
    pub sleep_hours: f64,
    pub rating: Rating,
    pub advice: Advice,
    /// Rating copy followed by the estimated duration.
    pub rating_copy: String,
    pub summary: String,
    pub sleep_bar_pct: f64,
    pub screen_bar_pct: f64,
    pub sleep_meta: String,
    pub screen_meta: String,
}

/// Screen hours from free text: blank or unparsable input counts as zero.
pub fn parse_screen_hours(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(hours) if hours.is_finite() => hours.clamp(0.0, MAX_SCREEN_HOURS),
        _ => 0.0,
    }
}

pub fn assess(form: &SleepForm) -> Result<Assessment, CalcError> {
    let bed = parse_clock(&form.bedtime);
    let wake = parse_clock(&form.wake);
    let sleep_hours = match elapsed_hours(bed, wake) {
        Some(hours) if hours > MIN_SLEEP_HOURS && hours <= MAX_SLEEP_HOURS => hours,
        hours => return Err(CalcError::UnrealisticWindow { hours }),
    };

    let screen_hours = parse_screen_hours(&form.screen_hours);
    let cutoff = parse_clock(&form.screen_cutoff);
    let gap_hours = circular_gap_hours(bed, cutoff);
    let reading = SleepReading::new(Some(sleep_hours), screen_hours, gap_hours);

    let rating = rate(&reading);
    let advice = select_advice(&reading);

    let summary = format!(
        "Sleep window: {sleep_hours:.1}h (bed {} to {}). Screens: {screen_hours:.1}h, {}.",
        format_clock_input(&form.bedtime),
        format_clock_input(&form.wake),
        screen_note(screen_hours, gap_hours),
    );

    Ok(Assessment {
        reading,
        sleep_hours,
        rating,
        advice,
        rating_copy: format!("{} Estimated sleep: {sleep_hours:.1}h.", rating.copy()),
        summary,
        sleep_bar_pct: sleep_fill_pct(sleep_hours),
        screen_bar_pct: screen_overlap_pct(screen_hours, gap_hours),
        sleep_meta: format_hours(sleep_hours),
        screen_meta: screen_meta(screen_hours, gap_hours),
    })
}

fn screen_note(screen_hours: f64, gap_hours: Option<f64>) -> String {
    match (screen_hours == 0.0, gap_hours) {
        (true, _) => "no screen time logged".to_string(),
        (false, None) => "screens end at bedtime".to_string(),
        (false, Some(gap)) => format!("screens end ~{gap:.1}h before bed"),
    }
}

fn screen_meta(screen_hours: f64, gap_hours: Option<f64>) -> String {
    match (screen_hours == 0.0, gap_hours) {
        (true, _) => "No screen time logged".to_string(),
        (false, None) => "Screens end at bedtime".to_string(),
        (false, Some(gap)) => format!("Screens end ~{gap:.1}h before bed"),
    }
}

/// Single owner of the calculator's mutable state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub metrics: MetricsState,
    pub last: Option<Assessment>,
    pub error: Option<String>,
}

impl CalculatorState {
    /// Evaluate a submission. A rejected form only sets `error`; the previous
    /// assessment and metrics stay as they were.
    pub fn submit(&mut self, form: &SleepForm) -> Result<&Assessment, CalcError> {
        match assess(form) {
            Ok(assessment) => {
                self.metrics.record(assessment.sleep_hours, &assessment.reading);
                self.error = None;
                Ok(self.last.insert(assessment))
            }
            Err(err) => {
                tracing::debug!(?err, "calculator rejected sleep window");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
