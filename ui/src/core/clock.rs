//! Clock arithmetic for the sleep calculator.
//!
//! Times of day are minute offsets within a single 24 h cycle. Parsing never
//! fails loudly: text that does not look like `HH:MM` becomes `None`, and every
//! derived quantity stays `None` when one of its inputs is missing.

use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: i32 = 1440;

/// Minute offset in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from a raw minute count, wrapping into a single day.
    pub fn from_minutes(minutes: i32) -> Self {
        Self(minutes.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    pub fn minutes(self) -> i32 {
        i32::from(self.0)
    }

    /// Hours from `self` forward to `end`. An `end` at or before `self` is
    /// taken to fall on the following day.
    pub fn hours_until(self, end: TimeOfDay) -> f64 {
        let mut finish = end.minutes();
        if finish <= self.minutes() {
            finish += MINUTES_PER_DAY;
        }
        f64::from(finish - self.minutes()) / 60.0
    }

    /// Shortest distance around the clock face, in hours (0..=12).
    pub fn circular_gap_hours(self, other: TimeOfDay) -> f64 {
        let raw = (self.minutes() - other.minutes()).abs();
        let wrapped = MINUTES_PER_DAY - raw;
        f64::from(raw.min(wrapped)) / 60.0
    }
}

/// Parse `HH:MM` text. Components beyond the second are ignored; hour and
/// minute values are not range checked, only wrapped into the day.
pub fn parse_clock(text: &str) -> Option<TimeOfDay> {
    let mut parts = text.split(':');
    let hours: i32 = parts.next()?.trim().parse().ok()?;
    let minutes: i32 = parts.next()?.trim().parse().ok()?;
    let total = hours.checked_mul(60)?.checked_add(minutes)?;
    Some(TimeOfDay::from_minutes(total))
}

pub fn elapsed_hours(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Option<f64> {
    start.zip(end).map(|(start, end)| start.hours_until(end))
}

pub fn circular_gap_hours(a: Option<TimeOfDay>, b: Option<TimeOfDay>) -> Option<f64> {
    a.zip(b).map(|(a, b)| a.circular_gap_hours(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(minutes: i32) -> Option<TimeOfDay> {
        Some(TimeOfDay::from_minutes(minutes))
    }

    #[test]
    fn parses_clock_text() {
        assert_eq!(parse_clock("07:30").map(TimeOfDay::minutes), Some(450));
        assert_eq!(parse_clock("23:05").map(TimeOfDay::minutes), Some(1385));
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("ab:cd"), None);
        assert_eq!(parse_clock("7"), None);
    }

    #[test]
    fn out_of_day_values_wrap() {
        assert_eq!(parse_clock("24:30").map(TimeOfDay::minutes), Some(30));
        assert_eq!(parse_clock("-1:00").map(TimeOfDay::minutes), Some(1380));
    }

    #[test]
    fn elapsed_spans_midnight() {
        assert_eq!(elapsed_hours(at(1380), at(420)), Some(8.0));
        assert_eq!(elapsed_hours(at(420), at(1380)), Some(16.0));
        assert_eq!(elapsed_hours(at(600), at(600)), Some(24.0));
        assert_eq!(elapsed_hours(None, at(420)), None);
    }

    #[test]
    fn gap_takes_the_short_way_round() {
        assert_eq!(circular_gap_hours(at(1380), at(30)), Some(1.5));
        assert_eq!(circular_gap_hours(at(30), at(1380)), Some(1.5));
        assert_eq!(circular_gap_hours(at(0), at(720)), Some(12.0));
        assert_eq!(circular_gap_hours(at(1380), None), None);
    }

    #[test]
    fn gap_never_exceeds_half_a_day() {
        for a in (0..MINUTES_PER_DAY).step_by(37) {
            for b in (0..MINUTES_PER_DAY).step_by(53) {
                let gap = circular_gap_hours(at(a), at(b)).unwrap();
                assert!((0.0..=12.0).contains(&gap), "gap {gap} for {a}/{b}");
            }
        }
    }
}
