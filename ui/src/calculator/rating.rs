//! Three-tier sleep rating.
//!
//! Rules are evaluated top-down and the first match wins. The order is the
//! contract; the thresholds intentionally differ from `advice`.

use serde::{Deserialize, Serialize};

use super::reading::SleepReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    SleepStar,
    OnTrack,
    NeedsImprovement,
}

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Rating::SleepStar => "Sleep Star",
            Rating::OnTrack => "On Track",
            Rating::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Modifier class on the rating badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Rating::SleepStar => "good",
            Rating::OnTrack => "ok",
            Rating::NeedsImprovement => "poor",
        }
    }

    pub fn copy(self) -> &'static str {
        match self {
            Rating::SleepStar => "Nice! Solid sleep span and low screen pressure before bed.",
            Rating::OnTrack => {
                "You're close. A little more sleep or earlier screen cutoff can boost recovery."
            }
            Rating::NeedsImprovement => {
                "Sleep is short or screens run late. Tweak timing to feel better tomorrow."
            }
        }
    }
}

struct RatingRule {
    matches: fn(&SleepReading) -> bool,
    outcome: Rating,
}

const RULES: &[RatingRule] = &[
    RatingRule {
        matches: |r| {
            r.sleep_within(8.0, 10.0) && r.screen_hours <= 1.0 && r.gap_matches(|gap| gap >= 0.75)
        },
        outcome: Rating::SleepStar,
    },
    RatingRule {
        matches: |r| r.sleep_matches(|hours| hours >= 7.5) && r.screen_hours <= 2.0,
        outcome: Rating::OnTrack,
    },
];

pub fn rate(reading: &SleepReading) -> Rating {
    RULES
        .iter()
        .find(|rule| (rule.matches)(reading))
        .map(|rule| rule.outcome)
        .unwrap_or(Rating::NeedsImprovement)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(sleep: f64, screen: f64, gap: Option<f64>) -> SleepReading {
        SleepReading::new(Some(sleep), screen, gap)
    }

    #[test]
    fn star_needs_every_condition() {
        assert_eq!(rate(&reading(9.0, 0.5, Some(1.0))), Rating::SleepStar);
        assert_eq!(rate(&reading(8.0, 1.0, Some(0.75))), Rating::SleepStar);
        assert_eq!(rate(&reading(10.0, 1.0, Some(12.0))), Rating::SleepStar);
    }

    #[test]
    fn missing_cutoff_blocks_star() {
        assert_eq!(rate(&reading(9.0, 0.5, None)), Rating::OnTrack);
    }

    #[test]
    fn long_sleep_with_light_screens_is_on_track() {
        assert_eq!(rate(&reading(11.0, 0.0, Some(2.0))), Rating::OnTrack);
        assert_eq!(rate(&reading(7.5, 2.0, None)), Rating::OnTrack);
    }

    #[test]
    fn everything_else_needs_improvement() {
        assert_eq!(rate(&reading(7.4, 0.0, Some(2.0))), Rating::NeedsImprovement);
        assert_eq!(rate(&reading(9.0, 2.5, Some(2.0))), Rating::NeedsImprovement);
        assert_eq!(
            rate(&SleepReading::new(None, 0.0, Some(2.0))),
            Rating::NeedsImprovement
        );
    }

    #[test]
    fn display_strings_are_fixed() {
        assert_eq!(Rating::SleepStar.label(), "Sleep Star");
        assert_eq!(Rating::OnTrack.css_class(), "ok");
        assert_eq!(Rating::NeedsImprovement.css_class(), "poor");
    }
}
