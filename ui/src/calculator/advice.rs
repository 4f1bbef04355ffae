//! Canned advice picked by an ordered rule list (first match wins).

use serde::{Deserialize, Serialize};

use super::reading::SleepReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advice {
    ShortHigh,
    AdequateLow,
    Moderate,
    Irregular,
}

impl Advice {
    pub fn key(self) -> &'static str {
        match self {
            Advice::ShortHigh => "shortHigh",
            Advice::AdequateLow => "adequateLow",
            Advice::Moderate => "moderate",
            Advice::Irregular => "irregular",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Advice::ShortHigh => "It looks like you're only getting about 6 hours of sleep, and screens are heavy. Try trimming screens to under an hour before bed and add 30 minutes more sleep tonight.",
            Advice::AdequateLow => "Great job staying near 8-9 hours with low screen use. Keep brightness low in the last hour and consider swapping some scroll time for a book or music.",
            Advice::Moderate => "You're around 7 hours or have a couple hours of screens. Tighten your schedule, cap screens in the last hour, and add a small pre-bed wind-down.",
            Advice::Irregular => "Your schedule looks irregular. Aim for a consistent bedtime/wake time within about 30 minutes, and protect that window like an appointment.",
        }
    }
}

struct AdviceRule {
    matches: fn(&SleepReading) -> bool,
    outcome: Advice,
}

const RULES: &[AdviceRule] = &[
    AdviceRule {
        matches: |r| {
            r.sleep_hours.is_some()
                && (r.sleep_matches(|hours| !(5.0..=10.0).contains(&hours))
                    || r.gap_matches(|gap| gap > 6.0))
        },
        outcome: Advice::Irregular,
    },
    AdviceRule {
        matches: |r| r.sleep_matches(|hours| hours < 6.5) && r.screen_hours >= 2.5,
        outcome: Advice::ShortHigh,
    },
    AdviceRule {
        matches: |r| {
            r.sleep_within(8.0, 10.0)
                && r.screen_hours <= 1.25
                && r.gap_hours.map(|gap| gap >= 0.75).unwrap_or(true)
        },
        outcome: Advice::AdequateLow,
    },
    AdviceRule {
        matches: |r| r.sleep_matches(|hours| (6.5..8.0).contains(&hours)) || r.screen_hours >= 1.5,
        outcome: Advice::Moderate,
    },
];

pub fn select_advice(reading: &SleepReading) -> Advice {
    RULES
        .iter()
        .find(|rule| (rule.matches)(reading))
        .map(|rule| rule.outcome)
        .unwrap_or(Advice::AdequateLow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::rating::{rate, Rating};

    fn reading(sleep: Option<f64>, screen: f64, gap: Option<f64>) -> SleepReading {
        SleepReading::new(sleep, screen, gap)
    }

    #[test]
    fn short_sleep_is_irregular_before_anything_else() {
        let r = reading(Some(4.0), 1.0, Some(0.0));
        assert_eq!(select_advice(&r), Advice::Irregular);
        let heavy = reading(Some(4.0), 6.0, None);
        assert_eq!(select_advice(&heavy), Advice::Irregular);
    }

    #[test]
    fn far_cutoff_is_irregular() {
        assert_eq!(
            select_advice(&reading(Some(9.0), 0.5, Some(6.5))),
            Advice::Irregular
        );
        assert_eq!(
            select_advice(&reading(Some(10.5), 0.0, None)),
            Advice::Irregular
        );
    }

    #[test]
    fn short_with_heavy_screens() {
        assert_eq!(
            select_advice(&reading(Some(6.0), 2.5, Some(0.5))),
            Advice::ShortHigh
        );
    }

    #[test]
    fn healthy_night_gets_adequate_low() {
        let r = reading(Some(9.0), 0.5, Some(1.0));
        assert_eq!(select_advice(&r), Advice::AdequateLow);
        assert_eq!(rate(&r), Rating::SleepStar);
        assert_eq!(
            select_advice(&reading(Some(8.0), 1.25, None)),
            Advice::AdequateLow
        );
    }

    #[test]
    fn middling_nights_are_moderate() {
        assert_eq!(
            select_advice(&reading(Some(7.0), 0.0, None)),
            Advice::Moderate
        );
        assert_eq!(
            select_advice(&reading(Some(9.0), 1.5, Some(1.0))),
            Advice::Moderate
        );
    }

    #[test]
    fn unmatched_falls_back_to_adequate_low() {
        assert_eq!(
            select_advice(&reading(Some(6.0), 1.0, Some(0.5))),
            Advice::AdequateLow
        );
        assert_eq!(select_advice(&reading(None, 0.0, None)), Advice::AdequateLow);
    }

    #[test]
    fn rating_and_advice_may_disagree() {
        let r = reading(Some(6.0), 0.5, Some(1.0));
        assert_eq!(rate(&r), Rating::NeedsImprovement);
        assert_eq!(select_advice(&r), Advice::AdequateLow);
    }
}
