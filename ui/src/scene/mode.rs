//! Day/night visual mode and the phase value handed to the stylesheet.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkyMode {
    #[default]
    Day,
    Night,
}

impl SkyMode {
    pub fn toggled(self) -> Self {
        match self {
            SkyMode::Day => SkyMode::Night,
            SkyMode::Night => SkyMode::Day,
        }
    }

    pub fn is_night(self) -> bool {
        self == SkyMode::Night
    }

    pub fn phase(self) -> f64 {
        match self {
            SkyMode::Day => 0.0,
            SkyMode::Night => 1.0,
        }
    }
}

/// Inline style carrying the phase as `--phase` and `--sky-phase`.
pub fn phase_style(phase: f64) -> String {
    let phase = if phase.is_nan() { 0.0 } else { phase.clamp(0.0, 1.0) };
    format!("--phase: {phase:.3}; --sky-phase: {phase:.3};")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(SkyMode::Day.toggled(), SkyMode::Night);
        assert_eq!(SkyMode::Day.toggled().toggled(), SkyMode::Day);
    }

    #[test]
    fn phase_is_binary_per_mode() {
        assert_eq!(SkyMode::Day.phase(), 0.0);
        assert_eq!(SkyMode::Night.phase(), 1.0);
        assert_eq!(phase_style(1.0), "--phase: 1.000; --sky-phase: 1.000;");
        assert_eq!(phase_style(f64::NAN), "--phase: 0.000; --sky-phase: 0.000;");
    }
}
