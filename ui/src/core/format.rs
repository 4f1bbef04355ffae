//! Formatting helpers for presenting calculator output.

/// `7.5h`, or `--` when the value is not a finite number.
pub fn format_hours(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}h")
    } else {
        "--".to_string()
    }
}

/// CSS width value for a bar fill, clamped into `0%..=100%`.
pub fn format_width(percent: f64) -> String {
    let clamped = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    format!("{clamped:.1}%")
}

/// Raw clock input echoed back in summaries; blank fields show as `--`.
pub fn format_clock_input(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "--"
    } else {
        trimmed
    }
}
