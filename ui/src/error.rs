//! Error types shared across the page components.
//!
//! Malformed clock text is not an error: it propagates as `None` through
//! `core::clock` and the heuristics. These enums cover the failures that
//! actually reach the user or the log.

use thiserror::Error;

/// Message shown inline when the calculator rejects a sleep window.
pub const UNREALISTIC_WINDOW_MESSAGE: &str =
    "Enter realistic bed and wake times (same night to next morning).";

/// Calculator submission failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Duration undefined, at most 15 minutes, or longer than 14 hours.
    #[error("Enter realistic bed and wake times (same night to next morning).")]
    UnrealisticWindow { hours: Option<f64> },
}

/// Media playback failures. Never fatal; they only flip the muted indicator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),

    #[error("track stayed paused after play request")]
    StillPaused,

    #[error("media element unavailable: {0}")]
    Unavailable(&'static str),
}

/// Drawing target could not be prepared.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("drawing surface unavailable: {0}")]
    Unavailable(&'static str),
}

/// Clipboard write failures for the prompt copy button.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard copy blocked")]
    Blocked,
}

/// Embedded site configuration could not be decoded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_error_message_matches_inline_copy() {
        let err = CalcError::UnrealisticWindow { hours: Some(20.0) };
        assert_eq!(err.to_string(), UNREALISTIC_WINDOW_MESSAGE);
    }
}
