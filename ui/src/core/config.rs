//! Site configuration.
//!
//! Defaults are compiled in; `assets/site.json` may override any subset of
//! fields. A broken file is logged and ignored so the page still renders.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::ConfigError;

const EMBEDDED_SITE_JSON: &str = include_str!("../../assets/site.json");

static CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(EMBEDDED_SITE_JSON) {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!("{err}; using built-in defaults");
        SiteConfig::default()
    }
});

/// Active configuration (embedded file merged over defaults).
pub fn config() -> &'static SiteConfig {
    &CONFIG
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub audio: AudioConfig,
    pub orbit: OrbitConfig,
    pub charts: ChartConfig,
    pub effects: EffectsConfig,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Media URL overrides; empty selects the bundled loops.
    pub snore_src: String,
    pub ambience_src: String,
    pub snore_volume: f64,
    pub ambience_volume: f64,
    /// Timed autoplay retries after the first attempt.
    pub autoplay_retries: u32,
    pub retry_backoff_ms: u64,
    pub unmute_delay_ms: u64,
    pub gesture_unmute_delay_ms: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            snore_src: String::new(),
            ambience_src: String::new(),
            snore_volume: 1.0,
            ambience_volume: 0.35,
            autoplay_retries: 3,
            retry_backoff_ms: 1200,
            unmute_delay_ms: 180,
            gesture_unmute_delay_ms: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub duration_ms: f64,
    pub start_delay_ms: u64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            duration_ms: 7000.0,
            start_delay_ms: 1200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub trend_height: f64,
    pub metrics_height: f64,
    /// Width used when no on-screen element can be measured.
    pub fallback_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            trend_height: 320.0,
            metrics_height: 260.0,
            fallback_width: 640.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub matrix_interval_ms: u64,
    pub matrix_flip_ms: u64,
    pub title_interval_ms: u64,
    pub title_flip_ms: u64,
    pub snap_lock_ms: u64,
    pub copy_status_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            matrix_interval_ms: 600,
            matrix_flip_ms: 420,
            title_interval_ms: 2400,
            title_flip_ms: 400,
            snap_lock_ms: 900,
            copy_status_ms: 2200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_file_parses() {
        let parsed = SiteConfig::from_json(EMBEDDED_SITE_JSON).expect("site.json parses");
        assert_eq!(parsed.audio.snore_volume, 1.0);
        assert_eq!(parsed.audio.ambience_volume, 0.35);
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let parsed = SiteConfig::from_json(r#"{ "audio": { "autoplay_retries": 5 } }"#).unwrap();
        assert_eq!(parsed.audio.autoplay_retries, 5);
        assert_eq!(parsed.audio.retry_backoff_ms, 1200);
        assert_eq!(parsed.orbit, OrbitConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ audio: ").is_err());
    }
}
