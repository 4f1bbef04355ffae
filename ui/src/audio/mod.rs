//! Ambient audio: two looped tracks behind one combined toggle.

pub mod playback;
mod view;
#[cfg(target_arch = "wasm32")]
mod web;

pub use playback::{AudioDeck, AudioStatus, AutoplayPolicy, DeckSnapshot, MediaTrack, PlaybackState, Track};
pub use view::{AudioCommand, AudioControls};

use dioxus::prelude::*;

use crate::core::config::AudioConfig;

const SNORE_LOOP: Asset = asset!("/assets/audio/snore.wav");
const AMBIENCE_LOOP: Asset = asset!("/assets/audio/ambience.wav");

/// Media URL for `track`: the configured override, else the bundled loop.
pub fn track_source(track: Track, audio: &AudioConfig) -> String {
    let (configured, bundled) = match track {
        Track::Snore => (&audio.snore_src, SNORE_LOOP),
        Track::Ambience => (&audio.ambience_src, AMBIENCE_LOOP),
    };
    match configured.trim() {
        "" => bundled.to_string(),
        url => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_loops_back_empty_sources() {
        let audio = AudioConfig::default();
        let snore = track_source(Track::Snore, &audio);
        let ambience = track_source(Track::Ambience, &audio);
        assert!(!snore.is_empty());
        assert!(!ambience.is_empty());
        assert_ne!(snore, ambience);
    }

    #[test]
    fn configured_source_wins() {
        let audio = AudioConfig {
            snore_src: " https://cdn.example/snore.mp3 ".to_string(),
            ..AudioConfig::default()
        };
        assert_eq!(track_source(Track::Snore, &audio), "https://cdn.example/snore.mp3");
        assert_ne!(track_source(Track::Ambience, &audio), audio.snore_src);
    }
}
