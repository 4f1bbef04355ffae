//! Two-track ambient audio deck.
//!
//! Each track carries a small `{Stopped, Pending, Playing}` state that is
//! re-read from the device after every play or pause, so overlapping
//! requests (autoplay retry, unlock gesture, button clicks) converge on what
//! the media element actually reports.

use std::cell::Cell;

use futures::future::{join_all, LocalBoxFuture};

use crate::core::config::AudioConfig;
use crate::error::PlaybackError;

/// Input events that count as a user gesture for autoplay unlocking.
pub const USER_SIGNALS: [&str; 8] = [
    "pointerdown",
    "click",
    "keydown",
    "mousemove",
    "wheel",
    "touchstart",
    "scroll",
    "touchmove",
];

/// The handful of media-element operations the deck needs.
pub trait MediaTrack {
    fn is_paused(&self) -> bool;
    fn is_muted(&self) -> bool;
    fn set_muted(&self, muted: bool);
    fn set_volume(&self, volume: f64);
    fn set_looping(&self, looping: bool);
    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlaybackError>>;
    fn pause(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Snore,
    Ambience,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Snore, Track::Ambience];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Pending,
    Playing,
}

struct Channel<T> {
    track: T,
    state: Cell<PlaybackState>,
}

impl<T: MediaTrack> Channel<T> {
    fn new(track: T) -> Self {
        Self {
            track,
            state: Cell::new(PlaybackState::Stopped),
        }
    }

    fn reconcile(&self) {
        self.state.set(if self.track.is_paused() {
            PlaybackState::Stopped
        } else {
            PlaybackState::Playing
        });
    }
}

pub struct AudioDeck<T> {
    snore: Channel<T>,
    ambience: Channel<T>,
}

impl<T: MediaTrack> AudioDeck<T> {
    pub fn new(snore: T, ambience: T) -> Self {
        Self {
            snore: Channel::new(snore),
            ambience: Channel::new(ambience),
        }
    }

    /// Apply volumes and looping from the site configuration.
    pub fn configure(&self, config: &AudioConfig) {
        self.snore.track.set_volume(config.snore_volume);
        self.ambience.track.set_volume(config.ambience_volume);
        for channel in self.channels() {
            channel.track.set_looping(true);
        }
    }

    fn channel(&self, track: Track) -> &Channel<T> {
        match track {
            Track::Snore => &self.snore,
            Track::Ambience => &self.ambience,
        }
    }

    fn channels(&self) -> [&Channel<T>; 2] {
        [&self.snore, &self.ambience]
    }

    pub fn state(&self, track: Track) -> PlaybackState {
        self.channel(track).state.get()
    }

    pub fn reconcile(&self) {
        for channel in self.channels() {
            channel.reconcile();
        }
    }

    pub fn set_muted(&self, muted: bool) {
        for channel in self.channels() {
            channel.track.set_muted(muted);
        }
    }

    /// Start both tracks. Outside a user gesture the tracks are muted first so
    /// the browser is more likely to allow playback; the caller unmutes once
    /// playback is confirmed.
    pub async fn play_all(&self, from_gesture: bool) -> Result<(), PlaybackError> {
        if !from_gesture {
            self.set_muted(true);
        }
        for channel in self.channels() {
            channel.state.set(PlaybackState::Pending);
        }

        let results = join_all(self.channels().map(|channel| channel.track.play())).await;
        self.reconcile();

        results.into_iter().collect::<Result<Vec<()>, _>>()?;
        if self.channels().iter().any(|channel| channel.track.is_paused()) {
            return Err(PlaybackError::StillPaused);
        }
        Ok(())
    }

    pub fn pause_all(&self) {
        for channel in self.channels() {
            channel.track.pause();
        }
        self.reconcile();
    }

    /// Combined toggle: pause everything when anything plays, otherwise start
    /// both tracks as a gesture. Returns whether audio is now playing.
    pub async fn toggle_all(&self) -> Result<bool, PlaybackError> {
        self.reconcile();
        if self.snapshot().any_playing() {
            self.pause_all();
            return Ok(false);
        }
        self.play_all(true).await?;
        self.set_muted(false);
        Ok(true)
    }

    /// Flip a single track and report where it ended up.
    pub async fn toggle(&self, track: Track) -> Result<PlaybackState, PlaybackError> {
        let channel = self.channel(track);
        if channel.track.is_paused() {
            channel.state.set(PlaybackState::Pending);
            let result = channel.track.play().await;
            channel.reconcile();
            result?;
        } else {
            channel.track.pause();
            channel.reconcile();
        }
        Ok(channel.state.get())
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            snore: self.snore.state.get(),
            ambience: self.ambience.state.get(),
            muted: self.snore.track.is_muted(),
        }
    }
}

/// Copy of the deck state for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckSnapshot {
    pub snore: PlaybackState,
    pub ambience: PlaybackState,
    pub muted: bool,
}

impl DeckSnapshot {
    pub fn is_playing(&self, track: Track) -> bool {
        let state = match track {
            Track::Snore => self.snore,
            Track::Ambience => self.ambience,
        };
        state == PlaybackState::Playing
    }

    pub fn any_playing(&self) -> bool {
        Track::ALL.iter().any(|track| self.is_playing(*track))
    }

    /// Indicator shown next to the combined toggle. `blocked` is set after a
    /// manual play attempt was refused.
    pub fn status(&self, blocked: bool) -> AudioStatus {
        if self.any_playing() {
            AudioStatus::Playing
        } else if blocked {
            AudioStatus::Blocked
        } else {
            AudioStatus::Muted
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioStatus {
    Playing,
    Muted,
    /// Shown as "Tap again to allow audio".
    Blocked,
}

/// What to do after an autoplay attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedFollowUp {
    /// Attach the one-shot gesture listeners (only if none are pending).
    pub arm_unlock: bool,
    /// Try autoplay again after this delay.
    pub retry_after_ms: Option<u64>,
}

/// Bounded autoplay retries plus a single pending unlock listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayPolicy {
    max_retries: u32,
    retries: u32,
    backoff_ms: u64,
    unmute_delay_ms: u64,
    gesture_unmute_delay_ms: u64,
    unlock_armed: bool,
}

impl AutoplayPolicy {
    pub fn new(config: &AudioConfig) -> Self {
        Self {
            max_retries: config.autoplay_retries,
            retries: 0,
            backoff_ms: config.retry_backoff_ms,
            unmute_delay_ms: config.unmute_delay_ms,
            gesture_unmute_delay_ms: config.gesture_unmute_delay_ms,
            unlock_armed: false,
        }
    }

    pub fn on_blocked(&mut self) -> BlockedFollowUp {
        let arm_unlock = !std::mem::replace(&mut self.unlock_armed, true);
        let retry_after_ms = if self.retries < self.max_retries {
            self.retries += 1;
            Some(self.backoff_ms)
        } else {
            None
        };
        BlockedFollowUp {
            arm_unlock,
            retry_after_ms,
        }
    }

    /// The gesture-triggered attempt finished, whatever its outcome.
    pub fn on_unlock_finished(&mut self) {
        self.unlock_armed = false;
    }

    pub fn unlock_armed(&self) -> bool {
        self.unlock_armed
    }

    pub fn unmute_delay_ms(&self, from_gesture: bool) -> u64 {
        if from_gesture {
            self.gesture_unmute_delay_ms
        } else {
            self.unmute_delay_ms
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::future::{self, LocalBoxFuture};

    use super::MediaTrack;
    use crate::error::PlaybackError;

    /// Scripted media element. `allow` decides whether `play` succeeds;
    /// `stick_paused` simulates a resolved play that never started.
    #[derive(Clone, Default)]
    pub struct FakeTrack {
        pub paused: Rc<Cell<bool>>,
        pub muted: Rc<Cell<bool>>,
        pub volume: Rc<Cell<f64>>,
        pub looping: Rc<Cell<bool>>,
        pub allow: Rc<Cell<bool>>,
        pub stick_paused: Rc<Cell<bool>>,
        pub plays: Rc<RefCell<u32>>,
    }

    impl FakeTrack {
        pub fn new(allow: bool) -> Self {
            let track = Self::default();
            track.paused.set(true);
            track.allow.set(allow);
            track
        }
    }

    impl MediaTrack for FakeTrack {
        fn is_paused(&self) -> bool {
            self.paused.get()
        }
        fn is_muted(&self) -> bool {
            self.muted.get()
        }
        fn set_muted(&self, muted: bool) {
            self.muted.set(muted);
        }
        fn set_volume(&self, volume: f64) {
            self.volume.set(volume);
        }
        fn set_looping(&self, looping: bool) {
            self.looping.set(looping);
        }
        fn play(&self) -> LocalBoxFuture<'static, Result<(), PlaybackError>> {
            *self.plays.borrow_mut() += 1;
            if !self.allow.get() {
                return Box::pin(future::ready(Err(PlaybackError::Rejected(
                    "NotAllowedError".to_string(),
                ))));
            }
            if !self.stick_paused.get() {
                self.paused.set(false);
            }
            Box::pin(future::ready(Ok(())))
        }
        fn pause(&self) {
            self.paused.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::fake::FakeTrack;
    use super::*;

    fn deck(allow: bool) -> (AudioDeck<FakeTrack>, FakeTrack, FakeTrack) {
        let snore = FakeTrack::new(allow);
        let ambience = FakeTrack::new(allow);
        (AudioDeck::new(snore.clone(), ambience.clone()), snore, ambience)
    }

    #[test]
    fn configure_sets_volumes_and_looping() {
        let (deck, snore, ambience) = deck(true);
        deck.configure(&AudioConfig::default());
        assert_eq!(snore.volume.get(), 1.0);
        assert_eq!(ambience.volume.get(), 0.35);
        assert!(snore.looping.get() && ambience.looping.get());
    }

    #[test]
    fn autoplay_mutes_then_plays() {
        let (deck, snore, _) = deck(true);
        block_on(deck.play_all(false)).unwrap();
        assert!(snore.muted.get());
        assert_eq!(*snore.plays.borrow(), 1);
        assert_eq!(deck.state(Track::Snore), PlaybackState::Playing);
        assert_eq!(deck.state(Track::Ambience), PlaybackState::Playing);
    }

    #[test]
    fn gesture_play_leaves_mute_alone() {
        let (deck, snore, _) = deck(true);
        block_on(deck.play_all(true)).unwrap();
        assert!(!snore.muted.get());
    }

    #[test]
    fn rejected_play_reconciles_to_stopped() {
        let (deck, _, _) = deck(false);
        let err = block_on(deck.play_all(false)).unwrap_err();
        assert!(matches!(err, PlaybackError::Rejected(_)));
        assert_eq!(deck.snapshot().snore, PlaybackState::Stopped);
        assert_eq!(deck.snapshot().status(false), AudioStatus::Muted);
    }

    #[test]
    fn resolved_but_paused_is_a_failure() {
        let (deck, _, ambience) = deck(true);
        ambience.stick_paused.set(true);
        let err = block_on(deck.play_all(true)).unwrap_err();
        assert_eq!(err, PlaybackError::StillPaused);
        // The state reflects the device, not the request.
        assert_eq!(deck.state(Track::Snore), PlaybackState::Playing);
        assert_eq!(deck.state(Track::Ambience), PlaybackState::Stopped);
    }

    #[test]
    fn combined_toggle_flips_both_tracks() {
        let (deck, snore, ambience) = deck(true);
        snore.muted.set(true);
        assert_eq!(block_on(deck.toggle_all()), Ok(true));
        assert!(!snore.muted.get());
        assert_eq!(block_on(deck.toggle_all()), Ok(false));
        assert!(snore.paused.get() && ambience.paused.get());
        assert!(!deck.snapshot().any_playing());
    }

    #[test]
    fn single_toggle_only_touches_one_track() {
        let (deck, snore, ambience) = deck(true);
        assert_eq!(block_on(deck.toggle(Track::Ambience)), Ok(PlaybackState::Playing));
        assert!(snore.paused.get());
        assert!(!ambience.paused.get());
        assert_eq!(block_on(deck.toggle(Track::Ambience)), Ok(PlaybackState::Stopped));
    }

    #[test]
    fn external_pause_is_picked_up_on_reconcile() {
        let (deck, snore, _) = deck(true);
        block_on(deck.play_all(true)).unwrap();
        snore.pause();
        assert_eq!(deck.state(Track::Snore), PlaybackState::Playing);
        deck.reconcile();
        assert_eq!(deck.state(Track::Snore), PlaybackState::Stopped);
    }

    #[test]
    fn status_prefers_playing_over_blocked() {
        let playing = DeckSnapshot {
            snore: PlaybackState::Playing,
            ..DeckSnapshot::default()
        };
        assert_eq!(playing.status(true), AudioStatus::Playing);
        assert_eq!(DeckSnapshot::default().status(true), AudioStatus::Blocked);
    }

    #[test]
    fn autoplay_retries_are_bounded() {
        let mut policy = AutoplayPolicy::new(&AudioConfig::default());
        let first = policy.on_blocked();
        assert!(first.arm_unlock);
        assert_eq!(first.retry_after_ms, Some(1200));

        let second = policy.on_blocked();
        assert!(!second.arm_unlock);
        assert_eq!(second.retry_after_ms, Some(1200));
        assert_eq!(policy.on_blocked().retry_after_ms, Some(1200));
        assert_eq!(policy.on_blocked().retry_after_ms, None);
    }

    #[test]
    fn unlock_can_be_rearmed_after_it_fires() {
        let mut policy = AutoplayPolicy::new(&AudioConfig::default());
        assert!(policy.on_blocked().arm_unlock);
        assert!(policy.unlock_armed());
        policy.on_unlock_finished();
        assert!(policy.on_blocked().arm_unlock);
    }

    #[test]
    fn unmute_delay_depends_on_gesture() {
        let policy = AutoplayPolicy::new(&AudioConfig::default());
        assert_eq!(policy.unmute_delay_ms(false), 180);
        assert_eq!(policy.unmute_delay_ms(true), 40);
    }
}
