//! `HtmlAudioElement` tracks and gesture-unlock listeners for the browser.

use futures::channel::mpsc::UnboundedSender;
use futures::future::LocalBoxFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::core::dom;
use crate::error::PlaybackError;

use super::playback::{MediaTrack, USER_SIGNALS};
use super::view::AudioCommand;

pub struct HtmlTrack {
    element: HtmlAudioElement,
}

impl HtmlTrack {
    /// Detached audio element; it plays without being attached to the page.
    pub fn new(src: &str) -> Result<Self, PlaybackError> {
        let element = HtmlAudioElement::new_with_src(src)
            .map_err(|_| PlaybackError::Unavailable("audio element"))?;
        element.set_preload("auto");
        Ok(Self { element })
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl MediaTrack for HtmlTrack {
    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn is_muted(&self) -> bool {
        self.element.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume.clamp(0.0, 1.0));
    }

    fn set_looping(&self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlaybackError>> {
        let started = self.element.play();
        Box::pin(async move {
            let promise = started.map_err(|err| PlaybackError::Rejected(describe(&err)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| PlaybackError::Rejected(describe(&err)))
        })
    }

    fn pause(&self) {
        let _ = self.element.pause();
    }
}

/// One-shot unlock: the first user signal sends `Unlock` and detaches
/// every listener of this arming.
pub fn arm_unlock(commands: UnboundedSender<AudioCommand>) {
    let armed = dom::listen_first(&USER_SIGNALS, move |_| {
        let _ = commands.unbounded_send(AudioCommand::Unlock);
    });
    if let Err(err) = armed {
        tracing::warn!(?err, "could not arm audio unlock");
    }
}

/// Wheel input retries autoplay while the snore track is still paused.
pub fn watch_wheel(commands: UnboundedSender<AudioCommand>) {
    dom::listen_window("wheel", true, move |_| {
        let _ = commands.unbounded_send(AudioCommand::WheelNudge);
    });
}
