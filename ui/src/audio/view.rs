use dioxus::prelude::*;

use crate::scene::SceneState;
use crate::t;

use super::playback::{AudioStatus, DeckSnapshot, Track};

/// Requests handled by the audio driver, one at a time and in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Autoplay,
    /// Gesture seen after autoplay was refused.
    Unlock,
    WheelNudge,
    ToggleAll,
    Toggle(Track),
    Unmute,
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;
    use futures::channel::mpsc::UnboundedSender;
    use futures_util::StreamExt;

    use crate::audio::playback::{AudioDeck, AutoplayPolicy, DeckSnapshot, PlaybackState, Track};
    use crate::audio::track_source;
    use crate::audio::web::{self, HtmlTrack};
    use crate::core::config::config;
    use crate::core::{platform, timing};
    use crate::scene::SceneState;

    use super::AudioCommand;

    type SenderSlot = Rc<RefCell<Option<UnboundedSender<AudioCommand>>>>;

    fn build_deck() -> Option<Rc<AudioDeck<HtmlTrack>>> {
        let audio = &config().audio;
        let tracks = HtmlTrack::new(&track_source(Track::Snore, audio)).and_then(|snore| {
            HtmlTrack::new(&track_source(Track::Ambience, audio)).map(|ambience| (snore, ambience))
        });
        match tracks {
            Ok((snore, ambience)) => {
                let deck = AudioDeck::new(snore, ambience);
                deck.configure(audio);
                Some(Rc::new(deck))
            }
            Err(err) => {
                tracing::warn!(%err, "audio disabled");
                None
            }
        }
    }

    fn send_later(slot: &SenderSlot, delay_ms: u64, command: AudioCommand) {
        let Some(tx) = slot.borrow().clone() else {
            return;
        };
        platform::spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            let _ = tx.unbounded_send(command);
        });
    }

    pub fn use_audio_driver(
        mut snapshot: Signal<DeckSnapshot>,
        mut blocked: Signal<bool>,
        mut scene: Signal<SceneState>,
    ) -> Coroutine<AudioCommand> {
        let deck = use_hook(build_deck);
        let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
        let slot_for_loop = sender_slot.clone();

        let driver = use_coroutine(move |mut rx: UnboundedReceiver<AudioCommand>| {
            let deck = deck.clone();
            let slot = slot_for_loop.clone();
            async move {
                let Some(deck) = deck else {
                    return;
                };
                let mut policy = AutoplayPolicy::new(&config().audio);

                let on_started = {
                    let slot = slot.clone();
                    move |unmute_after_ms: u64| {
                        let (mut blocked, mut scene) = (blocked, scene);
                        blocked.set(false);
                        scene.with_mut(|page| {
                            page.start_experience();
                            page.hide_hint();
                        });
                        send_later(&slot, unmute_after_ms, AudioCommand::Unmute);
                    }
                };

                while let Some(command) = rx.next().await {
                    deck.reconcile();
                    match command {
                        AudioCommand::WheelNudge
                            if deck.state(Track::Snore) == PlaybackState::Playing => {}
                        AudioCommand::Autoplay | AudioCommand::WheelNudge => {
                            match deck.play_all(false).await {
                                Ok(()) => on_started(policy.unmute_delay_ms(false)),
                                Err(err) => {
                                    tracing::info!(
                                        %err,
                                        "autoplay was blocked; waiting for a user gesture"
                                    );
                                    let follow_up = policy.on_blocked();
                                    if follow_up.arm_unlock {
                                        if let Some(tx) = slot.borrow().clone() {
                                            web::arm_unlock(tx);
                                        }
                                    }
                                    if let Some(delay) = follow_up.retry_after_ms {
                                        send_later(&slot, delay, AudioCommand::Autoplay);
                                    }
                                }
                            }
                        }
                        AudioCommand::Unlock => {
                            let result = deck.play_all(true).await;
                            policy.on_unlock_finished();
                            match result {
                                Ok(()) => on_started(policy.unmute_delay_ms(true)),
                                Err(err) => tracing::debug!(%err, "unlock attempt failed"),
                            }
                        }
                        AudioCommand::ToggleAll => match deck.toggle_all().await {
                            Ok(playing) => {
                                blocked.set(false);
                                if playing {
                                    scene.with_mut(SceneState::hide_hint);
                                }
                            }
                            Err(err) => {
                                tracing::debug!(%err, "combined toggle refused");
                                deck.reconcile();
                                blocked.set(true);
                            }
                        },
                        AudioCommand::Toggle(track) => {
                            if let Err(err) = deck.toggle(track).await {
                                tracing::debug!(%err, ?track, "track toggle refused");
                            }
                            scene.with_mut(SceneState::hide_hint);
                        }
                        AudioCommand::Unmute => deck.set_muted(false),
                    }
                    snapshot.set(deck.snapshot());
                }
            }
        });

        use_hook(move || {
            let tx = driver.tx();
            sender_slot.borrow_mut().replace(tx.clone());
            web::watch_wheel(tx);
            driver.send(AudioCommand::Autoplay);
        });

        driver
    }
}

/// Combined sound toggle, per-track toggles and the status line.
#[component]
pub fn AudioControls() -> Element {
    let snapshot = use_signal(DeckSnapshot::default);
    let blocked = use_signal(|| false);
    let scene = use_context::<Signal<SceneState>>();

    #[cfg(target_arch = "wasm32")]
    let driver = browser::use_audio_driver(snapshot, blocked, scene);

    #[cfg(not(target_arch = "wasm32"))]
    let _ = scene;

    let send = move |command: AudioCommand| {
        #[cfg(target_arch = "wasm32")]
        driver.send(command);
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!(?command, "audio playback is only available in the browser");
    };

    let deck = snapshot();
    let all_on = deck.any_playing();
    let snore_on = deck.is_playing(Track::Snore);
    let ambience_on = deck.is_playing(Track::Ambience);
    let status = match deck.status(blocked()) {
        AudioStatus::Playing => t!("audio-status-playing"),
        AudioStatus::Muted => t!("audio-status-muted"),
        AudioStatus::Blocked => t!("audio-status-blocked"),
    };

    rsx! {
        div { class: "audio-controls",
            button {
                id: "audioToggle",
                class: if all_on { "toggle is-on" } else { "toggle" },
                aria_pressed: "{all_on}",
                onclick: move |_| send(AudioCommand::ToggleAll),
                span { class: "toggle-label",
                    if all_on { {t!("audio-sound-on")} } else { {t!("audio-sound-off")} }
                }
            }
            span { id: "audioStatus", class: "audio-status", "{status}" }
            div { class: if all_on { "wave playing" } else { "wave" }, aria_hidden: "true",
                span {}
                span {}
                span {}
                span {}
            }
            button {
                id: "snoreBtn",
                class: if snore_on { "toggle toggle--small is-on" } else { "toggle toggle--small" },
                aria_pressed: "{snore_on}",
                onclick: move |_| send(AudioCommand::Toggle(Track::Snore)),
                span { class: "toggle-label",
                    if snore_on { {t!("audio-snore-on")} } else { {t!("audio-snore-off")} }
                }
            }
            button {
                id: "asmrBtn",
                class: if ambience_on { "toggle toggle--small is-on" } else { "toggle toggle--small" },
                aria_pressed: "{ambience_on}",
                onclick: move |_| send(AudioCommand::Toggle(Track::Ambience)),
                span { class: "toggle-label",
                    if ambience_on { {t!("audio-ambience-on")} } else { {t!("audio-ambience-off")} }
                }
            }
        }
    }
}
