use dioxus::prelude::*;

use crate::core::config::config;
use crate::core::timing;
use crate::t;

use super::flicker::{
    pick_title_flips, title_cells, MatrixField, MATRIX_FLIPS_PER_TICK, TITLE_FLIPS_PER_TICK,
};
use super::mode::phase_style;
use super::orbit::{self, OrbitPath};
use super::SceneState;

async fn run_orbit(mut scene: Signal<SceneState>) {
    let path = OrbitPath::default();
    let duration_ms = config().orbit.duration_ms;
    let started_at = timing::now_ms();
    loop {
        timing::next_frame().await;
        let frame = path.frame(orbit::progress(timing::now_ms() - started_at, duration_ms));
        scene.with_mut(|state| state.apply_orbit(frame));
        if frame.is_done() {
            tracing::debug!("orbit finished");
            break;
        }
    }
}

/// Page wrapper carrying the night class and phase properties. Owns the
/// intro timer, the orbit loop and (in the browser) the scroll effects.
#[component]
pub fn SceneRoot(children: Element) -> Element {
    let mut scene = use_context::<Signal<SceneState>>();

    use_hook(move || {
        spawn(async move {
            timing::sleep_ms(config().orbit.start_delay_ms).await;
            scene.with_mut(|state| {
                state.start_experience();
            });
        });
    });

    let started = use_memo(move || scene.read().experience_started);
    let mut orbit_launched = use_signal(|| false);
    use_effect(move || {
        if started() && !*orbit_launched.peek() {
            orbit_launched.set(true);
            spawn(run_orbit(scene));
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        use futures_util::StreamExt;

        let first_input = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
            if rx.next().await.is_some() {
                scene.with_mut(SceneState::hide_hint);
            }
        });
        use_hook(move || {
            super::effects::install(config().effects.snap_lock_ms);
            super::effects::watch_first_interaction(first_input.tx());
        });
        use_effect(move || {
            let phase = scene.read().phase;
            crate::core::dom::set_root_property("--sky-phase", &format!("{phase:.3}"));
        });
    }

    let state = scene();
    let style = phase_style(state.phase);

    rsx! {
        div {
            class: if state.mode.is_night() { "page night" } else { "page" },
            style: "{style}",
            {children}
        }
    }
}

#[component]
pub fn Orb() -> Element {
    let scene = use_context::<Signal<SceneState>>();
    let frame = scene().orbit;
    let body = frame.map(|f| f.body.as_str()).unwrap_or("sun");
    let transform = frame.map(|f| format!("transform: {};", f.transform())).unwrap_or_default();

    rsx! {
        div { id: "orb", class: "orb", "data-phase": "{body}", style: "{transform}", aria_hidden: "true" }
    }
}

#[component]
pub fn ModeToggle() -> Element {
    let mut scene = use_context::<Signal<SceneState>>();
    let night = scene().mode.is_night();
    let label = if night { t!("mode-night") } else { t!("mode-day") };

    rsx! {
        button {
            id: "modeToggle",
            class: if night { "toggle is-on" } else { "toggle" },
            aria_pressed: "{night}",
            onclick: move |_| scene.with_mut(SceneState::toggle_mode),
            span { class: "toggle-label", "{label}" }
        }
    }
}

#[component]
pub fn ClickHint() -> Element {
    let scene = use_context::<Signal<SceneState>>();
    let hidden = scene().hint_hidden;

    rsx! {
        div {
            id: "clickHint",
            class: if hidden { "click-hint hide" } else { "click-hint" },
            aria_hidden: "{hidden}",
            {t!("hero-click-hint")}
        }
    }
}

#[component]
pub fn ProgressBar() -> Element {
    rsx! {
        div { class: "progress-track", aria_hidden: "true",
            div { id: "progressBar", class: "progress-fill" }
        }
    }
}

/// Backdrop of repeated "SLEEP" with a few glyphs re-rolled each tick.
#[component]
pub fn MatrixBackdrop() -> Element {
    let mut field = use_signal(MatrixField::default);

    use_hook(move || {
        spawn(async move {
            let effects = &config().effects;
            loop {
                timing::sleep_ms(effects.matrix_interval_ms).await;
                let touched = field
                    .with_mut(|field| field.reroll(&mut rand::thread_rng(), MATRIX_FLIPS_PER_TICK));
                spawn(async move {
                    timing::sleep_ms(effects.matrix_flip_ms).await;
                    field.with_mut(|field| field.clear_flips(&touched));
                });
            }
        });
    });

    let glyphs = field.read().glyphs().to_vec();

    rsx! {
        div { class: "matrix", aria_hidden: "true",
            for (idx, glyph) in glyphs.into_iter().enumerate() {
                span { key: "{idx}", class: if glyph.flipping { "flip" } else { "" }, "{glyph.ch}" }
            }
        }
    }
}

/// Hero headline with three letters flipping every few seconds.
#[component]
pub fn HeroTitle() -> Element {
    let mut flipping = use_signal(Vec::<usize>::new);

    use_hook(move || {
        spawn(async move {
            let effects = &config().effects;
            loop {
                timing::sleep_ms(effects.title_interval_ms).await;
                let len = title_cells(&t!("hero-title")).len();
                let picks = pick_title_flips(&mut rand::thread_rng(), len, TITLE_FLIPS_PER_TICK);
                flipping.with_mut(|active| active.extend(picks.iter().copied()));
                spawn(async move {
                    timing::sleep_ms(effects.title_flip_ms).await;
                    flipping.with_mut(|active| {
                        for idx in &picks {
                            if let Some(pos) = active.iter().position(|a| a == idx) {
                                active.remove(pos);
                            }
                        }
                    });
                });
            }
        });
    });

    let cells = title_cells(&t!("hero-title"));
    let active = flipping();

    rsx! {
        h1 { class: "hero__title",
            for (idx, ch) in cells.into_iter().enumerate() {
                span { key: "{idx}", class: if active.contains(&idx) { "flip" } else { "" }, "{ch}" }
            }
        }
    }
}
