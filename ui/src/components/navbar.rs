use dioxus::prelude::*;

use crate::audio::AudioControls;
use crate::i18n;
use crate::scene::ModeToggle;
use crate::t;

/// In-page anchors, in scroll order.
pub const SECTION_ANCHORS: [(&str, &str); 4] = [
    ("#why", "nav-why"),
    ("#habits", "nav-habits"),
    ("#calculator", "nav-calculator"),
    ("#metrics", "nav-metrics"),
];

fn anchor_label(key: &str) -> String {
    match key {
        "nav-why" => t!("nav-why"),
        "nav-habits" => t!("nav-habits"),
        "nav-calculator" => t!("nav-calculator"),
        _ => t!("nav-metrics"),
    }
}

/// Sticky header: brand, section links, sound and mode toggles, locale picker.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Platforms may provide a global language signal so the whole page re-renders.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let tagline = t!("tagline");

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#hero",
                    span { class: "navbar__brand-mark", "Slumber" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "navbar__links",
                    for (href, key) in SECTION_ANCHORS {
                        a { key: "{href}", class: "navbar__link", href: "{href}", {anchor_label(key)} }
                    }
                }

                div { class: "navbar__controls",
                    AudioControls {}
                    ModeToggle {}
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", {i18n::language_name(&code).to_string()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
