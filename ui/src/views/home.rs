use dioxus::prelude::*;

use crate::calculator::{MetricsProgress, SleepCalculator};
use crate::charts::{MetricsChart, TrendChart};
use crate::components::CopyPrompt;
use crate::scene::{ClickHint, HeroTitle, MatrixBackdrop, Orb};
use crate::t;

#[component]
pub fn Home() -> Element {
    // Re-render on locale switches.
    let lang_code = try_use_context::<Signal<String>>();
    let _lang = lang_code.map(|code| code()).unwrap_or_default();

    rsx! {
        main { class: "page-home",
            section { id: "hero", class: "hero",
                MatrixBackdrop {}
                div { class: "hero__layer hero__layer--stars", "data-speed": "0.4" }
                div { class: "hero__layer hero__layer--hills", "data-speed": "0.8" }
                Orb {}
                div { class: "hero__content",
                    HeroTitle {}
                    p { class: "hero__intro", {t!("hero-intro")} }
                }
                ClickHint {}
            }

            section { id: "why", class: "section reveal",
                h2 { {t!("why-title")} }
                p { {t!("why-body")} }
            }

            section { id: "habits", class: "section reveal",
                h2 { {t!("habits-title")} }
                ul { class: "habits",
                    li { {t!("habit-light")} }
                    li { {t!("habit-screens")} }
                    li { {t!("habit-schedule")} }
                    li { {t!("habit-winddown")} }
                }
                figure { class: "chart",
                    figcaption { class: "chart__title", {t!("chart-trend-title")} }
                    TrendChart {}
                    p { class: "chart__caption", {t!("chart-trend-caption")} }
                }
            }

            section { id: "calculator", class: "section reveal",
                h2 { {t!("calc-title")} }
                p { {t!("calc-intro")} }
                SleepCalculator {}
            }

            section { id: "metrics", class: "section reveal",
                h2 { {t!("metrics-title")} }
                p { {t!("metrics-intro")} }
                MetricsChart {}
                MetricsProgress {}
            }

            section { id: "prompt", class: "section reveal",
                h2 { {t!("prompt-title")} }
                p { {t!("prompt-body")} }
                CopyPrompt {}
            }

            footer { class: "footer",
                p { {t!("footer-note")} }
            }
        }
    }
}
