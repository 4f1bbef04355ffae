use dioxus::prelude::*;

use crate::core::format::{format_hours, format_width};
use crate::t;

use super::engine::{CalculatorState, SleepForm};

/// Calculator form plus its results panel. Reads and writes the page-wide
/// `Signal<CalculatorState>` so the metrics section redraws on submit.
#[component]
pub fn SleepCalculator() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();

    let mut bedtime = use_signal(|| "23:00".to_string());
    let mut wake = use_signal(|| "07:00".to_string());
    let mut screen_hours = use_signal(|| "2".to_string());
    let mut screen_cutoff = use_signal(|| "22:30".to_string());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = SleepForm {
            bedtime: bedtime(),
            wake: wake(),
            screen_hours: screen_hours(),
            screen_cutoff: screen_cutoff(),
        };
        // Errors are already stored on the state for inline display.
        let _ = state.with_mut(|calc| calc.submit(&form).map(|_| ()));
    };

    let snapshot = state();

    rsx! {
        div { class: "calculator",
            form { class: "calculator__form", onsubmit: on_submit,
                label { class: "calculator__field",
                    span { {t!("calc-bedtime")} }
                    input {
                        r#type: "time",
                        name: "bedtime",
                        value: "{bedtime}",
                        oninput: move |evt| bedtime.set(evt.value()),
                    }
                }
                label { class: "calculator__field",
                    span { {t!("calc-waketime")} }
                    input {
                        r#type: "time",
                        name: "waketime",
                        value: "{wake}",
                        oninput: move |evt| wake.set(evt.value()),
                    }
                }
                label { class: "calculator__field",
                    span { {t!("calc-screen-hours")} }
                    input {
                        r#type: "number",
                        name: "screen-hours",
                        min: "0",
                        max: "12",
                        step: "0.25",
                        value: "{screen_hours}",
                        oninput: move |evt| screen_hours.set(evt.value()),
                    }
                }
                label { class: "calculator__field",
                    span { {t!("calc-screen-cutoff")} }
                    input {
                        r#type: "time",
                        name: "screen-cutoff",
                        value: "{screen_cutoff}",
                        oninput: move |evt| screen_cutoff.set(evt.value()),
                    }
                }
                button { class: "button button--primary", r#type: "submit",
                    {t!("calc-submit")}
                }
            }

            if let Some(message) = snapshot.error.as_ref() {
                p { class: "calculator__error", role: "alert", "{message}" }
            }

            CalculatorResults { state: snapshot.clone() }
        }
    }
}

#[component]
fn CalculatorResults(state: CalculatorState) -> Element {
    let Some(result) = state.last.as_ref() else {
        return rsx! {
            div { class: "calculator__results calculator__results--empty",
                p { class: "calculator__placeholder", {t!("calc-results-placeholder")} }
            }
        };
    };

    let sleep_width = format_width(result.sleep_bar_pct);
    let screen_width = format_width(result.screen_bar_pct);
    let rating_class = result.rating.css_class();
    let rating_label = result.rating.label();
    let rating_copy = result.rating_copy.clone();
    let summary = result.summary.clone();
    let advice = result.advice.message();
    let sleep_meta = result.sleep_meta.clone();
    let screen_meta = result.screen_meta.clone();

    rsx! {
        div { class: "calculator__results", aria_live: "polite",
            div { class: "calculator__rating calculator__rating--{rating_class}",
                span { class: "calculator__badge", "{rating_label}" }
                p { class: "calculator__copy", "{rating_copy}" }
            }
            p { class: "calculator__summary", "{summary}" }
            p { class: "calculator__advice", "{advice}" }

            div { class: "calculator__bars",
                div { class: "calculator__bar-row",
                    span { class: "calculator__bar-label", {t!("calc-sleep-bar")} }
                    div { class: "bar",
                        div { class: "bar__fill bar__fill--sleep", style: "width: {sleep_width}" }
                    }
                    span { class: "calculator__bar-meta", "{sleep_meta}" }
                }
                div { class: "calculator__bar-row",
                    span { class: "calculator__bar-label", {t!("calc-screen-bar")} }
                    div { class: "bar",
                        div { class: "bar__fill bar__fill--screen", style: "width: {screen_width}" }
                    }
                    span { class: "calculator__bar-meta", "{screen_meta}" }
                }
            }
        }
    }
}

/// Progress rows under the metrics chart.
#[component]
pub fn MetricsProgress() -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    let metrics = state().metrics;
    let fills = metrics.bar_fills();

    let rows = [
        (
            t!("metrics-sleep-row"),
            format_width(fills.sleep_pct),
            format_hours(metrics.sleep),
            "sleep",
        ),
        (
            t!("metrics-winddown-row"),
            format_width(fills.winddown_pct),
            format_hours(metrics.winddown),
            "winddown",
        ),
        (
            t!("metrics-consistency-row"),
            format_width(fills.consistency_pct),
            format!("{:.0}%", fills.consistency_pct),
            "consistency",
        ),
    ];

    rsx! {
        ul { class: "metrics__progress",
            for (label, width, meta, modifier) in rows {
                li { class: "metrics__row",
                    span { class: "metrics__label", "{label}" }
                    div { class: "bar",
                        div {
                            class: "bar__fill bar__fill--{modifier}",
                            style: "width: {width}",
                        }
                    }
                    span { class: "metrics__meta", "{meta}" }
                }
            }
        }
    }
}
