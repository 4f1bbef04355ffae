use dioxus::prelude::*;

use crate::calculator::CalculatorState;
use crate::core::config::config;

pub const TREND_CANVAS_ID: &str = "sleepChart";
pub const METRICS_CANVAS_ID: &str = "metricsChart";

#[cfg(target_arch = "wasm32")]
mod browser {
    use dioxus::prelude::*;

    use crate::calculator::CalculatorState;
    use crate::charts::canvas::CanvasSurface;
    use crate::charts::{draw_metrics, draw_trend};
    use crate::core::config::config;

    pub fn paint_trend() {
        let charts = &config().charts;
        match CanvasSurface::by_id(super::TREND_CANVAS_ID, charts.trend_height, charts.fallback_width) {
            Ok(mut surface) => draw_trend(&mut surface),
            Err(err) => tracing::debug!(%err, "trend chart not drawn"),
        }
    }

    pub fn paint_metrics(state: &CalculatorState) {
        let charts = &config().charts;
        match CanvasSurface::by_id(
            super::METRICS_CANVAS_ID,
            charts.metrics_height,
            charts.fallback_width,
        ) {
            Ok(mut surface) => draw_metrics(&mut surface, &state.metrics),
            Err(err) => tracing::debug!(%err, "metrics chart not drawn"),
        }
    }

    /// Repaint both charts whenever the window is resized.
    pub fn install_resize(state: Signal<CalculatorState>) {
        crate::core::dom::listen_window("resize", true, move |_| {
            paint_trend();
            paint_metrics(&state.peek());
        });
    }
}

#[component]
pub fn TrendChart() -> Element {
    #[cfg(target_arch = "wasm32")]
    {
        let state = use_context::<Signal<CalculatorState>>();
        use_hook(move || browser::install_resize(state));
        use_effect(browser::paint_trend);

        rsx! {
            canvas { id: TREND_CANVAS_ID, class: "chart chart--trend", height: "{config().charts.trend_height}" }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let charts = &config().charts;
        let svg = super::trend_svg(charts.fallback_width, charts.trend_height);
        rsx! {
            div { id: TREND_CANVAS_ID, class: "chart chart--trend", dangerous_inner_html: "{svg}" }
        }
    }
}

/// Bar chart over the shared metrics; repaints after each accepted submission.
#[component]
pub fn MetricsChart() -> Element {
    let state = use_context::<Signal<CalculatorState>>();

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || browser::paint_metrics(&state.read()));

        rsx! {
            canvas { id: METRICS_CANVAS_ID, class: "chart chart--metrics", height: "{config().charts.metrics_height}" }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let charts = &config().charts;
        let svg = super::metrics_svg(charts.fallback_width, charts.metrics_height, &state.read().metrics);
        rsx! {
            div { id: METRICS_CANVAS_ID, class: "chart chart--metrics", dangerous_inner_html: "{svg}" }
        }
    }
}
