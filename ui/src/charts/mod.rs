//! Chart renderers and their page components.
//!
//! Renderers draw through [`ChartSurface`], so the same code paints the
//! browser canvas and the SVG used outside the browser and in tests.

pub mod bars;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod surface;
pub mod trend;
mod view;

pub use bars::draw_metrics;
pub use surface::{ChartSurface, SvgSurface};
pub use trend::draw_trend;
pub use view::{MetricsChart, TrendChart};

use crate::calculator::MetricsState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

pub fn trend_svg(width: f64, height: f64) -> String {
    let mut surface = SvgSurface::new(width, height);
    draw_trend(&mut surface);
    surface.finish()
}

pub fn metrics_svg(width: f64, height: f64, metrics: &MetricsState) -> String {
    let mut surface = SvgSurface::new(width, height);
    draw_metrics(&mut surface, metrics);
    surface.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_charts_render_their_labels() {
        let trend = trend_svg(640.0, 320.0);
        assert!(trend.contains("Light / Melatonin / Arousal"));
        assert!(trend.contains("21:00"));

        let metrics = metrics_svg(640.0, 260.0, &MetricsState::default());
        assert!(metrics.contains("Wind-down"));
        assert!(metrics.contains(">7.5<"));
        assert!(metrics.contains(r##"fill="#f7b267""##));
    }

    #[test]
    fn metrics_svg_follows_state() {
        let before = metrics_svg(640.0, 260.0, &MetricsState::default());
        let mut state = MetricsState::default();
        state.sleep = 6.0;
        let after = metrics_svg(640.0, 260.0, &state);
        assert_ne!(before, after);
        assert!(after.contains(">6.0<"));
    }
}
