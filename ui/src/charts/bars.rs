//! Column chart over the shared `MetricsState`.

use crate::calculator::MetricsState;

use super::surface::{ChartSurface, CHART_FONT, TEXT_COLOR};
use super::Padding;

pub const PADDING: Padding = Padding {
    left: 50.0,
    right: 20.0,
    top: 24.0,
    bottom: 36.0,
};

pub const LABELS: [&str; 4] = ["Sleep", "Target", "Screens", "Wind-down"];
pub const COLORS: [&str; 4] = ["#7ac6ff", "#5a7cff", "#f7b267", "#88e0c2"];
pub const MAX_VALUE: f64 = 10.0;
const AXIS_COLOR: &str = "#e6e9f1";
const CORNER_RADIUS: f64 = 6.0;
const BAR_SHARE: f64 = 0.6;

/// Geometry of one column, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub color: &'static str,
    pub value: f64,
    pub center_x: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn layout(width: f64, height: f64, metrics: &MetricsState) -> [Bar; 4] {
    let values = [metrics.sleep, metrics.target, metrics.screens, metrics.winddown];
    let plot_width = width - PADDING.left - PADDING.right;
    let plot_height = height - PADDING.top - PADDING.bottom;
    let slot = plot_width / LABELS.len() as f64;
    let bar_width = slot * BAR_SHARE;

    std::array::from_fn(|idx| {
        let value = values[idx];
        let center_x = PADDING.left + (idx as f64 + 0.5) * slot;
        let bar_height = value / MAX_VALUE * plot_height;
        Bar {
            label: LABELS[idx],
            color: COLORS[idx % COLORS.len()],
            value,
            center_x,
            x: center_x - bar_width / 2.0,
            y: height - PADDING.bottom - bar_height,
            width: bar_width,
            height: bar_height,
        }
    })
}

pub fn draw_metrics<S: ChartSurface + ?Sized>(surface: &mut S, metrics: &MetricsState) {
    let width = surface.width();
    let height = surface.height();
    let base = height - PADDING.bottom;

    surface.set_stroke_color(AXIS_COLOR);
    surface.set_line_width(1.0);
    surface.begin_path();
    surface.move_to(PADDING.left, PADDING.top);
    surface.line_to(PADDING.left, base);
    surface.line_to(width - PADDING.right, base);
    surface.stroke();

    surface.set_fill_color(TEXT_COLOR);
    surface.set_font(CHART_FONT);
    surface.fill_text("Hours / Score", PADDING.left, PADDING.top - 6.0);

    for bar in layout(width, height, metrics) {
        surface.set_fill_color(bar.color);
        surface.begin_path();
        if !surface.round_rect(bar.x, bar.y, bar.width, bar.height, CORNER_RADIUS) {
            surface.rect(bar.x, bar.y, bar.width, bar.height);
        }
        surface.fill();

        surface.set_fill_color(TEXT_COLOR);
        let label_width = surface.measure_text(bar.label);
        surface.fill_text(bar.label, bar.center_x - label_width / 2.0, base + 16.0);
        surface.fill_text(&format!("{:.1}", bar.value), bar.center_x - 10.0, bar.y - 6.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::surface::recording::{Call, RecordingSurface};

    #[test]
    fn default_layout_scales_to_ten_hours() {
        let bars = layout(470.0, 260.0, &MetricsState::default());
        // plot is 400 x 200, four 100px slots
        assert_eq!(bars[0].width, 60.0);
        assert_eq!(bars[0].center_x, 100.0);
        assert_eq!(bars[0].height, 150.0);
        assert_eq!(bars[1].height, 180.0);
        assert_eq!(bars[3].label, "Wind-down");
        assert_eq!(bars[3].y, 224.0 - bars[3].height);
    }

    #[test]
    fn rounded_corners_when_supported() {
        let mut surface = RecordingSurface::new(470.0, 260.0);
        draw_metrics(&mut surface, &MetricsState::default());
        let rounded = surface
            .calls
            .iter()
            .filter(|call| matches!(call, Call::RoundRect(.., r) if *r == 6.0))
            .count();
        assert_eq!(rounded, 4);
        assert!(!surface.calls.iter().any(|call| matches!(call, Call::Rect(..))));
    }

    #[test]
    fn square_fallback_without_round_rect() {
        let mut surface = RecordingSurface::new(470.0, 260.0);
        surface.rounded = false;
        draw_metrics(&mut surface, &MetricsState::default());
        let squares = surface
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Rect(..)))
            .count();
        assert_eq!(squares, 4);
    }

    #[test]
    fn value_labels_use_one_decimal() {
        let mut surface = RecordingSurface::new(470.0, 260.0);
        let metrics = MetricsState {
            sleep: 8.25,
            target: 9.0,
            screens: 0.0,
            winddown: 2.0,
        };
        draw_metrics(&mut surface, &metrics);
        let texts: Vec<&str> = surface.texts().into_iter().map(|(t, _, _)| t).collect();
        for expected in ["Hours / Score", "Sleep", "Target", "Screens", "Wind-down", "9.0", "0.0", "2.0"] {
            assert!(texts.contains(&expected), "missing {expected}");
        }
    }
}
