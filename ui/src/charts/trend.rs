//! Static evening trend chart: light, melatonin and arousal from 19:00 to 23:00.

use super::surface::{ChartSurface, CHART_FONT, TEXT_COLOR};
use super::Padding;

pub const PADDING: Padding = Padding {
    left: 60.0,
    right: 30.0,
    top: 30.0,
    bottom: 40.0,
};

const AXIS_COLOR: &str = "#d5d9e3";
const GRID_COLOR: &str = "#e6e9f1";
const CURVE_WIDTH: f64 = 2.5;

pub const HOURS: [u32; 5] = [19, 20, 21, 22, 23];

pub struct Curve {
    pub label: &'static str,
    pub color: &'static str,
    /// One normalized sample per entry of `HOURS`.
    pub samples: [f64; 5],
}

pub const CURVES: [Curve; 3] = [
    Curve {
        label: "Light",
        color: "#7ac6ff",
        samples: [0.9, 0.6, 0.35, 0.15, 0.05],
    },
    Curve {
        label: "Melatonin",
        color: "#9fb4ff",
        samples: [0.1, 0.2, 0.4, 0.65, 0.9],
    },
    Curve {
        label: "Arousal",
        color: "#5a7cff",
        samples: [0.9, 0.75, 0.55, 0.35, 0.2],
    },
];

fn x_at(hour: u32, width: f64) -> f64 {
    let first = f64::from(HOURS[0]);
    let last = f64::from(HOURS[HOURS.len() - 1]);
    PADDING.left + (f64::from(hour) - first) / (last - first) * (width - PADDING.left - PADDING.right)
}

fn y_at(value: f64, height: f64) -> f64 {
    PADDING.top + (1.0 - value) * (height - PADDING.top - PADDING.bottom)
}

pub fn draw_trend<S: ChartSurface + ?Sized>(surface: &mut S) {
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
    surface.fill_text("Light / Melatonin / Arousal", PADDING.left, PADDING.top - 8.0);
    surface.fill_text("Time (19:00-23:00)", width - PADDING.right - 150.0, base + 24.0);

    surface.set_stroke_color(GRID_COLOR);
    for hour in HOURS {
        let x = x_at(hour, width);
        surface.begin_path();
        surface.move_to(x, PADDING.top);
        surface.line_to(x, base);
        surface.stroke();
        surface.set_fill_color(TEXT_COLOR);
        surface.fill_text(&format!("{hour}:00"), x - 18.0, base + 16.0);
    }

    for curve in &CURVES {
        surface.set_stroke_color(curve.color);
        surface.set_line_width(CURVE_WIDTH);
        surface.begin_path();
        for (idx, (hour, value)) in HOURS.iter().zip(curve.samples).enumerate() {
            let (x, y) = (x_at(*hour, width), y_at(value, height));
            if idx == 0 {
                surface.move_to(x, y);
            } else {
                surface.line_to(x, y);
            }
        }
        surface.stroke();
    }

    let legend_y = PADDING.top + 8.0;
    let legend_x = PADDING.left + 10.0;
    surface.set_font(CHART_FONT);
    for (idx, curve) in CURVES.iter().enumerate() {
        let lx = legend_x + idx as f64 * 100.0;
        surface.set_fill_color(curve.color);
        surface.fill_rect(lx, legend_y, 14.0, 6.0);
        surface.set_fill_color(TEXT_COLOR);
        surface.fill_text(curve.label, lx + 20.0, legend_y + 8.0);
    }
}
