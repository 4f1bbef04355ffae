//! Minimal 2D drawing surface shared by the chart renderers.
//!
//! Mirrors the subset of the Canvas 2D API the charts use. Coordinates are in
//! CSS pixels; backends handle device scaling themselves.

use std::fmt::Write as _;

pub const CHART_FONT: &str = "12px 'SF Pro Display', system-ui, sans-serif";
pub const TEXT_COLOR: &str = "#5d6477";

pub trait ChartSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Append a rounded rectangle to the current path. Returns `false` when
    /// the backend cannot draw rounded corners; nothing is appended then.
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) -> bool;
    fn stroke(&mut self);
    fn fill(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn measure_text(&self, text: &str) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
enum PathOp {
    Move(f64, f64),
    Line(f64, f64),
    Rect(f64, f64, f64, f64),
    RoundRect(f64, f64, f64, f64, f64),
}

/// Renders surface calls into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    stroke: String,
    fill: String,
    line_width: f64,
    font_px: f64,
    path: Vec<PathOp>,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stroke: "#000".to_string(),
            fill: "#000".to_string(),
            line_width: 1.0,
            font_px: 12.0,
            path: Vec::new(),
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="'SF Pro Display', system-ui, sans-serif">{body}</svg>"#,
            w = num(self.width),
            h = num(self.height),
            body = self.body,
        )
    }

    fn path_data(&self) -> String {
        let mut d = String::new();
        for op in &self.path {
            let _ = match *op {
                PathOp::Move(x, y) => write!(d, "M{} {} ", num(x), num(y)),
                PathOp::Line(x, y) => write!(d, "L{} {} ", num(x), num(y)),
                PathOp::Rect(x, y, w, h) => write!(
                    d,
                    "M{} {} h{} v{} h{} Z ",
                    num(x),
                    num(y),
                    num(w),
                    num(h),
                    num(-w)
                ),
                PathOp::RoundRect(x, y, w, h, r) => {
                    let r = r.min(w.abs() / 2.0).min(h.abs() / 2.0).max(0.0);
                    write!(
                        d,
                        "M{} {} h{} a{r} {r} 0 0 1 {r} {r} v{} a{r} {r} 0 0 1 {} {r} h{} a{r} {r} 0 0 1 {} {} v{} a{r} {r} 0 0 1 {r} {} Z ",
                        num(x + r),
                        num(y),
                        num(w - 2.0 * r),
                        num(h - 2.0 * r),
                        num(-r),
                        num(-(w - 2.0 * r)),
                        num(-r),
                        num(-r),
                        num(-(h - 2.0 * r)),
                        num(-r),
                        r = num(r),
                    )
                }
            };
        }
        d.trim_end().to_string()
    }
}

impl ChartSurface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.stroke = color.to_string();
    }

    fn set_fill_color(&mut self, color: &str) {
        self.fill = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_font(&mut self, font: &str) {
        self.font_px = font_size_px(font).unwrap_or(self.font_px);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(PathOp::Move(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(PathOp::Line(x, y));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.path.push(PathOp::Rect(x, y, w, h));
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) -> bool {
        self.path.push(PathOp::RoundRect(x, y, w, h, radius));
        true
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            self.path_data(),
            escape(&self.stroke),
            num(self.line_width)
        );
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="{}"/>"#,
            self.path_data(),
            escape(&self.fill)
        );
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(x),
            num(y),
            num(w),
            num(h),
            escape(&self.fill)
        );
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
            num(x),
            num(y),
            num(self.font_px),
            escape(&self.fill),
            escape(text)
        );
    }

    /// Rough advance estimate; there is no font engine behind the SVG output.
    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font_px * 0.55
    }
}

/// Pixel size from a CSS font shorthand such as `12px sans-serif`.
pub fn font_size_px(font: &str) -> Option<f64> {
    font.split_whitespace()
        .find_map(|part| part.strip_suffix("px"))
        .and_then(|px| px.parse().ok())
}

fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Records every call for renderer tests.
#[cfg(test)]
pub(crate) mod recording {
    use super::ChartSurface;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Stroke(String),
        Fill(String),
        LineWidth(f64),
        Font(String),
        BeginPath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Rect(f64, f64, f64, f64),
        RoundRect(f64, f64, f64, f64, f64),
        StrokePath,
        FillPath,
        FillRect(f64, f64, f64, f64),
        Text(String, f64, f64),
    }

    pub struct RecordingSurface {
        pub width: f64,
        pub height: f64,
        pub rounded: bool,
        pub calls: Vec<Call>,
    }

    impl RecordingSurface {
        pub fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                rounded: true,
                calls: Vec::new(),
            }
        }

        pub fn texts(&self) -> Vec<(&str, f64, f64)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Text(text, x, y) => Some((text.as_str(), *x, *y)),
                    _ => None,
                })
                .collect()
        }
    }

    impl ChartSurface for RecordingSurface {
        fn width(&self) -> f64 {
            self.width
        }
        fn height(&self) -> f64 {
            self.height
        }
        fn set_stroke_color(&mut self, color: &str) {
            self.calls.push(Call::Stroke(color.to_string()));
        }
        fn set_fill_color(&mut self, color: &str) {
            self.calls.push(Call::Fill(color.to_string()));
        }
        fn set_line_width(&mut self, width: f64) {
            self.calls.push(Call::LineWidth(width));
        }
        fn set_font(&mut self, font: &str) {
            self.calls.push(Call::Font(font.to_string()));
        }
        fn begin_path(&mut self) {
            self.calls.push(Call::BeginPath);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::LineTo(x, y));
        }
        fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.calls.push(Call::Rect(x, y, w, h));
        }
        fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) -> bool {
            if self.rounded {
                self.calls.push(Call::RoundRect(x, y, w, h, radius));
            }
            self.rounded
        }
        fn stroke(&mut self) {
            self.calls.push(Call::StrokePath);
        }
        fn fill(&mut self) {
            self.calls.push(Call::FillPath);
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.calls.push(Call::FillRect(x, y, w, h));
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64) {
            self.calls.push(Call::Text(text.to_string(), x, y));
        }
        fn measure_text(&self, text: &str) -> f64 {
            text.len() as f64 * 6.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_escapes_text() {
        let mut svg = SvgSurface::new(100.0, 50.0);
        svg.fill_text("<a & b>", 1.0, 2.0);
        let out = svg.finish();
        assert!(out.contains("&lt;a &amp; b&gt;"));
        assert!(out.starts_with("<svg"));
    }

    #[test]
    fn svg_emits_paths_only_when_non_empty() {
        let mut svg = SvgSurface::new(100.0, 50.0);
        svg.begin_path();
        svg.stroke();
        svg.move_to(0.0, 0.0);
        svg.line_to(10.5, 20.0);
        svg.set_stroke_color("#d5d9e3");
        svg.stroke();
        let out = svg.finish();
        assert_eq!(out.matches("<path").count(), 1);
        assert!(out.contains(r#"d="M0 0 L10.5 20""#));
        assert!(out.contains(r##"stroke="#d5d9e3""##));
    }

    #[test]
    fn font_size_is_read_from_shorthand() {
        assert_eq!(font_size_px(CHART_FONT), Some(12.0));
        assert_eq!(font_size_px("bold serif"), None);
    }
}
