//! `CanvasRenderingContext2d` backend for the browser build.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SurfaceError;

use super::surface::ChartSurface;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    has_round_rect: bool,
}

impl CanvasSurface {
    /// Look up a canvas by element id and size it for drawing.
    pub fn by_id(id: &str, height: f64, fallback_width: f64) -> Result<Self, SurfaceError> {
        let canvas = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .ok_or(SurfaceError::Unavailable("canvas element missing"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::Unavailable("element is not a canvas"))?;
        Self::prepare(&canvas, height, fallback_width)
    }

    /// Match the backing store to CSS width × devicePixelRatio and scale the
    /// transform so renderers keep working in CSS pixels. Resizing the
    /// backing store also clears it.
    pub fn prepare(
        canvas: &HtmlCanvasElement,
        height: f64,
        fallback_width: f64,
    ) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| SurfaceError::Unavailable("get_context failed"))?
            .ok_or(SurfaceError::Unavailable("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Unavailable("context cast failed"))?;

        let dpr = crate::core::platform::device_pixel_ratio();
        let measured = canvas.get_bounding_client_rect().width();
        let width = if measured > 0.0 { measured } else { fallback_width };

        canvas.set_width((width * dpr).round() as u32);
        canvas.set_height((height * dpr).round() as u32);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|_| SurfaceError::Unavailable("set_transform failed"))?;

        let has_round_rect = js_sys::Reflect::has(&ctx, &JsValue::from_str("roundRect")).unwrap_or(false);

        Ok(Self {
            ctx,
            width,
            height,
            has_round_rect,
        })
    }
}

impl ChartSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.rect(x, y, w, h);
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) -> bool {
        if !self.has_round_rect {
            return false;
        }
        // Called through Reflect so older engines without roundRect still load.
        let Ok(method) = js_sys::Reflect::get(&self.ctx, &JsValue::from_str("roundRect")) else {
            return false;
        };
        let Some(method) = method.dyn_ref::<js_sys::Function>() else {
            return false;
        };
        let args = js_sys::Array::of5(
            &JsValue::from_f64(x),
            &JsValue::from_f64(y),
            &JsValue::from_f64(w),
            &JsValue::from_f64(h),
            &JsValue::from_f64(radius),
        );
        method.apply(&self.ctx, &args).is_ok()
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn measure_text(&self, text: &str) -> f64 {
        self.ctx
            .measure_text(text)
            .map(|metrics| metrics.width())
            .unwrap_or(0.0)
    }
}
