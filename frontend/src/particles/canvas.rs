use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::renderer::{Rgba, Surface};

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.begin_path();
        // arc only fails for a negative radius
        if self.arc(x, y, radius, 0.0, PI * 2.0).is_err() {
            return;
        }
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, width: f64) {
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.set_line_width(width);
        self.stroke();
    }
}
