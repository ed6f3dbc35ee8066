// src/render/canvas_surface.rs
//! `DrawSurface` implementation backed by a browser 2D canvas context.

use std::f64::consts::PI;

use log::error;
use web_sys::CanvasRenderingContext2d;

use super::{DrawSurface, ShapeStyle};

/// Thin wrapper around `CanvasRenderingContext2d`.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }

    fn fill_and_stroke(&self, style: &ShapeStyle) {
        self.context.set_fill_style_str(style.fill);
        self.context.fill();
        self.context.set_line_width(style.line_width);
        self.context.set_stroke_style_str(style.stroke);
        self.context.stroke();
    }
}

impl DrawSurface for CanvasSurface {
    fn fill_background(&mut self, width: f64, height: f64, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.fill_rect(0.0, 0.0, width, height);
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &ShapeStyle) {
        self.context.begin_path();
        self.context.rect(x, y, width, height);
        self.fill_and_stroke(style);
    }

    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, style: &ShapeStyle) {
        self.context.begin_path();
        // arc() only fails for a negative radius
        if let Err(e) = self.context.arc(cx, cy, radius, 0.0, 2.0 * PI) {
            error!("CanvasSurface: arc() failed at ({}, {}): {:?}", cx, cy, e);
            return;
        }
        self.fill_and_stroke(style);
    }
}
