// src/render/recording.rs
//! テスト用の DrawSurface。描画の呼び出しを順番どおりに記録するだけ。📝

use std::cell::RefCell;
use std::rc::Rc;

use super::{DrawSurface, ShapeStyle};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    Background { width: f64, height: f64, color: String },
    Rect { x: f64, y: f64, width: f64, height: f64, style: ShapeStyle },
    Circle { cx: f64, cy: f64, radius: f64, style: ShapeStyle },
}

/// 記録は Rc で共有してるから、RenderSystem に渡した後でもテストから覗けるよ。
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSurface {
    calls: Rc<RefCell<Vec<DrawCall>>>,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_background(&mut self, width: f64, height: f64, color: &str) {
        self.calls.borrow_mut().push(DrawCall::Background {
            width,
            height,
            color: color.to_string(),
        });
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &ShapeStyle) {
        self.calls.borrow_mut().push(DrawCall::Rect { x, y, width, height, style: *style });
    }

    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, style: &ShapeStyle) {
        self.calls.borrow_mut().push(DrawCall::Circle { cx, cy, radius, style: *style });
    }
}
