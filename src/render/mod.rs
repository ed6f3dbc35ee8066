// src/render/mod.rs
//! 描画先 (キャンバス) を抽象化するモジュール。
//!
//! RenderSystem は `DrawSurface` トレイト越しにしか描かないから、
//! ブラウザでは Canvas 2D、テストでは呼び出しを記録するだけの偽物を差し込めるよ。

pub mod canvas_surface;
#[cfg(test)]
pub(crate) mod recording;

pub use canvas_surface::CanvasSurface;

/// 描画先の大きさ (ピクセル)。起動時に1回だけ決まって、あとは変わらない。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 図形1個分の塗りと線のスタイル。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub line_width: f64,
}

/// 描画先が持ってる操作。どれも失敗しない (失敗は実装側でログに出す)。
pub trait DrawSurface {
    /// (0, 0) から width x height の範囲を背景色で塗りつぶす。
    fn fill_background(&mut self, width: f64, height: f64, color: &str);

    /// 左上 (x, y)、幅 width、高さ height の四角を描く。
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &ShapeStyle);

    /// 中心 (cx, cy)、半径 radius の丸を描く。
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, style: &ShapeStyle);
}
