// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 2D 空間での位置を表すコンポーネントだよ！ (x, y) 座標を持つ。📍
///
/// 座標はキャンバスの左上が原点のピクセル単位。
/// MovementSystem が毎フレーム書き換えるから、図形の中でこれだけは動くデータなんだ。
///
/// 型は `f64`。Canvas の API も `performance.now()` も f64 だから、
/// 途中で f32 に落とすと Δt を掛けた時に誤差が溜まっちゃうんだよね。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Component for Position {}
