// src/components/velocity.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 速度コンポーネント。単位は「1ミリ秒あたりに進むピクセル数」だよ。🏃
///
/// 作った後は誰も書き換えない。図形はずーっと同じ向き・同じ速さで進む。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Component for Velocity {}
