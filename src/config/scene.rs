// src/config/scene.rs
//! 図形アニメーションの見た目と動きに関する定数を定義するよ！
//! 数、速さ、サイズ、色、寿命など。

/// 1回のクリックで生まれる図形の数
pub const NUM_ELEMENTS: usize = 40;
/// 速度の各成分は SPEED_MULTIPLIER * [-1, 1] の一様乱数 (ピクセル/ミリ秒)
pub const SPEED_MULTIPLIER: f64 = 0.5;

pub const SHAPE_SIZE: f64 = 10.0; // 四角の一辺 / 丸の直径
pub const SHAPE_HALF_SIZE: f64 = SHAPE_SIZE / 2.0;
pub const STROKE_WIDTH: f64 = 2.0;

// --- 色 ---
pub const BACKGROUND_COLOR: &str = "#FFF";
pub const BOX_FILL_COLOR: &str = "#e2736e";
pub const BOX_STROKE_COLOR: &str = "#b74843";
pub const CIRCLE_FILL_COLOR: &str = "#ccc";
pub const CIRCLE_STROKE_COLOR: &str = "#888";

// --- 寿命 ---
// 生まれてから 1〜5 秒のどれか (1秒刻み) で消える
pub const MIN_LIFETIME_SECS: u32 = 1;
pub const MAX_LIFETIME_SECS: u32 = 5;

/// 実行時に変えられる設定。JS から数を変えたい時とかテスト用。
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// 1回のスポーンで作る図形の数
    pub spawn_count: usize,
    pub speed_multiplier: f64,
    /// true なら2回目以降のクリックでも図形を追加で生む。
    /// false ならスポーン位置を更新するだけ。
    pub respawn_on_every_press: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spawn_count: NUM_ELEMENTS,
            speed_multiplier: SPEED_MULTIPLIER,
            respawn_on_every_press: true,
        }
    }
}
