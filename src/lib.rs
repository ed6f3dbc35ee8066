// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod render;
pub mod systems;

pub use app::scene::Scene;
pub use app::shapes_app::ShapesApp;
pub use config::SceneConfig;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックをブラウザのコンソールに出して、log クレートの出力先をコンソールにする。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("Logger was already initialized"));
    }
    log::info!("ecs_shapes_wasm loaded. Panic hook and logger set!");
}
