// src/app/init_handler.rs
//! ShapesApp の初期化まわり。キャンバスを探して、ウィンドウの大きさに合わせて、
//! 2D コンテキストを取り出すよ。

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render::SurfaceSize;

/// `canvas_id` のキャンバス (空文字なら最初の `<canvas>`) を取得して、
/// 幅と高さをウィンドウの内側サイズに合わせる。
pub(crate) fn initialize_canvas(
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d, SurfaceSize), JsValue> {
    let window = window().ok_or("Failed to get window")?;
    let document = window.document().ok_or("Failed to get document")?;

    let element = if canvas_id.is_empty() {
        document.query_selector("canvas")?
    } else {
        document.get_element_by_id(canvas_id)
    }
    .ok_or_else(|| JsValue::from_str(&format!("Canvas '{}' not found", canvas_id)))?;

    let canvas: HtmlCanvasElement = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or("Failed to get 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Context is not CanvasRenderingContext2d"))?;

    let size = SurfaceSize::new(f64::from(canvas.width()), f64::from(canvas.height()));
    info!("App::Init: Canvas ready ({} x {})", size.width, size.height);
    Ok((canvas, context, size))
}

/// `performance.now()`。取れなければ 0。
pub(crate) fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
