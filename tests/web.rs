//! Browser tests: `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use ecs_shapes_wasm::app::state_getter::WorldSnapshot;
use ecs_shapes_wasm::render::{CanvasSurface, DrawSurface, ShapeStyle};
use ecs_shapes_wasm::ShapesApp;
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn test_context(width: u32, height: u32) -> CanvasRenderingContext2d {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn pixel(context: &CanvasRenderingContext2d, x: f64, y: f64) -> Vec<u8> {
    context.get_image_data(x, y, 1.0, 1.0).unwrap().data().to_vec()
}

#[wasm_bindgen_test]
fn background_fill_covers_the_surface() {
    let context = test_context(20, 20);
    let mut surface = CanvasSurface::new(context.clone());

    surface.fill_background(20.0, 20.0, "#FFF");

    assert_eq!(pixel(&context, 19.0, 19.0), vec![255, 255, 255, 255]);
}

#[wasm_bindgen_test]
fn rect_and_circle_paint_their_fill_colour() {
    let context = test_context(40, 40);
    let mut surface = CanvasSurface::new(context.clone());
    let style = ShapeStyle { fill: "#ff0000", stroke: "#ff0000", line_width: 2.0 };

    surface.fill_background(40.0, 40.0, "#FFF");
    surface.draw_rect(5.0, 5.0, 10.0, 10.0, &style);
    surface.draw_circle(30.0, 30.0, 5.0, &style);

    assert_eq!(pixel(&context, 10.0, 10.0), vec![255, 0, 0, 255]);
    assert_eq!(pixel(&context, 30.0, 30.0), vec![255, 0, 0, 255]);
    assert_eq!(pixel(&context, 20.0, 20.0), vec![255, 255, 255, 255]);
}

/// ページに `id` 付きのキャンバスを足す。ShapesApp は id で探すから。
fn mount_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn context_of(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn press_at(client_x: i32, client_y: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(client_x);
    init.set_client_y(client_y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    let document = web_sys::window().unwrap().document().unwrap();
    document.dispatch_event(&event).unwrap();
}

async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mousedown_spawns_shapes_at_the_canvas_local_point() {
    let canvas = mount_canvas("press-canvas");
    let app = ShapesApp::with_spawn_count("press-canvas", 5).unwrap();
    assert!(!app.is_running());

    press_at(30, 40);

    assert!(app.is_running());
    assert_eq!(app.entity_count(), 5);
    let json = app.world_state_json().unwrap();
    let snapshot: WorldSnapshot = serde_json::from_str(&json).unwrap();
    let expected_x = f64::from(30 - canvas.offset_left());
    let expected_y = f64::from(40 - canvas.offset_top());
    assert_eq!(snapshot.shapes.len(), 5);
    for shape in &snapshot.shapes {
        assert_eq!((shape.position.x, shape.position.y), (expected_x, expected_y));
    }

    drop(app);
    canvas.remove();
}

#[wasm_bindgen_test]
async fn dropped_app_stops_repainting_the_canvas() {
    let canvas = mount_canvas("drop-canvas");
    let app = ShapesApp::new("drop-canvas").unwrap();
    press_at(10, 10);
    assert!(app.is_running());
    next_frame().await;

    drop(app);
    let context = context_of(&canvas);
    context.set_fill_style_str("#ff0000");
    context.fill_rect(0.0, 0.0, 20.0, 20.0);
    for _ in 0..3 {
        next_frame().await;
    }

    assert_eq!(pixel(&context, 0.0, 0.0), vec![255, 0, 0, 255]);
    canvas.remove();
}
