// src/app/browser_event_manager.rs
//! Handles attaching and detaching the document-level mousedown listener.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, EventTarget, HtmlCanvasElement, MouseEvent};

use log::{error, info};

/// A registered mousedown listener. Keeps the closure alive and detaches it on drop.
pub(crate) struct PointerListener {
    target: EventTarget,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        let callback = self.closure.as_ref().unchecked_ref();
        if let Err(e) = self.target.remove_event_listener_with_callback("mousedown", callback) {
            error!("Failed to detach mousedown listener: {:?}", e);
        } else {
            info!("Detached mousedown listener.");
        }
    }
}

/// Converts a mouse event to canvas-local coordinates (page position minus the canvas offset).
pub(crate) fn canvas_local_position(
    canvas: &HtmlCanvasElement,
    event: &MouseEvent,
) -> (f64, f64) {
    let x = f64::from(event.page_x() - canvas.offset_left());
    let y = f64::from(event.page_y() - canvas.offset_top());
    (x, y)
}

/// Attaches a mousedown listener to the document.
/// `on_pointer_down` receives the position in canvas-local space.
pub(crate) fn attach_pointer_down_listener<F>(
    canvas: HtmlCanvasElement,
    mut on_pointer_down: F,
) -> Result<PointerListener, JsValue>
where
    F: FnMut(f64, f64) + 'static,
{
    let document = window()
        .ok_or("Failed to get window")?
        .document()
        .ok_or("Failed to get document")?;

    let closure = Closure::wrap(Box::new(move |event: Event| {
        match event.dyn_into::<MouseEvent>() {
            Ok(mouse_event) => {
                let (x, y) = canvas_local_position(&canvas, &mouse_event);
                on_pointer_down(x, y);
            }
            Err(_) => error!("Failed to cast event to MouseEvent in mousedown listener"),
        }
    }) as Box<dyn FnMut(Event)>);

    let target: EventTarget = document.into();
    target.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
    info!("Attached mousedown listener.");

    Ok(PointerListener { target, closure })
}
