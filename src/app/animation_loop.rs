// src/app/animation_loop.rs
//! requestAnimationFrame で Scene::tick を毎フレーム呼ぶループ。

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::app::frame_driver::CancellationToken;
use crate::app::init_handler::now_ms;
use crate::app::scene::Scene;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// 動いてるループ1本分のハンドル。
///
/// コールバックは次のフレームを予約するために自分自身を `callback` 経由で参照してる。
/// `stop` で予約を取り消してからコールバックを捨てて、その循環を切るよ。
pub(crate) struct AnimationLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    request_id: Rc<Cell<Option<i32>>>,
    token: CancellationToken,
}

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    window()
        .ok_or("Failed to get window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

impl AnimationLoop {
    /// 最初のフレームを予約してループを始める。
    /// 毎フレーム、トークンがキャンセルされてたら何もしないで終わる (次も予約しない)。
    pub(crate) fn start(
        scene: Rc<RefCell<Scene>>,
        token: CancellationToken,
    ) -> Result<Self, JsValue> {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));

        let self_ref = Rc::clone(&callback);
        let id_ref = Rc::clone(&request_id);
        let loop_token = token.clone();
        // rAF の引数は使わない。押下時刻と同じ performance.now() で測る
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            id_ref.set(None);
            if loop_token.is_cancelled() {
                return;
            }
            if !scene.borrow_mut().tick(now_ms()) {
                return;
            }
            if let Some(cb) = self_ref.borrow().as_ref() {
                match request_animation_frame(cb) {
                    Ok(id) => id_ref.set(Some(id)),
                    Err(e) => error!("Failed to request animation frame: {:?}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first_id = {
            let cb = callback.borrow();
            let cb = cb.as_ref().ok_or("Animation callback missing")?;
            request_animation_frame(cb)?
        };
        request_id.set(Some(first_id));
        info!("AnimationLoop: Started.");

        Ok(Self { callback, request_id, token })
    }

    /// ループを止める。予約済みのフレームを取り消してからコールバックを捨てる。
    /// コールバックの外 (JS からの呼び出し) でだけ使うこと。
    pub(crate) fn stop(self) {
        self.token.cancel();
        if let Some(id) = self.request_id.take() {
            if let Some(w) = window() {
                if let Err(e) = w.cancel_animation_frame(id) {
                    error!("Failed to cancel animation frame {}: {:?}", id, e);
                }
            }
        }
        self.callback.borrow_mut().take();
        info!("AnimationLoop: Stopped.");
    }
}
