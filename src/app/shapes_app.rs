// src/app/shapes_app.rs

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};
use rand::thread_rng;
use wasm_bindgen::prelude::*;

use crate::app::animation_loop::AnimationLoop;
use crate::app::browser_event_manager::{self, PointerListener};
use crate::app::init_handler;
use crate::app::scene::Scene;
use crate::app::state_getter;
use crate::config::SceneConfig;
use crate::render::CanvasSurface;

// --- アプリケーション全体を JS に見せる入り口 ---
#[wasm_bindgen]
pub struct ShapesApp {
    scene: Rc<RefCell<Scene>>,
    // 今動いてるループ。mousedown のクロージャからも入れるので Rc<RefCell<>>
    animation: Rc<RefCell<Option<AnimationLoop>>>,
    // Drop でリスナーを外すために持っておく
    _pointer_listener: PointerListener,
}

#[wasm_bindgen]
impl ShapesApp {
    /// キャンバスを準備して mousedown を待ち始める。
    /// 最初のクリックで図形が生まれて、アニメーションが始まるよ！
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ShapesApp, JsValue> {
        Self::with_spawn_count(canvas_id, SceneConfig::default().spawn_count)
    }

    /// 1回のスポーン数を指定して作る。
    pub fn with_spawn_count(canvas_id: &str, spawn_count: usize) -> Result<ShapesApp, JsValue> {
        info!("ShapesApp: Initializing...");
        let (canvas, context, size) = init_handler::initialize_canvas(canvas_id)?;

        let config = SceneConfig { spawn_count, ..SceneConfig::default() };
        let scene = Rc::new(RefCell::new(Scene::new(
            Box::new(CanvasSurface::new(context)),
            size,
            config,
        )));
        let animation: Rc<RefCell<Option<AnimationLoop>>> = Rc::new(RefCell::new(None));

        let scene_for_listener = Rc::clone(&scene);
        let animation_for_listener = Rc::clone(&animation);
        let on_pointer_down = move |x: f64, y: f64| {
            let now = init_handler::now_ms();
            let outcome = scene_for_listener
                .borrow_mut()
                .pointer_down(x, y, now, &mut thread_rng());
            if !outcome.loop_started {
                return;
            }
            let token = scene_for_listener.borrow().token();
            match AnimationLoop::start(Rc::clone(&scene_for_listener), token) {
                Ok(handle) => {
                    // 前のループ (stop 済み) が残ってたら片付けてから差し替える
                    if let Some(old) = animation_for_listener.borrow_mut().replace(handle) {
                        old.stop();
                    }
                }
                Err(e) => {
                    error!("ShapesApp: Failed to start animation loop: {:?}", e);
                    scene_for_listener.borrow_mut().stop();
                }
            }
        };
        let pointer_listener =
            browser_event_manager::attach_pointer_down_listener(canvas, on_pointer_down)?;

        info!("ShapesApp: Ready. Click anywhere to spawn shapes.");
        Ok(ShapesApp {
            scene,
            animation,
            _pointer_listener: pointer_listener,
        })
    }

    /// アニメーションを止める。次のクリックでまた始まるよ。
    pub fn stop(&self) {
        self.scene.borrow_mut().stop();
        if let Some(handle) = self.animation.borrow_mut().take() {
            handle.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.scene.borrow().is_running()
    }

    pub fn entity_count(&self) -> usize {
        self.scene.borrow().entity_count()
    }

    /// 今の World の中身を JSON で返す (デバッグ用)。
    pub fn world_state_json(&self) -> Result<String, JsValue> {
        let scene = self.scene.borrow();
        state_getter::get_world_state_json(scene.world()).map_err(|e| {
            let msg = format!("Failed to serialize world state: {}", e);
            error!("{}", msg);
            JsValue::from_str(&msg)
        })
    }
}

// JS 側で free() されたら、ループの自己参照も切っておく (でないと rAF が回り続ける)
impl Drop for ShapesApp {
    fn drop(&mut self) {
        self.stop();
        info!("ShapesApp: Dropped.");
    }
}
