// src/app/scene.rs
//! アプリ全体の状態をひとまとめにした Scene。
//!
//! キャンバスの大きさ、最後のクリック位置、前回フレームの時刻、World、システム、
//! 削除予約…ぜーんぶここに入ってる。ブラウザ側 (ShapesApp) はこれを
//! `Rc<RefCell<Scene>>` で持って、クリックと requestAnimationFrame から呼ぶだけ。

use log::debug;
use rand::Rng;

use crate::app::frame_driver::{CancellationToken, FrameDriver};
use crate::components::Position;
use crate::config::SceneConfig;
use crate::ecs::entity::Entity;
use crate::ecs::system::Dispatcher;
use crate::ecs::timers::RemovalTimers;
use crate::ecs::world::World;
use crate::render::{DrawSurface, SurfaceSize};
use crate::systems::{MovementSystem, RenderSystem, SpawnRequest, SpawnShapesSystem};

/// 起動時に決まる値と、クリックで更新される値。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AppState {
    pub size: SurfaceSize,
    /// 最後に mousedown された位置 (キャンバス座標)
    pub last_pointer: Option<Position>,
}

/// クリック1回分の結果。
#[derive(Debug, Clone, PartialEq)]
pub struct PointerOutcome {
    /// true ならこのクリックでループが始まった。呼んだ側が最初のフレームを予約する。
    pub loop_started: bool,
    pub spawned: Vec<Entity>,
}

pub struct Scene {
    world: World,
    dispatcher: Dispatcher,
    timers: RemovalTimers,
    spawner: SpawnShapesSystem,
    driver: FrameDriver,
    state: AppState,
}

impl Scene {
    /// World にコンポーネントを登録して、Movement → Render の順でシステムを並べる。
    pub fn new(surface: Box<dyn DrawSurface>, size: SurfaceSize, config: SceneConfig) -> Self {
        let mut world = World::new();
        SpawnShapesSystem::register_components(&mut world);

        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register(MovementSystem)
            .register(RenderSystem::new(surface, size));

        Self {
            world,
            dispatcher,
            timers: RemovalTimers::new(),
            spawner: SpawnShapesSystem::new(config),
            driver: FrameDriver::new(),
            state: AppState { size, last_pointer: None },
        }
    }

    /// mousedown の処理。
    ///
    /// クリック位置を覚えて、ループが止まってたら動かし始めて図形を生む。
    /// ループがもう動いてる時は、`respawn_on_every_press` が true なら図形を追加で生むだけ。
    pub fn pointer_down<R: Rng + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        now: f64,
        rng: &mut R,
    ) -> PointerOutcome {
        let origin = Position::new(x, y);
        self.state.last_pointer = Some(origin);

        let loop_started = self.driver.start(now);
        let spawned = if loop_started || self.spawner.config().respawn_on_every_press {
            self.spawn(rng, now)
        } else {
            debug!("Scene: Pointer moved spawn origin to ({:.1}, {:.1})", x, y);
            Vec::new()
        };

        PointerOutcome { loop_started, spawned }
    }

    /// 最後のクリック位置 (なければランダム) に図形を1バッチ生む。
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f64) -> Vec<Entity> {
        let request = SpawnRequest {
            origin: self.state.last_pointer,
            bounds: self.state.size,
            now,
        };
        self.spawner.execute(&mut self.world, &mut self.timers, rng, request)
    }

    /// 1フレーム進める。続けて次のフレームを予約していいなら true。
    ///
    /// 順番は固定:
    /// 1. Δt を計算して、今の時刻を前回時刻として記録 (FrameDriver::advance)
    /// 2. 期限が来た削除予約を全部実行 (システムが動く前に消しておく)
    /// 3. Movement → Render
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(frame) = self.driver.advance(now) else {
            return false;
        };

        for entity in self.timers.drain_due(now) {
            self.world.destroy_entity(entity);
        }
        self.dispatcher.execute(&mut self.world, frame);
        true
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn token(&self) -> CancellationToken {
        self.driver.token()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn entity_count(&self) -> usize {
        self.world.entity_count()
    }

    pub fn pending_removals(&self) -> usize {
        self.timers.len()
    }
}
