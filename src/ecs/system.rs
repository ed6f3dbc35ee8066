// src/ecs/system.rs

use log::debug;

use crate::ecs::world::World;

/// 1フレーム分の時間情報だよ。単位はどっちもミリ秒！⏱️
///
/// - `delta`: 前のフレームからの経過時間
/// - `time`: 今のタイムスタンプ (`performance.now()` の値)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    pub delta: f64,
    pub time: f64,
}

impl FrameTime {
    pub fn new(delta: f64, time: f64) -> Self {
        Self { delta, time }
    }
}

/// System（システム）トレイトだよ！
///
/// システムは「移動」「描画」みたいな振る舞いをひとまとめにしたもの。
/// Dispatcher から毎フレーム1回ずつ `run` が呼ばれて、
/// World の中の必要なコンポーネントを読んだり書き換えたりするんだ。✏️
pub trait System {
    fn run(&mut self, world: &mut World, frame: FrameTime);

    /// ログに出す名前。
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// 登録されたシステムを、登録した順番どおりに毎フレーム実行する係。
///
/// 順番は大事！Movement を先に登録して Render を後にすると、
/// 同じフレームの中では必ず「全部動かし終わってから描く」になるよ。
#[derive(Default)]
pub struct Dispatcher {
    systems: Vec<Box<dyn System>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// システムを末尾に追加する。
    pub fn register<S: System + 'static>(&mut self, system: S) -> &mut Self {
        debug!("Dispatcher: Registered system {}", system.name());
        self.systems.push(Box::new(system));
        self
    }

    /// 全部のシステムを1回ずつ実行する。
    pub fn execute(&mut self, world: &mut World, frame: FrameTime) {
        for system in self.systems.iter_mut() {
            system.run(world, frame);
        }
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// 登録されてるシステムの名前を実行順で返す。
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }
}
