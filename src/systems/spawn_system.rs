// src/systems/spawn_system.rs

use log::info;
use rand::Rng;

use crate::components::{Position, Primitive, Renderable, Shape, Velocity};
use crate::config::scene::{MAX_LIFETIME_SECS, MIN_LIFETIME_SECS};
use crate::config::SceneConfig;
use crate::ecs::entity::Entity;
use crate::ecs::timers::RemovalTimers;
use crate::ecs::world::World;
use crate::render::SurfaceSize;

/// スポーン1回分の入力。
#[derive(Debug, Clone, Copy)]
pub struct SpawnRequest {
    /// 最後にクリックされた位置。None ならキャンバス内のランダムな位置に出す。
    pub origin: Option<Position>,
    pub bounds: SurfaceSize,
    /// 今のタイムスタンプ (ミリ秒)。ここから寿命を数える。
    pub now: f64,
}

/// 図形エンティティをまとめて生むシステムだよ！✨
///
/// 1個ごとに Position / Velocity / Shape / Renderable の4つを一気にくっつけて、
/// 1〜5秒後に消える予約を RemovalTimers に入れる。
/// 乱数は外から渡してもらうから、テストではシード固定で同じ結果を再現できるんだ。🎲
#[derive(Debug, Clone, Default)]
pub struct SpawnShapesSystem {
    config: SceneConfig,
}

impl SpawnShapesSystem {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// 4つのコンポーネント型を World に登録する。スポーン前に1回呼んでね。
    pub fn register_components(world: &mut World) {
        world.register_component::<Position>();
        world.register_component::<Velocity>();
        world.register_component::<Shape>();
        world.register_component::<Renderable>();
    }

    /// `config.spawn_count` 個の図形を作って、作ったエンティティを返す。
    pub fn execute<R: Rng + ?Sized>(
        &self,
        world: &mut World,
        timers: &mut RemovalTimers,
        rng: &mut R,
        request: SpawnRequest,
    ) -> Vec<Entity> {
        let count = self.config.spawn_count;
        let mut spawned = Vec::with_capacity(count);

        for _ in 0..count {
            let lifetime_ms = random_lifetime_ms(rng);
            let entity = world.create_entity();
            world.add_component(entity, self.random_velocity(rng));
            world.add_component(entity, Shape::new(Primitive::random(rng)));
            world.add_component(entity, spawn_position(rng, request.origin, request.bounds));
            world.add_component(entity, Renderable);

            timers.schedule(entity, request.now + lifetime_ms);
            spawned.push(entity);
        }

        info!(
            "SpawnShapesSystem: Spawned {} shapes at {} (t={:.1}ms)",
            spawned.len(),
            match request.origin {
                Some(p) => format!("({:.1}, {:.1})", p.x, p.y),
                None => "random positions".to_string(),
            },
            request.now
        );
        spawned
    }

    /// 各成分が speed_multiplier * [-1, 1] の一様乱数。
    fn random_velocity<R: Rng + ?Sized>(&self, rng: &mut R) -> Velocity {
        let speed = self.config.speed_multiplier;
        Velocity::new(
            speed * rng.gen_range(-1.0..=1.0_f64),
            speed * rng.gen_range(-1.0..=1.0_f64),
        )
    }
}

/// 寿命は 1000, 2000, 3000, 4000, 5000 ミリ秒のどれか。
pub fn random_lifetime_ms<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(MIN_LIFETIME_SECS..=MAX_LIFETIME_SECS) * 1000)
}

/// クリック位置があればそこ、なければキャンバス内のランダムな位置。
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Option<Position>,
    bounds: SurfaceSize,
) -> Position {
    match origin {
        Some(pos) => pos,
        // gen_range だと幅 0 のキャンバスで panic するので掛け算で出す
        None => Position::new(
            rng.gen::<f64>() * bounds.width,
            rng.gen::<f64>() * bounds.height,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spawn_world() -> World {
        let mut world = World::new();
        SpawnShapesSystem::register_components(&mut world);
        world
    }

    fn request(origin: Option<Position>) -> SpawnRequest {
        SpawnRequest {
            origin,
            bounds: SurfaceSize::new(640.0, 480.0),
            now: 10_000.0,
        }
    }

    #[test]
    fn spawns_forty_entities_with_all_four_components() {
        let mut world = spawn_world();
        let mut timers = RemovalTimers::new();
        let mut rng = StdRng::seed_from_u64(1);

        let spawned =
            SpawnShapesSystem::default().execute(&mut world, &mut timers, &mut rng, request(None));

        assert_eq!(spawned.len(), 40);
        assert_eq!(world.entity_count(), 40);
        assert_eq!(timers.len(), 40);
        for &entity in &spawned {
            assert!(world.get_component::<Position>(entity).is_some());
            assert!(world.get_component::<Velocity>(entity).is_some());
            assert!(world.get_component::<Shape>(entity).is_some());
            assert!(world.get_component::<Renderable>(entity).is_some());
        }
        assert_eq!(world.get_all_entities_with_component::<Position>().len(), 40);
        assert_eq!(world.get_all_entities_with_component::<Velocity>().len(), 40);
        assert_eq!(world.get_all_entities_with_component::<Shape>().len(), 40);
        assert_eq!(world.get_all_entities_with_component::<Renderable>().len(), 40);
    }

    #[test]
    fn spawn_count_follows_config() {
        let mut world = spawn_world();
        let mut timers = RemovalTimers::new();
        let mut rng = StdRng::seed_from_u64(2);
        let system =
            SpawnShapesSystem::new(SceneConfig { spawn_count: 3, ..SceneConfig::default() });

        assert_eq!(system.execute(&mut world, &mut timers, &mut rng, request(None)).len(), 3);
        assert_eq!(system.config().spawn_count, 3);
    }

    #[test]
    fn velocities_stay_within_half_unit_per_axis() {
        let mut world = spawn_world();
        let mut timers = RemovalTimers::new();
        let mut rng = StdRng::seed_from_u64(3);

        let spawned =
            SpawnShapesSystem::default().execute(&mut world, &mut timers, &mut rng, request(None));

        for entity in spawned {
            let v = world.get_component::<Velocity>(entity).unwrap();
            assert!((-0.5..=0.5).contains(&v.x), "vx {} out of range", v.x);
            assert!((-0.5..=0.5).contains(&v.y), "vy {} out of range", v.y);
        }
    }

    #[test]
    fn positions_use_pointer_origin_when_present() {
        let mut world = spawn_world();
        let mut timers = RemovalTimers::new();
        let mut rng = StdRng::seed_from_u64(4);
        let origin = Position::new(123.0, 45.0);

        let spawned = SpawnShapesSystem::default().execute(
            &mut world,
            &mut timers,
            &mut rng,
            request(Some(origin)),
        );

        for entity in spawned {
            assert_eq!(world.get_component::<Position>(entity), Some(&origin));
        }
    }

    #[test]
    fn positions_fall_back_to_random_point_inside_bounds() {
        let mut world = spawn_world();
        let mut timers = RemovalTimers::new();
        let mut rng = StdRng::seed_from_u64(5);

        let spawned =
            SpawnShapesSystem::default().execute(&mut world, &mut timers, &mut rng, request(None));

        for entity in spawned {
            let p = world.get_component::<Position>(entity).unwrap();
            assert!((0.0..640.0).contains(&p.x));
            assert!((0.0..480.0).contains(&p.y));
        }
    }

    #[test]
    fn zero_sized_bounds_do_not_panic() {
        let mut rng = StdRng::seed_from_u64(6);
        let p = spawn_position(&mut rng, None, SurfaceSize::default());
        assert_eq!(p, Position::new(0.0, 0.0));
    }

    #[test]
    fn lifetimes_are_whole_seconds_between_one_and_five() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            let ms = random_lifetime_ms(&mut rng);
            assert!([1000.0, 2000.0, 3000.0, 4000.0, 5000.0].contains(&ms), "unexpected {}", ms);
            seen.insert(ms as u32);
        }
        assert_eq!(seen.len(), 5, "every lifetime should come up in 500 draws");
    }

    #[test]
    fn removals_are_scheduled_relative_to_now() {
        let mut world = spawn_world();
        let mut timers = RemovalTimers::new();
        let mut rng = StdRng::seed_from_u64(9);

        SpawnShapesSystem::default().execute(&mut world, &mut timers, &mut rng, request(None));

        let due_min = timers.next_due().unwrap();
        assert!(due_min >= 11_000.0);
        assert!(timers.drain_due(10_999.0).is_empty());
        assert_eq!(timers.drain_due(15_000.0).len(), 40);
    }
}
