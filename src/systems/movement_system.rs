// src/systems/movement_system.rs

use crate::components::{Position, Velocity};
use crate::ecs::entity::Entity;
use crate::ecs::system::{FrameTime, System};
use crate::ecs::world::World;

/// Position と Velocity を両方持ってるエンティティを、経過時間ぶん動かすシステムだよ！🏃
///
/// `position += velocity * Δt` をするだけ。Velocity は読むだけで書き換えない。
/// どっちか片方しか持ってないエンティティには一切触らないよ。
#[derive(Debug, Default)]
pub struct MovementSystem;

impl System for MovementSystem {
    fn run(&mut self, world: &mut World, frame: FrameTime) {
        // Velocity を先にコピーで集めておく (World を不変借用)。
        // そのあと Position を可変借用で書き換える。同時に両方借りると怒られちゃうからね。
        let moving: Vec<(Entity, Velocity)> = world
            .entities_with_both::<Position, Velocity>()
            .into_iter()
            .filter_map(|entity| world.get_component::<Velocity>(entity).map(|v| (entity, *v)))
            .collect();

        for (entity, velocity) in moving {
            if let Some(position) = world.get_component_mut::<Position>(entity) {
                position.x += velocity.x * frame.delta;
                position.y += velocity.y * frame.delta;
            }
        }
    }
}
