//! Builds a serializable snapshot of the World and converts it to JSON.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::components::{Position, Renderable, Shape, Velocity};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

/// One shape entity as seen by JS / debug tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    pub entity: Entity,
    pub position: Position,
    pub velocity: Velocity,
    pub shape: Shape,
    pub renderable: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub shapes: Vec<ShapeSnapshot>,
}

/// World の中の図形を全部スナップショットにする。
/// Position / Velocity / Shape のどれかが欠けてるエンティティは飛ばすよ。
pub fn snapshot_world(world: &World) -> WorldSnapshot {
    let mut shapes = Vec::new();
    for entity in world.get_all_entities_with_component::<Shape>() {
        let (Some(position), Some(velocity), Some(shape)) = (
            world.get_component::<Position>(entity),
            world.get_component::<Velocity>(entity),
            world.get_component::<Shape>(entity),
        ) else {
            warn!("Entity {} is missing Position or Velocity. Skipping.", entity);
            continue;
        };
        shapes.push(ShapeSnapshot {
            entity,
            position: *position,
            velocity: *velocity,
            shape: *shape,
            renderable: world.get_component::<Renderable>(entity).is_some(),
        });
    }
    WorldSnapshot { shapes }
}

/// ワールドの状態を JSON 文字列にして返す。
pub fn get_world_state_json(world: &World) -> Result<String, serde_json::Error> {
    let snapshot = snapshot_world(world);
    info!("Serializing world state with {} shapes.", snapshot.shapes.len());
    serde_json::to_string(&snapshot)
}
