// src/systems/mod.rs

pub mod movement_system;
pub mod render_system;
pub mod spawn_system;

pub use movement_system::MovementSystem;
pub use render_system::RenderSystem;
pub use spawn_system::{SpawnRequest, SpawnShapesSystem};
