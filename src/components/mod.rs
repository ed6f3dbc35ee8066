// src/components/mod.rs

// 図形エンティティにくっつけるコンポーネントたち！
pub mod position;
pub mod renderable;
pub mod shape;
pub mod velocity;

pub use position::Position;
pub use renderable::Renderable;
pub use shape::{Primitive, Shape};
pub use velocity::Velocity;
