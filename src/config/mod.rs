// src/config/mod.rs

pub mod scene;

pub use scene::SceneConfig;
