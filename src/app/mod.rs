// src/app/mod.rs
//! ShapesApp の中身を役割ごとに分割して置くモジュールだよ！

pub(crate) mod animation_loop;
pub(crate) mod browser_event_manager;
pub mod frame_driver;
pub(crate) mod init_handler;
pub mod scene;
pub mod shapes_app;
pub mod state_getter;
