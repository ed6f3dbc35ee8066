// src/components/renderable.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 「このエンティティは描画していいよ」っていう目印コンポーネント。🏷️
/// 中身はなし！付いてるかどうかだけが意味を持つよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Renderable;

impl Component for Renderable {}
