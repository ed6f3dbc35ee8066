// src/ecs/entity.rs

// serde: スナップショットを JSON にする時に Entity の ID もそのまま出したいから使うよ！
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity（エンティティ）は、画面の上を飛び回る図形1個1個を表すただの識別子（ID）だよ！
///
/// ID 自体には意味がなくて、Position や Velocity みたいなコンポーネントと
/// 組み合わせることで「ID 3 は (10, 20) にいる赤い四角」みたいに意味を持つんだ。✨
///
/// ID は World が 0 から順番に払い出して、一度使った番号は再利用しないよ。
/// だから、消えたエンティティの ID を後から持ち出しても、別の図形と取り違えることはない！
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub struct Entity(pub usize);

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
