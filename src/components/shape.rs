// src/components/shape.rs

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 描ける図形の種類。四角と丸の2種類だけ！⬜⚪
///
/// 文字列で "box" とか "circle" とか持つと、タイプミスした時に
/// こっそり四角として描かれちゃったりするから、閉じた enum にしてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    #[default]
    Box,
    Circle,
}

impl Primitive {
    pub const ALL: [Primitive; 2] = [Primitive::Box, Primitive::Circle];

    /// 四角と丸を 50% ずつの確率で選ぶ。🎲
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Primitive::Circle
        } else {
            Primitive::Box
        }
    }
}

/// 形のコンポーネント。作った後は変わらないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shape {
    pub primitive: Primitive,
}

impl Shape {
    pub fn new(primitive: Primitive) -> Self {
        Self { primitive }
    }
}

impl Component for Shape {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_shape_is_box() {
        assert_eq!(Shape::default().primitive, Primitive::Box);
    }

    #[test]
    fn random_primitive_produces_both_variants() {
        let mut rng = StdRng::seed_from_u64(7);
        let picks: Vec<Primitive> = (0..200).map(|_| Primitive::random(&mut rng)).collect();

        for primitive in Primitive::ALL {
            assert!(picks.contains(&primitive), "{:?} should show up in 200 picks", primitive);
        }
    }

    #[test]
    fn primitive_serializes_lowercase() {
        let json = serde_json::to_string(&Shape::new(Primitive::Circle)).unwrap();
        assert_eq!(json, r#"{"primitive":"circle"}"#);
        let back: Shape = serde_json::from_str(r#"{"primitive":"box"}"#).unwrap();
        assert_eq!(back.primitive, Primitive::Box);
    }
}
