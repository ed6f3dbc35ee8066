// src/systems/render_system.rs

use log::warn;

use crate::components::{Position, Primitive, Renderable, Shape};
use crate::config::scene::{
    BACKGROUND_COLOR, BOX_FILL_COLOR, BOX_STROKE_COLOR, CIRCLE_FILL_COLOR, CIRCLE_STROKE_COLOR,
    SHAPE_HALF_SIZE, SHAPE_SIZE, STROKE_WIDTH,
};
use crate::ecs::system::{FrameTime, System};
use crate::ecs::world::World;
use crate::render::{DrawSurface, ShapeStyle, SurfaceSize};

pub const BOX_STYLE: ShapeStyle = ShapeStyle {
    fill: BOX_FILL_COLOR,
    stroke: BOX_STROKE_COLOR,
    line_width: STROKE_WIDTH,
};

pub const CIRCLE_STYLE: ShapeStyle = ShapeStyle {
    fill: CIRCLE_FILL_COLOR,
    stroke: CIRCLE_STROKE_COLOR,
    line_width: STROKE_WIDTH,
};

/// Shape と Renderable を持ってるエンティティを描くシステムだよ！🎨
///
/// 毎フレーム、まず画面全体を背景色で塗りつぶしてから、
/// ID の小さい順に1個ずつ四角か丸を描く。
pub struct RenderSystem {
    surface: Box<dyn DrawSurface>,
    size: SurfaceSize,
}

impl RenderSystem {
    pub fn new(surface: Box<dyn DrawSurface>, size: SurfaceSize) -> Self {
        Self { surface, size }
    }

    fn draw_primitive(&mut self, primitive: Primitive, position: &Position) {
        match primitive {
            Primitive::Box => self.surface.draw_rect(
                position.x - SHAPE_HALF_SIZE,
                position.y - SHAPE_HALF_SIZE,
                SHAPE_SIZE,
                SHAPE_SIZE,
                &BOX_STYLE,
            ),
            Primitive::Circle => {
                self.surface
                    .draw_circle(position.x, position.y, SHAPE_HALF_SIZE, &CIRCLE_STYLE)
            }
        }
    }
}

impl System for RenderSystem {
    fn run(&mut self, world: &mut World, _frame: FrameTime) {
        self.surface
            .fill_background(self.size.width, self.size.height, BACKGROUND_COLOR);

        for entity in world.entities_with_both::<Shape, Renderable>() {
            let (Some(shape), Some(position)) = (
                world.get_component::<Shape>(entity),
                world.get_component::<Position>(entity),
            ) else {
                warn!("RenderSystem: Skipping entity {} because it has no Position.", entity);
                continue;
            };
            let (primitive, position) = (shape.primitive, *position);
            self.draw_primitive(primitive, &position);
        }
    }
}
