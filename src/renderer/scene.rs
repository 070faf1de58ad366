//! Per-frame draw list
//!
//! Turns the live objects into triangles or sprite placements. A display
//! backend uploads `vertex_bytes` as-is and blits the sprites on top.

use glam::Vec2;

use super::assets::{RenderMode, SpriteId};
use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{FallingObject, Rect, WorldSpace};

const CIRCLE_SEGMENTS: u32 = 24;
const HAND_OUTLINE_THICKNESS: f32 = 3.0;

/// A sprite drawn into a world-space box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    pub sprite: SpriteId,
    pub rect: Rect<WorldSpace>,
}

/// Everything to draw for one tick, back to front
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub vertices: Vec<Vertex>,
    pub sprites: Vec<SpriteInstance>,
}

impl Scene {
    pub fn build(
        objects: &[FallingObject],
        hand: Option<&Rect<WorldSpace>>,
        world: Vec2,
        mode: &RenderMode,
    ) -> Self {
        let mut scene = Scene::default();
        let background = Rect::new(0.0, 0.0, world.x, world.y);
        scene
            .vertices
            .extend(shapes::filled_rect(&background, colors::BACKGROUND));

        for object in objects.iter().filter(|o| !o.sliced) {
            match mode {
                RenderMode::AssetBacked(_) => scene.sprites.push(SpriteInstance {
                    sprite: SpriteId::for_object(object.kind, object.appearance.sprite),
                    rect: object.bounds(),
                }),
                RenderMode::PrimitiveShape => scene.vertices.extend(shapes::circle(
                    object.pos,
                    object.size / 2.0,
                    object.appearance.tint,
                    CIRCLE_SEGMENTS,
                )),
            }
        }

        if let Some(hand) = hand {
            scene.vertices.extend(shapes::rect_outline(
                hand,
                HAND_OUTLINE_THICKNESS,
                colors::HAND_OUTLINE,
            ));
        }

        scene
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ObjectKind;

    const WORLD: Vec2 = Vec2::new(1024.0, 768.0);

    fn objects() -> Vec<FallingObject> {
        vec![
            FallingObject::new(1, ObjectKind::Fruit, Vec2::new(100.0, 100.0), 8.0, 50.0),
            FallingObject::new(2, ObjectKind::Bomb, Vec2::new(300.0, 400.0), 8.0, 50.0),
        ]
    }

    #[test]
    fn test_primitive_mode_draws_circles() {
        let scene = Scene::build(&objects(), None, WORLD, &RenderMode::PrimitiveShape);
        // background quad + two circles
        assert_eq!(scene.triangle_count(), 2 + 2 * CIRCLE_SEGMENTS as usize);
        assert!(scene.sprites.is_empty());
        assert_eq!(scene.vertex_bytes().len(), scene.vertices.len() * Vertex::STRIDE);
        // bomb drawn black
        assert!(scene.vertices.iter().any(|v| v.color == colors::BOMB));
    }

    #[test]
    fn test_hand_outline_added() {
        let hand = Rect::new(10.0, 10.0, 40.0, 40.0);
        let without = Scene::build(&[], None, WORLD, &RenderMode::PrimitiveShape);
        let with = Scene::build(&[], Some(&hand), WORLD, &RenderMode::PrimitiveShape);
        assert_eq!(with.vertices.len() - without.vertices.len(), 24);
    }

    #[test]
    fn test_sliced_objects_not_drawn() {
        let mut objs = objects();
        objs[0].sliced = true;
        let scene = Scene::build(&objs, None, WORLD, &RenderMode::PrimitiveShape);
        assert_eq!(scene.triangle_count(), 2 + CIRCLE_SEGMENTS as usize);
    }
}
