//! Camera-space to world-space mapping
//!
//! A plain linear rescale: no rotation, no aspect correction, no clamping.
//! Boxes that land outside the world are kept and simply hit nothing.

use glam::Vec2;

use super::geometry::{CameraSpace, Rect, WorldSpace};

/// Rescales hand boxes from a camera resolution to the world resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    scale: Vec2,
}

impl CoordinateMapper {
    /// `source` is the camera frame size in pixels and must be positive in
    /// both dimensions; the camera collaborator guarantees it.
    pub fn new(source: (u32, u32), target: Vec2) -> Self {
        debug_assert!(source.0 > 0 && source.1 > 0, "camera resolution must be positive");
        Self {
            scale: Vec2::new(target.x / source.0 as f32, target.y / source.1 as f32),
        }
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn to_world(&self, hand: &Rect<CameraSpace>) -> Rect<WorldSpace> {
        hand.rescale(self.scale.x, self.scale.y)
    }
}

/// One-shot form of [`CoordinateMapper::to_world`]
pub fn map_to_world(
    hand: &Rect<CameraSpace>,
    source: (u32, u32),
    target: Vec2,
) -> Rect<WorldSpace> {
    CoordinateMapper::new(source, target).to_world(hand)
}
