//! Axis-aligned bounding boxes
//!
//! A box carries its coordinate space in the type, so a camera-space hand box
//! cannot be tested against world-space objects without going through the
//! mapper first.

use std::marker::PhantomData;

use glam::Vec2;

/// Pixel space of the raw (mirrored) camera frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraSpace;

/// Logical game/screen space used for rendering and collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldSpace;

/// Axis-aligned rectangle `(x, y, width, height)`, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<S> {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    space: PhantomData<S>,
}

impl<S> Rect<S> {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            space: PhantomData,
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Multiply x/width by `sx` and y/height by `sy`, producing a box in another space
    pub(crate) fn rescale<T>(&self, sx: f32, sy: f32) -> Rect<T> {
        Rect::new(self.x * sx, self.y * sy, self.width * sx, self.height * sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type WorldRect = Rect<WorldSpace>;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let hand = WorldRect::new(100.0, 100.0, 50.0, 50.0);
        let fruit = WorldRect::new(110.0, 110.0, 50.0, 50.0);
        assert!(hand.intersects(&fruit));
        assert!(fruit.intersects(&hand));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = WorldRect::new(0.0, 0.0, 50.0, 50.0);
        let b = WorldRect::new(50.0, 0.0, 50.0, 50.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = WorldRect::new(0.0, 0.0, 500.0, 500.0);
        let inner = WorldRect::new(200.0, 200.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_from_center() {
        let r = WorldRect::from_center(Vec2::new(100.0, 200.0), Vec2::splat(50.0));
        assert_eq!(r, WorldRect::new(75.0, 175.0, 50.0, 50.0));
        assert_eq!(r.center(), Vec2::new(100.0, 200.0));
    }
}
