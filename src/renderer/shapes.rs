//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::{Rect, WorldSpace};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Two triangles covering an axis-aligned quad
fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled rectangle
pub fn filled_rect(rect: &Rect<WorldSpace>, color: [f32; 4]) -> Vec<Vertex> {
    quad(
        Vec2::new(rect.x, rect.y),
        Vec2::new(rect.right(), rect.bottom()),
        color,
    )
    .to_vec()
}

/// Generate vertices for a rectangle outline of the given thickness (drawn inward)
pub fn rect_outline(rect: &Rect<WorldSpace>, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());

    let mut vertices = Vec::with_capacity(24);
    // top, bottom, left, right
    vertices.extend(quad(Vec2::new(x0, y0), Vec2::new(x1, y0 + t), color));
    vertices.extend(quad(Vec2::new(x0, y1 - t), Vec2::new(x1, y1), color));
    vertices.extend(quad(Vec2::new(x0, y0 + t), Vec2::new(x0 + t, y1 - t), color));
    vertices.extend(quad(Vec2::new(x1 - t, y0 + t), Vec2::new(x1, y1 - t), color));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Vec2::new(100.0, 50.0);
        let verts = circle(center, 25.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [100.0, 50.0]);
            let edge = Vec2::from(tri[1].position);
            assert!((edge.distance(center) - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_outline_stays_inside_rect() {
        let rect = Rect::new(10.0, 20.0, 50.0, 30.0);
        let verts = rect_outline(&rect, 2.0, [0.0; 4]);
        assert_eq!(verts.len(), 24);
        for v in &verts {
            assert!(v.position[0] >= 10.0 && v.position[0] <= 60.0);
            assert!(v.position[1] >= 20.0 && v.position[1] <= 50.0);
        }
    }

    #[test]
    fn test_filled_rect() {
        let verts = filled_rect(&Rect::new(0.0, 0.0, 4.0, 2.0), [0.5; 4]);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[5].position, [4.0, 2.0]);
    }
}
