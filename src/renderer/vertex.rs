//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Byte stride of one vertex
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BOMB: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const HAND_OUTLINE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const SCORE_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TIMER_TEXT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const LEVEL_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER_TEXT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
