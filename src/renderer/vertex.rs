//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in an interleaved buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex list as raw bytes for upload to a GPU buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.043, 0.102, 0.071, 1.0];
    pub const ROAD: [f32; 4] = [0.165, 0.165, 0.165, 1.0];
    pub const GRASS: [f32; 4] = [0.039, 0.169, 0.094, 1.0];
    pub const LANE_MARKING: [f32; 4] = [1.0, 1.0, 1.0, 0.65];
    pub const OBSTACLE_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.25];
    pub const WINDOW_HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.12];
    pub const PLAYER_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
    pub const PLAYER_TOP: [f32; 4] = [1.0, 0.420, 0.420, 1.0];
    pub const PLAYER_BOTTOM: [f32; 4] = [0.702, 0.239, 0.239, 1.0];
    pub const PLAYER_WRECKED: [f32; 4] = [0.35, 0.35, 0.35, 1.0];
    pub const WINDSHIELD: [f32; 4] = [1.0, 1.0, 1.0, 0.18];
    pub const HEADLIGHT: [f32; 4] = [1.0, 1.0, 0.784, 0.95];
    pub const BRAKE_LIGHT: [f32; 4] = [1.0, 0.1, 0.1, 0.95];
}
