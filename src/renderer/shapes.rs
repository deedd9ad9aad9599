//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect` in a flat color
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    vertical_gradient(rect, color, color)
}

/// Quad whose color blends from `top` to `bottom`
pub fn vertical_gradient(rect: &Rect, top: [f32; 4], bottom: [f32; 4]) -> [Vertex; 6] {
    let (l, r) = (rect.left(), rect.right());
    let (t, b) = (rect.top(), rect.bottom());
    [
        Vertex::new(l, t, top),
        Vertex::new(r, t, top),
        Vertex::new(l, b, bottom),
        Vertex::new(l, b, bottom),
        Vertex::new(r, t, top),
        Vertex::new(r, b, bottom),
    ]
}

/// Sub-rectangle expressed as fractions of `rect` (for windows, lights)
pub fn inset(rect: &Rect, fx: f32, fy: f32, fw: f32, fh: f32) -> Rect {
    Rect {
        pos: rect.pos + rect.size * Vec2::new(fx, fy),
        size: rect.size * Vec2::new(fw, fh),
    }
}

/// Thick vertical line segment from `y0` to `y1` centered on `x`
pub fn vertical_line(x: f32, y0: f32, y1: f32, width: f32, color: [f32; 4]) -> [Vertex; 6] {
    quad(&Rect::new(x - width / 2.0, y0, width, y1 - y0), color)
}
