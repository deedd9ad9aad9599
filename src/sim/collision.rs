//! Axis-aligned rectangle geometry and overlap testing
//!
//! Everything on the road is a box: the player car, obstacles, and the
//! shapes the renderer emits. Positions are top-left corners in field units,
//! with y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Same rectangle moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// True if the rectangle has no area
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

/// Check whether two rectangles overlap on both axes.
///
/// Edges are inclusive: boxes that merely touch count as intersecting.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    !(a.left() > b.right()
        || a.right() < b.left()
        || a.top() > b.bottom()
        || a.bottom() < b.top())
}
