//! Axis-aligned rectangle primitive shared by every entity.

use glam::Vec2;

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub pos: Vec2,
    /// Width and height. Both components must be positive.
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0, "degenerate rect {w}x{h}");
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// The center point of the rectangle.
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test: projections on both axes must overlap.
    /// Rectangles that merely share a boundary edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.pos.x + self.size.x <= other.pos.x
            || self.pos.x >= other.pos.x + other.size.x
            || self.pos.y + self.size.y <= other.pos.y
            || self.pos.y >= other.pos.y + other.size.y)
    }
}
