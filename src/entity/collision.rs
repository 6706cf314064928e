//! Axis-separated collision resolution against static walls.
//!
//! Movement is resolved per axis: apply the x delta and revert it entirely if
//! any wall is overlapped, then do the same for y. Resolving x before y lets
//! an entity slide along a wall on one axis while the other is blocked. This
//! is not swept collision; corner clipping at very low frame rates is an
//! accepted approximation.

use glam::Vec2;

use crate::entity::Wall;
use crate::geometry::Rect;

/// Returns true if `rect` overlaps any wall.
pub fn hits_wall(rect: &Rect, walls: &[Wall]) -> bool {
    walls.iter().any(|wall| wall.rect.overlaps(rect))
}

/// Moves `rect` by `delta`, reverting each axis independently if it lands
/// inside a wall. The only collision response is a full revert of that axis.
pub fn resolve_move(rect: &mut Rect, delta: Vec2, walls: &[Wall]) {
    rect.pos.x += delta.x;
    if hits_wall(rect, walls) {
        rect.pos.x -= delta.x;
    }

    rect.pos.y += delta.y;
    if hits_wall(rect, walls) {
        rect.pos.y -= delta.y;
    }
}
