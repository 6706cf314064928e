//! The pursuing enemy.

use glam::Vec2;

use crate::constants::PURSUIT_DEADZONE;
use crate::entity::collision::resolve_move;
use crate::entity::{Bounded, Wall};
use crate::geometry::Rect;

/// The chasing enemy. Greedy per-axis pursuit: each tick it steps one full
/// speed increment toward the player's center on every axis outside the
/// deadzone. No pathfinding; it can stall against a wall when the direct
/// axis-aligned route is blocked, which is accepted behavior.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub rect: Rect,
    /// Movement per tick, in pixels.
    pub speed: f32,
}

impl Enemy {
    pub fn new(rect: Rect, speed: f32) -> Self {
        Self { rect, speed }
    }

    /// The desired step toward `target` before collision resolution.
    pub fn chase_delta(&self, target: &Rect) -> Vec2 {
        let own = self.rect.center();
        let goal = target.center();
        let mut delta = Vec2::ZERO;

        if (goal.x - own.x).abs() > PURSUIT_DEADZONE {
            delta.x = if goal.x > own.x { self.speed } else { -self.speed };
        }
        if (goal.y - own.y).abs() > PURSUIT_DEADZONE {
            delta.y = if goal.y > own.y { self.speed } else { -self.speed };
        }
        delta
    }

    /// Advances one tick of pursuit. Returns true if the enemy now overlaps
    /// the player: a capture.
    pub fn pursue(&mut self, target: &Rect, walls: &[Wall]) -> bool {
        let delta = self.chase_delta(target);
        resolve_move(&mut self.rect, delta, walls);
        self.rect.overlaps(target)
    }
}

impl Bounded for Enemy {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}
