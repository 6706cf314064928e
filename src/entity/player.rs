//! The player entity.

use crate::entity::collision::resolve_move;
use crate::entity::{Bounded, Wall};
use crate::geometry::Rect;
use crate::input::InputState;

/// The single player-controlled entity.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub rect: Rect,
    /// Movement per tick, in pixels.
    pub speed: f32,
}

impl Player {
    pub fn new(rect: Rect, speed: f32) -> Self {
        Self { rect, speed }
    }

    /// Applies the sampled directional input through wall collision.
    pub fn apply_input(&mut self, input: InputState, walls: &[Wall]) {
        resolve_move(&mut self.rect, input.delta(self.speed), walls);
    }
}

impl Bounded for Player {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}
