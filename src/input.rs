//! Continuous directional input state, sampled once per tick.

use bitflags::bitflags;
use glam::Vec2;
use sdl2::keyboard::Keycode;

bitflags! {
    /// The four held-direction flags, maintained by the event pump and read
    /// by the update pass. Opposite directions cancel out.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputState: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
    }
}

impl InputState {
    /// The per-tick movement delta for an entity moving at `speed`.
    pub fn delta(self, speed: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.contains(InputState::LEFT) {
            delta.x -= speed;
        }
        if self.contains(InputState::RIGHT) {
            delta.x += speed;
        }
        if self.contains(InputState::UP) {
            delta.y -= speed;
        }
        if self.contains(InputState::DOWN) {
            delta.y += speed;
        }
        delta
    }

    /// Maps a keycode to its direction flag, if it is a movement key.
    /// Arrow keys and WASD are both accepted.
    pub fn flag_for(keycode: Keycode) -> Option<InputState> {
        match keycode {
            Keycode::Left | Keycode::A => Some(InputState::LEFT),
            Keycode::Right | Keycode::D => Some(InputState::RIGHT),
            Keycode::Up | Keycode::W => Some(InputState::UP),
            Keycode::Down | Keycode::S => Some(InputState::DOWN),
            _ => None,
        }
    }

    /// Applies a key transition from the event pump.
    pub fn apply_key(&mut self, keycode: Keycode, pressed: bool) {
        if let Some(flag) = Self::flag_for(keycode) {
            self.set(flag, pressed);
        }
    }
}
