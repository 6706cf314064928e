//! Sprite asset loading and state tracking.

pub mod sprite;

pub use sprite::{SpriteState, SpriteStore};
