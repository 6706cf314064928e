//! Game state and the per-tick transition rules.

pub mod events;
pub mod state;

pub use events::GameEvent;
pub use state::{EndReason, EndSummary, GameState, Phase};
