//! The game state aggregate and its per-tick transition rules.
//!
//! By centralizing the game's mutable state and keeping IO out of it, the
//! whole win/lose/pause machinery is unit-testable without a display
//! surface: the update pass takes the sampled input and returns the events
//! the shell must act on.

use smallvec::SmallVec;
use strum_macros::{Display, IntoStaticStr};
use tracing::info;

use crate::entity::{Bounded, Checkpoint, Enemy, FamilyMember, Player, Pumpkin, Wall};
use crate::game::events::GameEvent;
use crate::input::InputState;
use crate::map::Level;

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EndReason {
    /// The enemy's rectangle overlapped the player's.
    Caught,
    /// Every family member was collected.
    Win,
}

/// The values handed off to the post-game summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndSummary {
    pub points: u32,
    pub collected_family: usize,
    pub total_family: usize,
    pub reason: EndReason,
}

/// The gameplay phase. `Ended` is terminal: no transition leaves it, and no
/// entity is mutated once it is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    CheckpointPaused,
    Ended(EndReason),
}

impl Phase {
    /// Gameplay advances only while active.
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Active)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Phase::Ended(_))
    }
}

/// The single mutable aggregate of a running game.
pub struct GameState {
    pub player: Player,
    pub enemy: Option<Enemy>,
    pub walls: Vec<Wall>,
    pub pumpkins: Vec<Pumpkin>,
    pub family: SmallVec<[FamilyMember; 4]>,
    pub checkpoints: Vec<Checkpoint>,
    pub points: u32,
    phase: Phase,
}

impl GameState {
    pub fn new(level: Level) -> Self {
        Self {
            player: level.player,
            enemy: level.enemy,
            walls: level.walls,
            pumpkins: level.pumpkins,
            family: level.family,
            checkpoints: level.checkpoints,
            points: 0,
            phase: Phase::Active,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs one update pass: player movement, enemy pursuit, then the
    /// player-overlap checks (pickups, family, checkpoints). A no-op unless
    /// the phase is `Active`. Returns the transitions the shell must handle.
    pub fn update(&mut self, input: InputState) -> SmallVec<[GameEvent; 2]> {
        let mut events = SmallVec::new();
        if !self.phase.is_running() {
            return events;
        }

        self.player.apply_input(input, &self.walls);

        if let Some(enemy) = self.enemy.as_mut() {
            if enemy.pursue(&self.player.rect, &self.walls) {
                self.end(EndReason::Caught, &mut events);
                // A capture halts every remaining check this frame.
                return events;
            }
        }

        self.collect_pumpkins();
        self.collect_family(&mut events);

        if self.phase.is_running() {
            self.trigger_checkpoint(&mut events);
        }

        events
    }

    /// Collects every pumpkin overlapping the player this tick. All
    /// overlapping pumpkins are taken in the same tick; there is no
    /// throttling.
    fn collect_pumpkins(&mut self) {
        let player = self.player.rect;
        for i in (0..self.pumpkins.len()).rev() {
            if self.pumpkins[i].rect.overlaps(&player) {
                self.points += self.pumpkins[i].points;
                self.pumpkins.remove(i);
            }
        }
    }

    /// Marks overlapped family members collected. The win transition fires
    /// within the same tick the last member is collected.
    fn collect_family(&mut self, events: &mut SmallVec<[GameEvent; 2]>) {
        let mut collected_any = false;
        for member in &mut self.family {
            if !member.is_collected() && member.overlaps(&self.player) {
                member.collect();
                collected_any = true;
            }
        }

        if collected_any && self.family.iter().all(FamilyMember::is_collected) {
            self.end(EndReason::Win, events);
        }
    }

    /// Triggers at most one checkpoint per tick: the first untriggered one
    /// (in list order) overlapping the player. Triggering pauses gameplay.
    fn trigger_checkpoint(&mut self, events: &mut SmallVec<[GameEvent; 2]>) {
        for checkpoint in &mut self.checkpoints {
            if !checkpoint.is_triggered() && checkpoint.overlaps(&self.player) {
                checkpoint.trigger();
                self.phase = Phase::CheckpointPaused;
                events.push(GameEvent::CheckpointReached {
                    lesson: checkpoint.lesson,
                    index: checkpoint.index,
                });
                break;
            }
        }
    }

    /// Returns to `Active` after the checkpoint overlay is dismissed.
    /// Triggered flags are left alone; that checkpoint never fires again.
    pub fn resume(&mut self) {
        if self.phase == Phase::CheckpointPaused {
            self.phase = Phase::Active;
        }
    }

    /// Moves to the terminal phase and emits the end summary exactly once.
    fn end(&mut self, reason: EndReason, events: &mut SmallVec<[GameEvent; 2]>) {
        if self.phase.is_ended() {
            return;
        }
        self.phase = Phase::Ended(reason);
        let summary = self.summary(reason);
        info!(
            points = summary.points,
            collected = summary.collected_family,
            total = summary.total_family,
            %reason,
            "Game ended"
        );
        events.push(GameEvent::Ended(summary));
    }

    fn summary(&self, reason: EndReason) -> EndSummary {
        EndSummary {
            points: self.points,
            collected_family: self.family.iter().filter(|f| f.is_collected()).count(),
            total_family: self.family.len(),
            reason,
        }
    }
}
