//! Game entity records. Every entity owns a [`Rect`]; behavior beyond the
//! shared bounds lives with each kind.

pub mod collision;
pub mod enemy;
pub mod player;

pub use enemy::Enemy;
pub use player::Player;

use crate::geometry::Rect;

/// Trait for entities that participate in overlap checks.
pub trait Bounded {
    /// Returns the entity's current bounds.
    fn rect(&self) -> &Rect;

    /// Checks if this entity overlaps another.
    fn overlaps(&self, other: &dyn Bounded) -> bool {
        self.rect().overlaps(other.rect())
    }
}

/// A solid, immutable wall segment covering one full tile.
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub rect: Rect,
}

impl Bounded for Wall {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// A point pickup. Removed from the live set on collection.
#[derive(Debug, Clone, Copy)]
pub struct Pumpkin {
    pub rect: Rect,
    pub points: u32,
}

impl Bounded for Pumpkin {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// A family member to rescue. `collected` transitions false to true exactly
/// once; collecting the whole set wins the game.
#[derive(Debug, Clone, Copy)]
pub struct FamilyMember {
    pub rect: Rect,
    /// Selects which family sprite this member uses.
    pub variant: usize,
    collected: bool,
}

impl FamilyMember {
    pub fn new(rect: Rect, variant: usize) -> Self {
        Self {
            rect,
            variant,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn collect(&mut self) {
        self.collected = true;
    }
}

impl Bounded for FamilyMember {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// A flashcard checkpoint. `triggered` transitions false to true exactly
/// once; a triggered checkpoint never fires again.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub rect: Rect,
    /// Lesson the flashcards belong to.
    pub lesson: u32,
    /// Zero-based position among this level's checkpoints, in scan order.
    pub index: usize,
    triggered: bool,
}

impl Checkpoint {
    pub fn new(rect: Rect, lesson: u32, index: usize) -> Self {
        Self {
            rect,
            lesson,
            index,
            triggered: false,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn trigger(&mut self) {
        self.triggered = true;
    }
}

impl Bounded for Checkpoint {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}
