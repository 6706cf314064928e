//! Map parsing functionality for converting raw text rows into a normalized
//! tile grid.
//!
//! Malformed input is a normal condition here, not an error: short rows are
//! padded with walls, long rows truncated, and missing rows become solid wall
//! rows, so the playable area is always fully enclosed.

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Open floor, no entity.
    Floor,
    /// A solid wall tile.
    Wall,
    /// A pumpkin collectible.
    Pumpkin,
    /// The player's starting tile.
    Player,
    /// The enemy's starting tile.
    Enemy,
    /// A family member to rescue.
    Family,
    /// A flashcard checkpoint.
    Checkpoint,
}

impl Tile {
    /// Parses a single cell character. Unrecognized characters are open
    /// floor, never an error.
    pub fn from_char(c: char) -> Tile {
        match c {
            'W' => Tile::Wall,
            '.' => Tile::Pumpkin,
            'P' => Tile::Player,
            'E' => Tile::Enemy,
            'F' => Tile::Family,
            'C' => Tile::Checkpoint,
            _ => Tile::Floor,
        }
    }
}

/// Normalizes raw text rows into a grid of exactly `rows` rows of exactly
/// `cols` tiles each.
///
/// Each input row is right-padded with walls if shorter than `cols` and
/// truncated if longer. Missing rows become all-wall rows.
pub fn normalize(raw: &[&str], cols: usize, rows: usize) -> Vec<Vec<Tile>> {
    (0..rows)
        .map(|r| {
            let line = raw.get(r).copied().unwrap_or("");
            line.chars()
                .map(Tile::from_char)
                .chain(std::iter::repeat(Tile::Wall))
                .take(cols)
                .collect()
        })
        .collect()
}
