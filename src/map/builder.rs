//! Builds the entity set for a level from a normalized tile grid.

use smallvec::SmallVec;
use tracing::debug;

use crate::constants::{
    ENTITY_INSET, FALLBACK_PLAYER_TILE, GRID_SIZE, PICKUP_SCALE, PUMPKIN_POINTS, TILE_SIZE, Tuning,
};
use crate::entity::{Checkpoint, Enemy, FamilyMember, Player, Pumpkin, Wall};
use crate::geometry::Rect;
use crate::map::parser::{normalize, Tile};

/// All entities of a built level. Constructed once, before the frame driver
/// starts.
pub struct Level {
    pub player: Player,
    pub enemy: Option<Enemy>,
    pub walls: Vec<Wall>,
    pub pumpkins: Vec<Pumpkin>,
    pub family: SmallVec<[FamilyMember; 4]>,
    pub checkpoints: Vec<Checkpoint>,
}

impl Level {
    /// Builds a level from raw map rows using the given tuning profile.
    ///
    /// Applies each cell's effect once, in row-major order. Later player or
    /// enemy markers replace earlier ones; family members and checkpoints
    /// are appended with sequential indices. If no player marker exists, a
    /// default player is placed at the fallback tile so the level never
    /// starts without a controllable entity.
    pub fn build(raw: &[&str], tuning: &Tuning) -> Level {
        let grid = normalize(raw, GRID_SIZE.x as usize, GRID_SIZE.y as usize);
        let tile = TILE_SIZE as f32;
        let entity_size = tile * tuning.entity_scale;
        let pickup_size = tile * PICKUP_SCALE;
        let pickup_inset = (1.0 - PICKUP_SCALE) / 2.0;

        let mut player = None;
        let mut enemy = None;
        let mut walls = Vec::new();
        let mut pumpkins = Vec::new();
        let mut family = SmallVec::new();
        let mut checkpoints = Vec::new();

        for (row, tiles) in grid.iter().enumerate() {
            for (col, cell) in tiles.iter().enumerate() {
                let x = col as f32 * tile;
                let y = row as f32 * tile;

                match cell {
                    Tile::Wall => walls.push(Wall {
                        rect: Rect::new(x, y, tile, tile),
                    }),
                    Tile::Pumpkin => pumpkins.push(Pumpkin {
                        rect: Rect::new(
                            x + tile * pickup_inset,
                            y + tile * pickup_inset,
                            pickup_size,
                            pickup_size,
                        ),
                        points: PUMPKIN_POINTS,
                    }),
                    Tile::Player => {
                        player = Some(Player::new(
                            inset_rect(x, y, tile, entity_size),
                            tuning.player_speed,
                        ));
                    }
                    Tile::Enemy => {
                        enemy = Some(Enemy::new(
                            inset_rect(x, y, tile, entity_size),
                            tuning.enemy_speed,
                        ));
                    }
                    Tile::Family => {
                        let variant = family.len();
                        family.push(FamilyMember::new(
                            inset_rect(x, y, tile, entity_size),
                            variant,
                        ));
                    }
                    Tile::Checkpoint => {
                        let index = checkpoints.len();
                        checkpoints.push(Checkpoint::new(
                            Rect::new(
                                x + tile * pickup_inset,
                                y + tile * pickup_inset,
                                pickup_size,
                                pickup_size,
                            ),
                            1,
                            index,
                        ));
                    }
                    Tile::Floor => {}
                }
            }
        }

        let player = player.unwrap_or_else(|| {
            debug!("map has no player marker, using fallback tile");
            Player::new(
                inset_rect(
                    (FALLBACK_PLAYER_TILE.x * TILE_SIZE) as f32,
                    (FALLBACK_PLAYER_TILE.y * TILE_SIZE) as f32,
                    tile,
                    entity_size,
                ),
                tuning.player_speed,
            )
        });

        debug!(
            walls = walls.len(),
            pumpkins = pumpkins.len(),
            family = family.len(),
            checkpoints = checkpoints.len(),
            enemy = enemy.is_some(),
            "Built level"
        );

        Level {
            player,
            enemy,
            walls,
            pumpkins,
            family,
            checkpoints,
        }
    }
}

fn inset_rect(x: f32, y: f32, tile: f32, size: f32) -> Rect {
    Rect::new(x + tile * ENTITY_INSET, y + tile * ENTITY_INSET, size, size)
}
