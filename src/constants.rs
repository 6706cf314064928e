//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;
use sdl2::pixels::Color;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each tile, in pixels.
pub const TILE_SIZE: u32 = 32;
/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(800, 768);
/// The size of the level grid, in tiles. Derived from the canvas so the map
/// always fills the surface exactly.
pub const GRID_SIZE: UVec2 = UVec2::new(CANVAS_SIZE.x / TILE_SIZE, CANVAS_SIZE.y / TILE_SIZE);

/// Points awarded per pumpkin.
pub const PUMPKIN_POINTS: u32 = 5;

/// Per-axis deadzone (in pixels) under which the enemy holds that axis
/// instead of stepping toward the player.
pub const PURSUIT_DEADZONE: f32 = 1.0;

/// Tile the player is placed on when the map supplies no `P` marker.
pub const FALLBACK_PLAYER_TILE: UVec2 = UVec2::new(1, 1);

/// Fraction of a tile that player/enemy/family entities are inset from their
/// tile's top-left corner.
pub const ENTITY_INSET: f32 = 0.1;
/// Fraction of a tile covered by pumpkins and checkpoints (centered).
pub const PICKUP_SCALE: f32 = 0.5;

/// Top-left of the HUD points readout, in pixels.
pub const HUD_ORIGIN: UVec2 = UVec2::new(16, 18);
/// Left edge of the collected-family icon strip, in pixels.
pub const ICON_STRIP_ORIGIN: UVec2 = UVec2::new(490, 740);
/// Horizontal spacing between collected-family icons, in pixels.
pub const ICON_STRIP_SPACING: u32 = 40;

pub const BACKGROUND_COLOR: Color = Color::RGB(0x05, 0x02, 0x0a);
pub const GRID_LINE_COLOR: Color = Color::RGB(0x15, 0x15, 0x2a);
pub const WALL_COLOR: Color = Color::RGB(0x22, 0x22, 0x44);
pub const PLAYER_COLOR: Color = Color::RGB(0x7f, 0xff, 0xff);
pub const ENEMY_COLOR: Color = Color::RGB(0xff, 0x40, 0x81);
pub const PUMPKIN_COLOR: Color = Color::RGB(0xff, 0xa5, 0x00);
pub const FAMILY_COLOR: Color = Color::RGB(0xa6, 0xff, 0xcb);
pub const CHECKPOINT_COLOR: Color = Color::RGB(0x3e, 0xf0, 0xff);
pub const HUD_COLOR: Color = Color::WHITE;

/// A tuning profile: the scale/speed constants the two shipped level designs
/// disagree on, named so a profile is selected rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Player/enemy/family size as a fraction of a tile.
    pub entity_scale: f32,
    /// Player movement per tick, in pixels.
    pub player_speed: f32,
    /// Enemy movement per tick, in pixels. Never faster than the player.
    pub enemy_speed: f32,
    /// The maze shipped with this profile.
    pub map: &'static [&'static str],
}

impl Tuning {
    /// Tight corridors, vector-first rendering, fast player.
    pub const VECTOR: Tuning = Tuning {
        entity_scale: 0.8,
        player_speed: 5.0,
        enemy_speed: 1.5,
        map: RAW_MAP,
    };

    /// Open arena sized for the oversized sprite set.
    pub const SPRITE: Tuning = Tuning {
        entity_scale: 1.5,
        player_speed: 2.0,
        enemy_speed: 1.0,
        map: OPEN_MAP,
    };
}

/// The default maze. `W` = wall, `.` = pumpkin, `P` = player, `E` = enemy,
/// `F` = family member, `C` = checkpoint; anything else is open floor.
pub const RAW_MAP: &[&str] = &[
    "WWWWWWWWWWWWWWWWWWWWWWWWW",
    "W....C........W....C....W",
    "W.WWW.WWWWWWW.W.WWWWW.W.W",
    "W.P..W.......W.W.....W.WW",
    "W.WWW.WWWWW.WW.W.WWW.W..W",
    "W.....W...W....W.W...W..W",
    "WWWWW.W.W.WWWWWW.W.W.W..W",
    "W.....W.W....E.....W....W",
    "W.WWWWW.WWWWWWWWWWWW.WWWW",
    "W.W.....W...........W..FW",
    "W.W.WWWWW.WWWWWWWWW.W.W.W",
    "W...W.....W.......W...W.W",
    "WWW.W.WWWWW.WWWWW.WWW.W.W",
    "W...W.W.....W.....W...W.W",
    "W.WWW.W.WWW.W.WWW.W.WWW.W",
    "W.W...W.W...W.W...W.W...W",
    "W.W.WWW.WWWWW.WWWWW.W.W.W",
    "W.W.W....C..........W.W.W",
    "W.W.WWWWWWWWWWWWWWWWW.W.W",
    "W.W...................W.W",
    "W.WWWWWWWWWWWWWWWWWWWWW.W",
    "W.F.................F..FW",
    "WWWWWWWWWWWWWWWWWWWWWWWWW",
];

/// The wide-corridor maze used by the sprite profile.
pub const OPEN_MAP: &[&str] = &[
    "WWWWWWWWWWWWWWWWWWWWWWWWW",
    "WF....W....C......W.E.F.W",
    "W.....W...........W.....W",
    "W..W.....WWWWWWW..C..W..W",
    "W..W.................W..W",
    "W..WWW.............WWW..W",
    "W..W.................W..W",
    "W..W....WWW...WWW....W..W",
    "W...........P...........W",
    "W...C...................W",
    "W.......WWW...WWW.......W",
    "W..WWW.............WWW..W",
    "W..W.................W..W",
    "W..W.....WWWWWWW.....W..W",
    "WF.E..W.....C.....W...F.W",
    "W.....W...........W.....W",
    "WWWWWWWWWWWWWWWWWWWWWWWWW",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size() {
        assert_eq!(GRID_SIZE.x, 25);
        assert_eq!(GRID_SIZE.y, 24);
    }

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_raw_map_fits_grid() {
        assert!(RAW_MAP.len() <= GRID_SIZE.y as usize);
        for row in RAW_MAP {
            assert!(row.len() <= GRID_SIZE.x as usize);
        }
    }

    #[test]
    fn test_raw_map_boundaries() {
        assert!(RAW_MAP[0].chars().all(|c| c == 'W'));
        assert!(RAW_MAP[RAW_MAP.len() - 1].chars().all(|c| c == 'W'));
        for row in RAW_MAP.iter() {
            assert_eq!(row.chars().next().unwrap(), 'W');
            assert_eq!(row.chars().last().unwrap(), 'W');
        }
    }

    #[test]
    fn test_raw_map_single_player_and_enemy() {
        let count = |c: char| RAW_MAP.iter().map(|r| r.matches(c).count()).sum::<usize>();
        assert_eq!(count('P'), 1);
        assert_eq!(count('E'), 1);
        assert_eq!(count('F'), 4);
        assert_eq!(count('C'), 3);
    }

    #[test]
    fn test_tuning_enemy_never_outruns_player() {
        for tuning in [Tuning::VECTOR, Tuning::SPRITE] {
            assert!(tuning.enemy_speed <= tuning.player_speed);
        }
    }
}
