use pretty_assertions::assert_eq;
use pumpkin_maze::constants::{GRID_SIZE, RAW_MAP};
use pumpkin_maze::map::{normalize, Tile};
use speculoos::prelude::*;

#[test]
fn test_normalized_grid_is_exactly_rectangular() {
    let grid = normalize(RAW_MAP, GRID_SIZE.x as usize, GRID_SIZE.y as usize);

    assert_that!(grid).has_length(GRID_SIZE.y as usize);
    for row in &grid {
        assert_eq!(row.len(), GRID_SIZE.x as usize);
    }
}

#[test]
fn test_normalization_is_deterministic() {
    let a = normalize(RAW_MAP, GRID_SIZE.x as usize, GRID_SIZE.y as usize);
    let b = normalize(RAW_MAP, GRID_SIZE.x as usize, GRID_SIZE.y as usize);
    assert_eq!(a, b);
}

#[test]
fn test_short_rows_pad_with_walls() {
    let grid = normalize(&["W.", "W"], 4, 2);

    assert_eq!(
        grid[0],
        vec![Tile::Wall, Tile::Pumpkin, Tile::Wall, Tile::Wall]
    );
    assert_eq!(grid[1], vec![Tile::Wall; 4]);
}

#[test]
fn test_long_rows_truncate() {
    let grid = normalize(&["W.PEFC..."], 4, 1);
    assert_eq!(
        grid[0],
        vec![Tile::Wall, Tile::Pumpkin, Tile::Player, Tile::Enemy]
    );
}

#[test]
fn test_missing_rows_become_solid_walls() {
    let grid = normalize(&["..."], 3, 4);
    assert_eq!(grid[0], vec![Tile::Pumpkin; 3]);
    for row in &grid[1..] {
        assert_eq!(row, &vec![Tile::Wall; 3]);
    }
}

#[test]
fn test_unknown_characters_are_floor() {
    let grid = normalize(&["xZ? "], 4, 1);
    assert_eq!(grid[0], vec![Tile::Floor; 4]);
}
