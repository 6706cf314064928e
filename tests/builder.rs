use pretty_assertions::assert_eq;
use pumpkin_maze::constants::{
    ENTITY_INSET, FALLBACK_PLAYER_TILE, PUMPKIN_POINTS, TILE_SIZE, Tuning,
};
use pumpkin_maze::map::Level;
use speculoos::prelude::*;

fn build(raw: &[&str]) -> Level {
    Level::build(raw, &Tuning::VECTOR)
}

#[test]
fn test_missing_player_marker_yields_fallback_player() {
    let level = build(&["WWW", "W.W", "WWW"]);

    let tile = TILE_SIZE as f32;
    let expected_x = FALLBACK_PLAYER_TILE.x as f32 * tile + tile * ENTITY_INSET;
    let expected_y = FALLBACK_PLAYER_TILE.y as f32 * tile + tile * ENTITY_INSET;
    assert_eq!(level.player.rect.pos.x, expected_x);
    assert_eq!(level.player.rect.pos.y, expected_y);
    assert_eq!(level.player.speed, Tuning::VECTOR.player_speed);
}

#[test]
fn test_last_player_marker_wins() {
    let level = build(&["P..P"]);

    // The surviving player sits on the tile of the second marker
    let tile = TILE_SIZE as f32;
    assert_eq!(level.player.rect.pos.x, 3.0 * tile + tile * ENTITY_INSET);
}

#[test]
fn test_enemy_is_optional() {
    let without = build(&["P.."]);
    assert!(without.enemy.is_none());

    let with = build(&["P.E"]);
    let enemy = with.enemy.expect("enemy marker should build an enemy");
    assert_eq!(enemy.speed, Tuning::VECTOR.enemy_speed);
}

#[test]
fn test_family_variants_are_sequential() {
    let level = build(&["F.F", "..F"]);

    assert_eq!(level.family.len(), 3);
    let variants: Vec<usize> = level.family.iter().map(|f| f.variant).collect();
    assert_eq!(variants, vec![0, 1, 2]);
    assert!(level.family.iter().all(|f| !f.is_collected()));
}

#[test]
fn test_checkpoints_are_indexed_in_scan_order() {
    let level = build(&["C..", "..C"]);

    assert_that!(level.checkpoints).has_length(2);
    for (i, checkpoint) in level.checkpoints.iter().enumerate() {
        assert_eq!(checkpoint.index, i);
        assert_eq!(checkpoint.lesson, 1);
        assert!(!checkpoint.is_triggered());
    }
}

#[test]
fn test_pumpkins_carry_the_fixed_point_value() {
    let level = build(&["P..."]);
    // 3 from the map plus the wall padding contributes none
    assert!(level.pumpkins.len() >= 3);
    assert!(level.pumpkins.iter().all(|p| p.points == PUMPKIN_POINTS));
}

#[test]
fn test_pickups_are_centered_at_half_tile() {
    let level = build(&["P."]);
    let pumpkin = level
        .pumpkins
        .iter()
        .find(|p| p.rect.pos.x < 2.0 * TILE_SIZE as f32)
        .expect("pumpkin on the second tile");

    let tile = TILE_SIZE as f32;
    assert_eq!(pumpkin.rect.size.x, tile * 0.5);
    assert_eq!(pumpkin.rect.size.y, tile * 0.5);
    assert_eq!(pumpkin.rect.center().x, tile + tile / 2.0);
}

#[test]
fn test_padding_walls_enclose_the_level() {
    // A tiny map still produces a full grid's worth of boundary walls
    let level = build(&["P"]);
    assert!(!level.walls.is_empty());
}
