use glam::Vec2;
use pretty_assertions::assert_eq;
use pumpkin_maze::entity::collision::{hits_wall, resolve_move};
use pumpkin_maze::entity::Wall;
use pumpkin_maze::geometry::Rect;

fn wall(x: f32, y: f32, w: f32, h: f32) -> Wall {
    Wall {
        rect: Rect::new(x, y, w, h),
    }
}

#[test]
fn test_free_movement_applies_both_axes() {
    let mut rect = Rect::new(10.0, 10.0, 10.0, 10.0);
    resolve_move(&mut rect, Vec2::new(5.0, -3.0), &[]);
    assert_eq!(rect.pos, Vec2::new(15.0, 7.0));
}

#[test]
fn test_blocked_axis_reverts_while_other_proceeds() {
    // Wall directly to the right; vertical space is open
    let walls = [wall(30.0, 0.0, 30.0, 100.0)];
    let mut rect = Rect::new(10.0, 10.0, 10.0, 10.0);

    resolve_move(&mut rect, Vec2::new(15.0, 5.0), &walls);

    // x fully reverted, y's resolved move intact
    assert_eq!(rect.pos, Vec2::new(10.0, 15.0));
}

#[test]
fn test_vertical_block_keeps_horizontal_slide() {
    let walls = [wall(0.0, 30.0, 100.0, 30.0)];
    let mut rect = Rect::new(10.0, 10.0, 10.0, 10.0);

    resolve_move(&mut rect, Vec2::new(4.0, 15.0), &walls);

    assert_eq!(rect.pos, Vec2::new(14.0, 10.0));
}

#[test]
fn test_fully_blocked_movement_reverts_both_axes() {
    let walls = [wall(30.0, 0.0, 30.0, 100.0), wall(0.0, 30.0, 100.0, 30.0)];
    let mut rect = Rect::new(10.0, 10.0, 10.0, 10.0);

    resolve_move(&mut rect, Vec2::new(15.0, 15.0), &walls);

    assert_eq!(rect.pos, Vec2::new(10.0, 10.0));
}

#[test]
fn test_touching_a_wall_edge_is_not_a_hit() {
    let walls = [wall(20.0, 0.0, 10.0, 10.0)];
    let rect = Rect::new(10.0, 0.0, 10.0, 10.0);
    assert!(!hits_wall(&rect, &walls));
}
