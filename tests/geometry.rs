use glam::Vec2;
use pretty_assertions::assert_eq;
use pumpkin_maze::entity::{Bounded, Pumpkin, Wall};
use pumpkin_maze::geometry::Rect;

#[test]
fn test_overlap_symmetry() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    let c = Rect::new(100.0, 100.0, 4.0, 4.0);

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c));
    assert!(!c.overlaps(&a));
}

#[test]
fn test_touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);

    // Sharing only a vertical edge
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&right));
    assert!(!right.overlaps(&a));

    // Sharing only a horizontal edge
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!a.overlaps(&below));
    assert!(!below.overlaps(&a));

    // Sharing only a corner
    let diagonal = Rect::new(10.0, 10.0, 10.0, 10.0);
    assert!(!a.overlaps(&diagonal));

    // One pixel of actual intrusion does overlap
    let intruding = Rect::new(9.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&intruding));
}

#[test]
fn test_containment_overlaps() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn test_center() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
}

#[test]
fn test_bounded_overlap_across_entity_kinds() {
    let wall = Wall {
        rect: Rect::new(0.0, 0.0, 32.0, 32.0),
    };
    let pumpkin = Pumpkin {
        rect: Rect::new(24.0, 24.0, 16.0, 16.0),
        points: 5,
    };

    assert!(wall.overlaps(&pumpkin));
    assert!(pumpkin.overlaps(&wall));
}
