//! Tests for the projectile advance step.

use super::projectile::{advance_projectile, ProjectileFate};
use crate::components::{Projectile, Side};
use crate::config::MatchConfig;
use crate::geometry::BoundingBox;

#[test]
fn test_left_projectile_moves_right() {
    let config = MatchConfig::default();
    let mut bounds = BoundingBox::new(155, 318, 10, 5);
    let fate = advance_projectile(&mut bounds, &Projectile::new(Side::Left, 0), None, &config);

    assert_eq!(fate, ProjectileFate::InFlight);
    assert_eq!(bounds.x, 165);
}

#[test]
fn test_right_projectile_moves_left() {
    let config = MatchConfig::default();
    let mut bounds = BoundingBox::new(690, 318, 10, 5);
    let fate = advance_projectile(&mut bounds, &Projectile::new(Side::Right, 0), None, &config);

    assert_eq!(fate, ProjectileFate::InFlight);
    assert_eq!(bounds.x, 680);
}

#[test]
fn test_hit_after_move() {
    let config = MatchConfig::default();
    let target = BoundingBox::new(700, 300, 55, 40);

    // 685 → 695: правый край 705 заходит в корабль
    let mut bounds = BoundingBox::new(685, 318, 10, 5);
    let fate = advance_projectile(
        &mut bounds,
        &Projectile::new(Side::Left, 0),
        Some(&target),
        &config,
    );

    assert_eq!(fate, ProjectileFate::Hit);
}

#[test]
fn test_touching_target_is_not_a_hit() {
    let config = MatchConfig::default();
    let target = BoundingBox::new(700, 300, 55, 40);

    // 680 → 690: правый край ровно 700
    let mut bounds = BoundingBox::new(680, 318, 10, 5);
    let fate = advance_projectile(
        &mut bounds,
        &Projectile::new(Side::Left, 0),
        Some(&target),
        &config,
    );

    assert_eq!(fate, ProjectileFate::InFlight);
}

#[test]
fn test_miss_above_target() {
    let config = MatchConfig::default();
    let target = BoundingBox::new(700, 0, 55, 40);
    let mut bounds = BoundingBox::new(695, 318, 10, 5);

    let fate = advance_projectile(
        &mut bounds,
        &Projectile::new(Side::Left, 0),
        Some(&target),
        &config,
    );

    assert_eq!(fate, ProjectileFate::InFlight);
}

#[test]
fn test_exit_right_edge() {
    let config = MatchConfig::default();

    let mut still_visible = BoundingBox::new(880, 318, 10, 5);
    let mut gone = BoundingBox::new(890, 318, 10, 5);

    assert_eq!(
        advance_projectile(&mut still_visible, &Projectile::new(Side::Left, 0), None, &config),
        ProjectileFate::InFlight
    );
    assert_eq!(
        advance_projectile(&mut gone, &Projectile::new(Side::Left, 1), None, &config),
        ProjectileFate::Exited
    );
}

#[test]
fn test_exit_left_edge() {
    let config = MatchConfig::default();

    let mut still_visible = BoundingBox::new(10, 318, 10, 5);
    let mut gone = BoundingBox::new(0, 318, 10, 5);

    assert_eq!(
        advance_projectile(&mut still_visible, &Projectile::new(Side::Right, 0), None, &config),
        ProjectileFate::InFlight
    );
    assert_eq!(
        advance_projectile(&mut gone, &Projectile::new(Side::Right, 1), None, &config),
        ProjectileFate::Exited
    );
}

#[test]
fn test_own_craft_is_never_a_target() {
    let config = MatchConfig::default();
    let owner = BoundingBox::new(700, 300, 55, 40);
    let projectile = Projectile::new(Side::Right, 0);

    assert_eq!(projectile.target(), Side::Left);

    // Даже если пуля внутри владельца, проверяется только противник
    let mut bounds = BoundingBox::new(720, 318, 10, 5);
    let fate = advance_projectile(&mut bounds, &projectile, None, &config);
    assert_eq!(fate, ProjectileFate::InFlight);
    assert!(bounds.intersects(&owner));
}
