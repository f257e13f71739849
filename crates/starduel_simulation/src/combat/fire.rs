//! Fire contract: spawn a projectile at the craft's muzzle.

use bevy::prelude::*;

use crate::combat::SoundCue;
use crate::components::{Magazine, Projectile, ProjectileSerial, Side};
use crate::config::MatchConfig;
use crate::geometry::BoundingBox;

/// Projectile box at the leading edge of `craft`, vertically centred.
///
/// LEFT стреляет с правого края корабля, RIGHT ставит пулю сразу слева от корабля,
/// чтобы не стартовать внутри владельца.
pub fn muzzle_box(craft: &BoundingBox, side: Side, config: &MatchConfig) -> BoundingBox {
    let size = config.projectile_size;
    let y = craft.y + craft.height / 2 - config.muzzle_offset;
    let x = match side {
        Side::Left => craft.right(),
        Side::Right => craft.x - size.width,
    };
    BoundingBox::new(x, y, size.width, size.height)
}

/// Live projectiles owned by `side`.
pub fn in_flight_count<'a>(projectiles: impl IntoIterator<Item = &'a Projectile>, side: Side) -> usize {
    projectiles
        .into_iter()
        .filter(|projectile| projectile.owner == side)
        .count()
}

/// Spawns one projectile if `in_flight` is below the magazine capacity.
///
/// Returns `true` when a projectile was spawned (and a fire cue written).
#[allow(clippy::too_many_arguments)]
pub fn try_fire(
    commands: &mut Commands,
    side: Side,
    craft: &BoundingBox,
    magazine: &Magazine,
    in_flight: usize,
    serial: &mut ProjectileSerial,
    cues: &mut EventWriter<SoundCue>,
    config: &MatchConfig,
) -> bool {
    if !magazine.can_fire(in_flight) {
        crate::logger::log(&format!(
            "{:?} fire ignored: {}/{} in flight",
            side, in_flight, magazine.capacity
        ));
        return false;
    }

    let bounds = muzzle_box(craft, side, config);
    let projectile = Projectile::new(side, serial.next());
    commands.spawn((projectile, bounds));
    cues.write(SoundCue::Fire);

    crate::logger::log(&format!(
        "🔫 {:?} fired #{} at ({}, {})",
        side, projectile.serial, bounds.x, bounds.y
    ));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_muzzle_at_leading_edge() {
        let config = MatchConfig::default();
        let craft = BoundingBox::new(100, 300, 55, 40);

        assert_eq!(
            muzzle_box(&craft, Side::Left, &config),
            BoundingBox::new(155, 318, 10, 5)
        );
    }

    #[test]
    fn test_right_muzzle_outside_owner() {
        let config = MatchConfig::default();
        let craft = BoundingBox::new(700, 300, 55, 40);
        let muzzle = muzzle_box(&craft, Side::Right, &config);

        assert_eq!(muzzle, BoundingBox::new(690, 318, 10, 5));
        assert!(!muzzle.intersects(&craft));
    }

    #[test]
    fn test_in_flight_count_by_owner() {
        let projectiles = [
            Projectile::new(Side::Left, 0),
            Projectile::new(Side::Right, 1),
            Projectile::new(Side::Left, 2),
        ];

        assert_eq!(in_flight_count(&projectiles, Side::Left), 2);
        assert_eq!(in_flight_count(&projectiles, Side::Right), 1);
    }
}
