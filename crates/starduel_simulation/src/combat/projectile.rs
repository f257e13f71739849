//! Projectile advance pass.
//!
//! Один проход за тик: каждая пуля сдвигается, проверяется против корабля
//! противника, затем против края арены. Удаление через `Commands` отложено
//! до конца системы, поэтому удаление одной пули не влияет на обход остальных.

use bevy::prelude::*;

use crate::combat::HitEvent;
use crate::components::{Craft, Heading, Projectile};
use crate::config::MatchConfig;
use crate::geometry::BoundingBox;

/// What happened to a projectile during its advance step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileFate {
    InFlight,
    /// Overlapped the opposing craft; emit a hit and remove.
    Hit,
    /// Fully past the arena edge on its travel side; remove silently.
    Exited,
}

/// Moves `bounds` one tick and classifies the result.
pub fn advance_projectile(
    bounds: &mut BoundingBox,
    projectile: &Projectile,
    target: Option<&BoundingBox>,
    config: &MatchConfig,
) -> ProjectileFate {
    bounds.translate(projectile.heading.sign() * config.projectile_speed, 0);

    if target.is_some_and(|craft| craft.intersects(bounds)) {
        return ProjectileFate::Hit;
    }

    let exited = match projectile.heading {
        Heading::Rightward => bounds.x >= config.arena.width,
        Heading::Leftward => bounds.right() <= 0,
    };
    if exited {
        ProjectileFate::Exited
    } else {
        ProjectileFate::InFlight
    }
}

/// System: сдвиг всех пуль, коллизии, выход за арену
pub fn advance_projectiles(
    mut commands: Commands,
    config: Res<MatchConfig>,
    mut projectiles: Query<(Entity, &Projectile, &mut BoundingBox), Without<Craft>>,
    crafts: Query<(&Craft, &BoundingBox), Without<Projectile>>,
    mut hits: EventWriter<HitEvent>,
) {
    let mut craft_boxes = [None; 2];
    for (craft, bounds) in crafts.iter() {
        craft_boxes[craft.side.index()] = Some(*bounds);
    }

    // Стабильный порядок обхода (по serial), не зависит от layout хранилища ECS
    let mut live: Vec<_> = projectiles.iter_mut().collect();
    live.sort_by_key(|(_, projectile, _)| projectile.serial);

    for (entity, projectile, mut bounds) in live {
        let target = craft_boxes[projectile.target().index()].as_ref();

        match advance_projectile(&mut bounds, projectile, target, &config) {
            ProjectileFate::InFlight => {}
            ProjectileFate::Hit => {
                hits.write(HitEvent {
                    target: projectile.target(),
                });
                commands.entity(entity).despawn();
                crate::logger::log(&format!(
                    "🎯 {:?} projectile #{} hit {:?}",
                    projectile.owner,
                    projectile.serial,
                    projectile.target()
                ));
            }
            ProjectileFate::Exited => {
                commands.entity(entity).despawn();
                crate::logger::log(&format!(
                    "{:?} projectile #{} left the arena",
                    projectile.owner, projectile.serial
                ));
            }
        }
    }
}
