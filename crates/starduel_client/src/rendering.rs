use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;
use starduel_simulation::{BoundingBox, Craft, MatchConfig, Projectile, Side};

use crate::assets::GameAssets;

/// Z слои: фон и перегородка, корабли, пули
pub const ARENA_Z: f32 = 0.0;
const CRAFT_Z: f32 = 5.0;
const PROJECTILE_Z: f32 = 6.0;

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (attach_craft_visuals, attach_projectile_visuals, sync_transforms).chain(),
        );
    }
}

/// Size of a box in Bevy world units (1 unit = 1 arena unit).
pub fn box_size(bounds: &BoundingBox) -> Vec2 {
    Vec2::new(bounds.width as f32, bounds.height as f32)
}

/// Arena (top-left origin, y down) → Bevy (centred, y up), centre of the box.
pub fn box_center(bounds: &BoundingBox, config: &MatchConfig) -> Vec2 {
    let x = bounds.x as f32 + bounds.width as f32 / 2.0 - config.arena.width as f32 / 2.0;
    let y = config.arena.height as f32 / 2.0 - (bounds.y as f32 + bounds.height as f32 / 2.0);
    Vec2::new(x, y)
}

pub fn side_color(side: Side) -> Color {
    match side {
        Side::Left => Color::srgb(1.0, 1.0, 0.0),
        Side::Right => Color::srgb(1.0, 0.0, 0.0),
    }
}

/// Картинки кораблей смотрят вниз: жёлтый поворачиваем на 90°, красный на 270°
fn craft_rotation(side: Side) -> Quat {
    match side {
        Side::Left => Quat::from_rotation_z(FRAC_PI_2),
        Side::Right => Quat::from_rotation_z(PI + FRAC_PI_2),
    }
}

/// Ship sprite for newly spawned craft (visual lives on the simulation entity)
fn attach_craft_visuals(
    mut commands: Commands,
    assets: Res<GameAssets>,
    config: Res<MatchConfig>,
    query: Query<(Entity, &Craft, &BoundingBox), Added<Craft>>,
) {
    for (entity, craft, bounds) in query.iter() {
        let image = match craft.side {
            Side::Left => assets.yellow_ship.clone(),
            Side::Right => assets.red_ship.clone(),
        };

        commands.entity(entity).insert((
            Sprite {
                image,
                custom_size: Some(box_size(bounds)),
                ..default()
            },
            Transform::from_translation(box_center(bounds, &config).extend(CRAFT_Z))
                .with_rotation(craft_rotation(craft.side)),
        ));
    }
}

/// Flat rect in the owner's colour. Despawn вместе с пулей в симуляции.
fn attach_projectile_visuals(
    mut commands: Commands,
    config: Res<MatchConfig>,
    query: Query<(Entity, &Projectile, &BoundingBox), Added<Projectile>>,
) {
    for (entity, projectile, bounds) in query.iter() {
        commands.entity(entity).insert((
            Sprite {
                color: side_color(projectile.owner),
                custom_size: Some(box_size(bounds)),
                ..default()
            },
            Transform::from_translation(box_center(bounds, &config).extend(PROJECTILE_Z)),
        ));
    }
}

/// Sync simulation boxes → visual transforms
fn sync_transforms(
    config: Res<MatchConfig>,
    mut query: Query<(&BoundingBox, &mut Transform), Changed<BoundingBox>>,
) {
    for (bounds, mut transform) in query.iter_mut() {
        let center = box_center(bounds, &config);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_center_flips_y_axis() {
        let config = MatchConfig::default();

        // Верхний левый угол арены
        let corner = BoundingBox::new(0, 0, 10, 10);
        assert_eq!(box_center(&corner, &config), Vec2::new(-445.0, 245.0));

        // Перегородка по центру
        assert_eq!(box_center(&config.divider(), &config), Vec2::ZERO);
    }

    #[test]
    fn test_spawned_craft_positions() {
        let config = MatchConfig::default();
        let right = BoundingBox::from_parts(config.spawn(Side::Right), config.craft_size);

        assert_eq!(box_center(&right, &config), Vec2::new(277.5, -70.0));
        assert_eq!(box_size(&right), Vec2::new(55.0, 40.0));
    }
}
