//! Health text и баннер результата

use bevy::prelude::*;
use bevy::sprite::Anchor;
use starduel_simulation::{Craft, Health, MatchConfig, MatchEnded, Side};

const HUD_Z: f32 = 20.0;
const HUD_MARGIN: f32 = 10.0;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_health_text)
            .add_systems(Update, (update_health_text, show_result_banner));
    }
}

/// Health text of one side
#[derive(Component)]
pub struct HealthText {
    pub side: Side,
}

#[derive(Component)]
pub struct ResultBanner;

pub fn health_label(health: i32) -> String {
    format!("Health: {}", health)
}

/// LEFT в левом верхнем углу, RIGHT в правом
fn spawn_health_text(mut commands: Commands, config: Res<MatchConfig>) {
    let half_w = config.arena.width as f32 / 2.0;
    let half_h = config.arena.height as f32 / 2.0;

    for side in Side::BOTH {
        let (x, anchor) = match side {
            Side::Left => (-half_w + HUD_MARGIN, Anchor::TopLeft),
            Side::Right => (half_w - HUD_MARGIN, Anchor::TopRight),
        };

        commands.spawn((
            HealthText { side },
            Text2d::new(health_label(config.starting_health)),
            TextFont {
                font_size: 40.0,
                ..default()
            },
            TextColor(Color::WHITE),
            anchor,
            Transform::from_xyz(x, half_h - HUD_MARGIN, HUD_Z),
        ));
    }
}

fn update_health_text(
    crafts: Query<(&Craft, &Health), Changed<Health>>,
    mut texts: Query<(&HealthText, &mut Text2d)>,
) {
    for (craft, health) in crafts.iter() {
        for (label, mut text) in texts.iter_mut() {
            if label.side == craft.side {
                text.0 = health_label(health.current);
            }
        }
    }
}

/// Один баннер на матч, висит до выхода
fn show_result_banner(
    mut commands: Commands,
    mut ended: EventReader<MatchEnded>,
    existing: Query<(), With<ResultBanner>>,
) {
    let Some(event) = ended.read().last() else {
        return;
    };
    if !existing.is_empty() {
        return;
    }
    let Some(text) = event.result.banner_text() else {
        return;
    };

    commands.spawn((
        ResultBanner,
        Text2d::new(text),
        TextFont {
            font_size: 100.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_xyz(0.0, 0.0, HUD_Z + 1.0),
    ));
}
