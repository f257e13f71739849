//! Presentation seam: what the loop hands to rendering and audio.
//!
//! Presentation получает только копии состояния (`FrameSnapshot`) и не может
//! мутировать симуляцию.

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::SoundCue;
use crate::components::{Craft, Health, Projectile, Side};
use crate::geometry::BoundingBox;

/// Rendering + audio consumer. Calls must return promptly.
pub trait Presentation {
    fn render_frame(&mut self, frame: &FrameSnapshot);
    fn render_result_banner(&mut self, text: &str);
    fn play_sound(&mut self, cue: SoundCue);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CraftView {
    pub side: Side,
    pub bounds: BoundingBox,
    pub health: i32,
    pub in_flight: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectileView {
    pub owner: Side,
    pub serial: u64,
    pub bounds: BoundingBox,
}

/// Immutable copy of everything drawn in one frame.
///
/// Порядок детерминирован: корабли по Side, пули по (owner, serial).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub crafts: Vec<CraftView>,
    pub projectiles: Vec<ProjectileView>,
}

impl FrameSnapshot {
    pub fn capture(world: &mut World, tick: u64) -> Self {
        let mut projectiles: Vec<ProjectileView> = world
            .query::<(&Projectile, &BoundingBox)>()
            .iter(world)
            .map(|(projectile, bounds)| ProjectileView {
                owner: projectile.owner,
                serial: projectile.serial,
                bounds: *bounds,
            })
            .collect();
        projectiles.sort_by_key(|view| (view.owner, view.serial));

        let mut crafts: Vec<CraftView> = world
            .query::<(&Craft, &BoundingBox, &Health)>()
            .iter(world)
            .map(|(craft, bounds, health)| CraftView {
                side: craft.side,
                bounds: *bounds,
                health: health.current,
                in_flight: projectiles
                    .iter()
                    .filter(|view| view.owner == craft.side)
                    .count(),
            })
            .collect();
        crafts.sort_by_key(|view| view.side);

        Self {
            tick,
            crafts,
            projectiles,
        }
    }

    pub fn craft(&self, side: Side) -> Option<&CraftView> {
        self.crafts.iter().find(|view| view.side == side)
    }

    pub fn health(&self, side: Side) -> Option<i32> {
        self.craft(side).map(|view| view.health)
    }
}

/// Presentation that only records what it was asked to do.
///
/// Для headless прогонов и тестов.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresentation {
    pub frames_rendered: u64,
    pub last_frame: Option<FrameSnapshot>,
    pub banners: Vec<(u64, String)>,
    pub sounds: Vec<SoundCue>,
}

impl RecordingPresentation {
    pub fn sound_count(&self, cue: SoundCue) -> usize {
        self.sounds.iter().filter(|played| **played == cue).count()
    }
}

impl Presentation for RecordingPresentation {
    fn render_frame(&mut self, frame: &FrameSnapshot) {
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
    }

    fn render_result_banner(&mut self, text: &str) {
        let tick = self.last_frame.as_ref().map_or(0, |frame| frame.tick);
        self.banners.push((tick, text.to_string()));
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }
}

/// Presentation для headless бинарника: пишет события матча в logger
#[derive(Debug, Default)]
pub struct LogPresentation {
    last_health: Option<(i32, i32)>,
}

impl Presentation for LogPresentation {
    fn render_frame(&mut self, frame: &FrameSnapshot) {
        let health = (
            frame.health(Side::Left).unwrap_or_default(),
            frame.health(Side::Right).unwrap_or_default(),
        );
        if self.last_health != Some(health) {
            crate::logger::log_info(&format!(
                "Tick {}: Health {} / {}",
                frame.tick, health.0, health.1
            ));
            self.last_health = Some(health);
        }
    }

    fn render_result_banner(&mut self, text: &str) {
        crate::logger::log_info(&format!("=== {} ===", text));
    }

    fn play_sound(&mut self, cue: SoundCue) {
        crate::logger::log(&format!("♪ {:?}", cue));
    }
}
