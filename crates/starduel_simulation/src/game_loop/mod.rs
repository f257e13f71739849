//! Game loop / scheduler
//!
//! Однопоточный кооперативный цикл с фиксированной частотой:
//!
//! ```text
//! pace → poll input → SimulationTick → sound cues → render (или баннер)
//! ```
//!
//! Вся игра живёт в одном Bevy `World`; presentation и pacer передаются
//! в `GameLoop` при создании (никаких глобальных окон/аудио).

use bevy::prelude::*;

use crate::combat::{MatchEnded, MatchResult, SoundCue};
use crate::components::Side;
use crate::config::{ConfigError, MatchConfig};
use crate::input::{HeldControls, InputFrame, InputSource};

pub mod pacer;
pub mod phase;
pub mod presentation;
pub mod schedule;

pub use pacer::{FramePacer, TickPacer, Unpaced};
pub use phase::{simulation_running, tick_result_hold, LoopPhase};
pub use presentation::{
    CraftView, FrameSnapshot, LogPresentation, Presentation, ProjectileView,
    RecordingPresentation,
};
pub use schedule::{run_simulation_tick, spawn_crafts, SimulationTick, StarduelPlugin};

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    /// `None` if the players quit mid-match.
    pub result: Option<MatchResult>,
    pub ticks: u64,
    pub left_health: i32,
    pub right_health: i32,
}

/// Headless driver: owns the world, the presentation handle and the pacer.
pub struct GameLoop<P: Presentation, T: TickPacer = FramePacer> {
    app: App,
    presentation: P,
    pacer: T,
    tick: u64,
}

impl<P: Presentation> GameLoop<P, FramePacer> {
    /// Real-time loop paced at the configured tick rate.
    pub fn realtime(config: MatchConfig, presentation: P) -> Result<Self, ConfigError> {
        let pacer = FramePacer::new(config.tick_duration());
        Self::new(config, presentation, pacer)
    }
}

impl<P: Presentation, T: TickPacer> GameLoop<P, T> {
    pub fn new(config: MatchConfig, presentation: P, pacer: T) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            crate::logger::log_error(&format!("Rejected match config: {}", err));
            return Err(err);
        }

        Ok(Self {
            app: crate::create_headless_app(config),
            presentation,
            pacer,
            tick: 0,
        })
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn phase(&self) -> LoopPhase {
        *self.app.world().resource::<LoopPhase>()
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&mut self) -> FrameSnapshot {
        FrameSnapshot::capture(self.app.world_mut(), self.tick)
    }

    /// Runs one tick with `frame` as this tick's input. No pacing.
    pub fn tick(&mut self, frame: InputFrame) -> LoopPhase {
        if self.phase().is_stopped() {
            return self.phase();
        }
        self.tick += 1;

        let world = self.app.world_mut();
        *world.resource_mut::<HeldControls>() = frame.held;
        for edge in frame.edges {
            world.send_event(edge);
        }

        world.run_schedule(SimulationTick);

        let cues: Vec<SoundCue> = world.resource_mut::<Events<SoundCue>>().drain().collect();
        let ended = world.resource_mut::<Events<MatchEnded>>().drain().last();
        let phase = *world.resource::<LoopPhase>();

        for cue in cues {
            self.presentation.play_sound(cue);
        }

        match (phase, ended) {
            (LoopPhase::Running, _) => {
                let frame = FrameSnapshot::capture(self.app.world_mut(), self.tick);
                self.presentation.render_frame(&frame);
            }
            (LoopPhase::Terminating { .. }, Some(ended)) => {
                let frame = FrameSnapshot::capture(self.app.world_mut(), self.tick);
                self.presentation.render_frame(&frame);
                if let Some(text) = ended.result.banner_text() {
                    self.presentation.render_result_banner(&text);
                }
            }
            // Баннер уже на экране, пока идёт hold ничего не перерисовываем
            _ => {}
        }

        phase
    }

    /// Paces and ticks until the loop stops.
    pub fn run(&mut self, input: &mut impl InputSource) -> MatchSummary {
        crate::logger::log_info("Match started");

        loop {
            self.pacer.wait_for_next_tick();
            let frame = input.poll();
            if self.tick(frame).is_stopped() {
                break;
            }
        }

        self.summary()
    }

    pub fn summary(&mut self) -> MatchSummary {
        let snapshot = self.snapshot();
        MatchSummary {
            result: self.phase().result(),
            ticks: self.tick,
            left_health: snapshot.health(Side::Left).unwrap_or_default(),
            right_health: snapshot.health(Side::Right).unwrap_or_default(),
        }
    }
}
