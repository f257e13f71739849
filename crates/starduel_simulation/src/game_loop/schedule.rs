//! `SimulationTick` schedule and the plugin that wires it.
//!
//! Порядок систем внутри тика (строго последовательно, один поток):
//! 1. process_input_edges: Quit / Fire
//! 2. tick_result_hold: отсчёт баннера (только в Terminating)
//! 3. move_crafts: movement resolver для обоих кораблей
//! 4. advance_projectiles: сдвиг, коллизии → HitEvent
//! 5. apply_hits: drain HitEvent → Health
//! 6. detect_game_over: MatchResult → Terminating
//!
//! Шаги 3–6 выполняются только в фазе Running.

use bevy::ecs::schedule::{ExecutorKind, ScheduleLabel};
use bevy::prelude::*;

use crate::combat::{self, advance_projectiles, apply_hits, detect_game_over};
use crate::components::{Craft, Health, Magazine, ProjectileSerial, Side};
use crate::config::MatchConfig;
use crate::game_loop::{simulation_running, tick_result_hold, LoopPhase};
use crate::geometry::BoundingBox;
use crate::input::{process_input_edges, HeldControls, InputEdge};
use crate::movement::move_crafts;

/// One fixed-rate simulation tick.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationTick;

/// Главный plugin симуляции: ресурсы, события, schedule и оба корабля
pub struct StarduelPlugin {
    pub config: MatchConfig,
}

impl StarduelPlugin {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }
}

impl Default for StarduelPlugin {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl Plugin for StarduelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<LoopPhase>()
            .init_resource::<HeldControls>()
            .init_resource::<ProjectileSerial>()
            .add_event::<InputEdge>();
        combat::register_events(app);

        app.init_schedule(SimulationTick);
        app.edit_schedule(SimulationTick, |schedule| {
            schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        });

        app.add_systems(
            SimulationTick,
            (
                process_input_edges,
                tick_result_hold,
                (move_crafts, advance_projectiles, apply_hits, detect_game_over)
                    .chain()
                    .run_if(simulation_running),
            )
                .chain(),
        );

        spawn_crafts(app.world_mut(), &self.config);
    }
}

/// Spawns both craft at their configured positions.
pub fn spawn_crafts(world: &mut World, config: &MatchConfig) {
    for side in Side::BOTH {
        world.spawn((
            Craft { side },
            BoundingBox::from_parts(config.spawn(side), config.craft_size),
            Health::new(config.starting_health),
            Magazine::new(config.ammo_capacity),
        ));
    }
}

/// Exclusive system for hosts that drive ticks from their own schedule
/// (например, `FixedUpdate` в клиенте).
pub fn run_simulation_tick(world: &mut World) {
    world.run_schedule(SimulationTick);
}
