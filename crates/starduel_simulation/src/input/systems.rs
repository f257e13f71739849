//! Input systems (ECS)
//!
//! Edge events обрабатываются первыми в тике: Quit прерывает тик, Fire
//! спавнит пули до движения, поэтому новая пуля сдвигается уже в этом тике.

use bevy::prelude::*;

use crate::combat::{in_flight_count, try_fire, SoundCue};
use crate::components::{Craft, Magazine, Projectile, ProjectileSerial, Side};
use crate::config::MatchConfig;
use crate::game_loop::LoopPhase;
use crate::geometry::BoundingBox;
use crate::input::InputEdge;

/// System: drain всех `InputEdge` этого тика
///
/// - `Quit` → фаза `Stopped`, все edges тика отбрасываются (даже Fire перед Quit)
/// - `Fire(side)` → fire contract, только пока матч идёт
#[allow(clippy::too_many_arguments)]
pub fn process_input_edges(
    mut commands: Commands,
    mut edge_events: ResMut<Events<InputEdge>>,
    mut phase: ResMut<LoopPhase>,
    mut serial: ResMut<ProjectileSerial>,
    mut cues: EventWriter<SoundCue>,
    config: Res<MatchConfig>,
    crafts: Query<(&Craft, &BoundingBox, &Magazine)>,
    projectiles: Query<&Projectile>,
) {
    let edges: Vec<InputEdge> = edge_events.drain().collect();
    if edges.contains(&InputEdge::Quit) {
        crate::logger::log_info("Quit requested, stopping");
        *phase = LoopPhase::Stopped {
            result: phase.result(),
        };
        return;
    }

    // Счётчик ведём локально: spawn через Commands применится только после системы
    let mut in_flight = [0usize; 2];
    for side in Side::BOTH {
        in_flight[side.index()] = in_flight_count(projectiles.iter(), side);
    }

    for edge in edges {
        let InputEdge::Fire(side) = edge else {
            continue;
        };
        if !phase.is_running() {
            continue;
        }

        let Some((_, bounds, magazine)) = crafts.iter().find(|(craft, _, _)| craft.side == side)
        else {
            continue;
        };

        if try_fire(
            &mut commands,
            side,
            bounds,
            magazine,
            in_flight[side.index()],
            &mut serial,
            &mut cues,
            &config,
        ) {
            in_flight[side.index()] += 1;
        }
    }
}
