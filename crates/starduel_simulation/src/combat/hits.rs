//! Hit event queue → health mutation.

use bevy::prelude::*;

use crate::combat::{HitEvent, SoundCue};
use crate::components::{Craft, Health};

/// System: drain всех `HitEvent` этого тика
///
/// Каждое событие: Health цели -1 и `SoundCue::Hit`. Очередь опустошается
/// полностью, повторно событие не читается.
pub fn apply_hits(
    mut hits: ResMut<Events<HitEvent>>,
    mut crafts: Query<(&Craft, &mut Health)>,
    mut cues: EventWriter<SoundCue>,
) {
    for hit in hits.drain() {
        let Some((_, mut health)) = crafts
            .iter_mut()
            .find(|(craft, _)| craft.side == hit.target)
        else {
            crate::logger::log_warning(&format!("HitEvent for missing {:?} craft", hit.target));
            continue;
        };

        health.take_hit();
        cues.write(SoundCue::Hit);

        crate::logger::log_info(&format!(
            "💥 {:?} hit (HP: {} → {})",
            hit.target,
            health.current + 1,
            health.current
        ));
    }
}
