use bevy::prelude::*;
use starduel_simulation::SoundCue;

use crate::assets::GameAssets;

pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, play_sound_cues);
    }
}

/// One-shot player per cue, despawned when playback ends
fn play_sound_cues(
    mut commands: Commands,
    assets: Res<GameAssets>,
    mut cues: EventReader<SoundCue>,
) {
    for cue in cues.read() {
        let source = match cue {
            SoundCue::Fire => assets.fire_sound.clone(),
            SoundCue::Hit => assets.hit_sound.clone(),
        };
        commands.spawn((AudioPlayer::new(source), PlaybackSettings::DESPAWN));
    }
}
