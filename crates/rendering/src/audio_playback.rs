//! Audio playback for gameplay cues.
//!
//! Consumes `PlayCueEvent`s and spawns a one-shot `AudioPlayer` per cue.
//! Overlapping cues each get their own player; nothing waits on completion.

use bevy::prelude::*;

use simulation::cues::PlayCueEvent;

fn play_cue_sounds(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut events: EventReader<PlayCueEvent>,
) {
    for event in events.read() {
        debug!("Playing cue {:?} ({})", event.cue, event.cue.sound_path());
        commands.spawn((
            AudioPlayer::new(asset_server.load(event.cue.sound_path())),
            PlaybackSettings::DESPAWN,
        ));
    }
}

/// Plugin that wires up the cue consumer system.
pub struct AudioPlaybackPlugin;

impl Plugin for AudioPlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, play_cue_sounds);
    }
}
