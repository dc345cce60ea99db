use bevy::prelude::*;

pub mod audio_playback;
pub mod camera;
pub mod color_ramps;
pub mod egui_input_guard;
pub mod marker_render;
pub mod pointer_input;
pub mod terrain_render;
pub mod vehicle_render;

use simulation::SimulationUpdateSet;

use marker_render::MarkerSprites;

/// Sprites, camera, pointer capture, and cue playback for the driving scene.
/// Reads simulation state; the only thing it writes back is `PointerEvent`s.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MarkerSprites>()
            .add_systems(
                Startup,
                (camera::setup_camera, terrain_render::spawn_terrain_tiles)
                    .chain()
                    .after(simulation::placement::setup_objects),
            )
            .add_systems(
                Update,
                pointer_input::capture_pointer.before(SimulationUpdateSet::Input),
            )
            .add_systems(
                Update,
                (
                    camera::fit_camera_to_map,
                    vehicle_render::attach_vehicle_sprite,
                    marker_render::sync_marker_sprites,
                )
                    .in_set(SimulationUpdateSet::Visual),
            );

        app.add_plugins(audio_playback::AudioPlaybackPlugin);
    }
}
