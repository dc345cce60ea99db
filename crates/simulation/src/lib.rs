use bevy::prelude::*;

pub mod config;
pub mod cues;
pub mod error;
pub mod game_params;
pub mod grid;
pub mod motion;
pub mod physics;
pub mod placement;
pub mod pointer;
pub mod scene;
pub mod sensing;
pub mod sim_rng;
pub mod simulation_sets;
pub mod terrain;
pub mod tileset;
pub mod world_init;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::{SimulationSet, SimulationUpdateSet};

use config::FIXED_TICK_HZ;
use cues::PlayCueEvent;
use game_params::DriveParams;
use pointer::{PointerEvent, TargetPoint};
use sim_rng::PlacementRng;
use tileset::TileSet;

/// Fixed ticks run since startup.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn advance_tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

/// Game logic for the driving scene. Runs headless; the rendering and UI
/// crates only read its state and feed it pointer events.
///
/// Insert `DriveParams` (and optionally `TileSet`) before adding this plugin
/// to override the defaults.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<TileSet>() {
            app.insert_resource(error::abort_on_config_error(TileSet::embedded()));
        }

        // DriveParams first: PlacementRng reads its seed from it.
        app.init_resource::<DriveParams>()
            .init_resource::<PlacementRng>()
            .init_resource::<TargetPoint>()
            .init_resource::<TickCounter>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
            .add_event::<PlayCueEvent>()
            .add_event::<PointerEvent>();

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Sense,
                SimulationSet::PhysicsStep,
                SimulationSet::Steer,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (SimulationUpdateSet::Input, SimulationUpdateSet::Visual).chain(),
        );

        app.add_systems(
            Startup,
            (
                world_init::init_world,
                scene::bind_scene,
                placement::setup_objects,
            )
                .chain(),
        )
        .add_systems(
            FixedUpdate,
            (advance_tick_counter, sensing::sense_terrain_and_pickups)
                .chain()
                .in_set(SimulationSet::Sense),
        )
        .add_systems(
            FixedUpdate,
            physics::physics_step.in_set(SimulationSet::PhysicsStep),
        )
        .add_systems(
            FixedUpdate,
            motion::steer_vehicle.in_set(SimulationSet::Steer),
        )
        .add_systems(
            Update,
            pointer::apply_pointer_events.in_set(SimulationUpdateSet::Input),
        );
    }
}
