//! # TestDrive — headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for driving the scene without a window, renderer, or audio device.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;
use bevy::prelude::*;

use crate::game_params::DriveParams;
use crate::grid::{ObjectLayer, TerrainLayer, TileMapGeometry};
use crate::world_init::{vehicle_bundle, SkipWorldInit};
use crate::SimulationPlugin;

/// Default test map: a long, narrow strip so straight-line runs stay on the map.
pub const TEST_COLUMNS: usize = 64;
pub const TEST_ROWS: usize = 8;
pub const TEST_CELL_SIZE: f32 = 64.0;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to set up terrain, markers, and the vehicle, then call
/// `tick()` to advance fixed ticks and query/assert on the resulting state.
pub struct TestDrive {
    app: App,
}

impl TestDrive {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// An all-water 64x8 map with no markers, the vehicle at the map centre
    /// and the target on top of it.
    pub fn new() -> Self {
        Self::with_map(
            TEST_COLUMNS,
            TEST_ROWS,
            DriveParams {
                object_count: 0,
                placement_seed: Some(0),
                ..DriveParams::default()
            },
        )
    }

    /// An all-water map of the given size with custom parameters. Startup
    /// placement runs with `params.object_count` against the all-water layer.
    pub fn with_map(columns: usize, rows: usize, params: DriveParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert these BEFORE SimulationPlugin so init_world skips and the
        // plugin keeps our parameters instead of the defaults.
        app.insert_resource(SkipWorldInit);
        app.insert_resource(params.clone());
        app.add_plugins(SimulationPlugin);

        app.insert_resource(TileMapGeometry::centered(columns, rows, TEST_CELL_SIZE));
        app.insert_resource(TerrainLayer::new(columns, rows));
        app.insert_resource(ObjectLayer::new(columns, rows));
        app.world_mut().spawn(vehicle_bundle(Vec2::ZERO, &params));

        // Run one update so Startup systems execute (init_world will no-op).
        app.update();

        Self { app }
    }
}

impl Default for TestDrive {
    fn default() -> Self {
        Self::new()
    }
}
