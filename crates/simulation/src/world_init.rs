// =============================================================================
// Scene authoring: geometry, island terrain, empty object layer, vehicle.
// =============================================================================

use bevy::prelude::*;

use crate::config::{CELL_SIZE, GRID_COLUMNS, GRID_ROWS};
use crate::game_params::DriveParams;
use crate::grid::{ObjectLayer, TerrainLayer, TileMapGeometry};
use crate::motion::{DriveState, Vehicle};
use crate::physics::LinearVelocity;
use crate::terrain;

/// Marker resource that, when present, causes `init_world` to skip scene
/// authoring. Used by the test harness, which builds its own layers.
#[derive(Resource)]
pub struct SkipWorldInit;

pub fn init_world(
    mut commands: Commands,
    params: Res<DriveParams>,
    skip: Option<Res<SkipWorldInit>>,
) {
    if skip.is_some() {
        return;
    }

    let geometry = TileMapGeometry::centered(GRID_COLUMNS, GRID_ROWS, CELL_SIZE);
    let mut terrain_layer = TerrainLayer::new(GRID_COLUMNS, GRID_ROWS);
    terrain::generate_island(&mut terrain_layer, params.terrain_seed);

    let start = match terrain::nearest_land_to_center(&terrain_layer) {
        Some(cell) => geometry.cell_center(cell),
        None => {
            warn!("Island seed {} produced no land; starting on water", params.terrain_seed);
            Vec2::ZERO
        }
    };

    info!(
        "Authored {}x{} map: {} land cells, vehicle at {:?}",
        GRID_COLUMNS,
        GRID_ROWS,
        terrain_layer.land_count(),
        start
    );

    commands.spawn(vehicle_bundle(start, &params));
    commands.insert_resource(geometry);
    commands.insert_resource(terrain_layer);
    commands.insert_resource(ObjectLayer::new(GRID_COLUMNS, GRID_ROWS));
}

/// Components for a vehicle at rest. The cap starts at the land value; the
/// first sensing pass corrects it if the vehicle starts on water.
pub fn vehicle_bundle(
    position: Vec2,
    params: &DriveParams,
) -> (Vehicle, Transform, LinearVelocity, DriveState) {
    (
        Vehicle,
        Transform::from_translation(position.extend(1.0)),
        LinearVelocity::default(),
        DriveState::new(params.land_max_speed),
    )
}
