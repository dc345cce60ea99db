//! One-time scatter of collectible markers onto the object layer.
//!
//! Picks `count` cells uniformly over the whole grid. Picks are independent,
//! so a cell can be chosen twice and the later pick overwrites the earlier;
//! the number of visible markers is therefore at most `count`.

use bevy::prelude::*;
use rand::Rng;

use crate::game_params::DriveParams;
use crate::grid::{GridCell, ObjectLayer, TerrainLayer};
use crate::sim_rng::PlacementRng;
use crate::tileset::MarkerTemplates;

/// Scatter markers and return how many distinct cells hold one afterwards.
///
/// Water cells (no terrain tile) receive the duck template, land cells the
/// gas-can template.
pub fn scatter_objects<R: Rng + ?Sized>(
    terrain: &TerrainLayer,
    objects: &mut ObjectLayer,
    templates: &MarkerTemplates,
    count: usize,
    rng: &mut R,
) -> usize {
    let columns = objects.tiles.columns;
    let rows = objects.tiles.rows;
    if columns == 0 || rows == 0 {
        return objects.populated();
    }

    for _ in 0..count {
        let cell = GridCell::new(
            rng.gen_range(0..columns) as i32,
            rng.gen_range(0..rows) as i32,
        );
        let template = templates.for_terrain(terrain.is_land(cell));
        objects.set_marker(cell, template.marker);
    }

    objects.populated()
}

/// Startup system: scatter `DriveParams::object_count` markers.
pub fn setup_objects(
    params: Res<DriveParams>,
    templates: Res<MarkerTemplates>,
    terrain: Res<TerrainLayer>,
    mut objects: ResMut<ObjectLayer>,
    mut rng: ResMut<PlacementRng>,
) {
    let placed = scatter_objects(
        &terrain,
        &mut objects,
        &templates,
        params.object_count,
        &mut rng.0,
    );
    info!(
        "Placed {} markers from {} picks ({} ducks, {} gas cans)",
        placed,
        params.object_count,
        objects.count(templates.duck.marker),
        objects.count(templates.gas_can.marker),
    );
}
