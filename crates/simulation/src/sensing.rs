//! Terrain and pickup sensing, run at the start of every tick.
//!
//! Reads the cell under the vehicle before the physics step moves it: the
//! terrain tile there picks the active speed cap, and any marker there is
//! collected (cue fired, cell cleared).

use bevy::prelude::*;

use crate::cues::{Cue, CueSink, PlayCueEvent};
use crate::game_params::DriveParams;
use crate::grid::{GridCell, Marker, ObjectLayer, TerrainLayer, TileMapGeometry};
use crate::motion::DriveState;
use crate::scene::SceneHandles;

/// Sense one cell and return the speed cap in force there.
///
/// `None` (vehicle off the map) reads as "no tile": water cap, no marker.
/// The gas-can and duck checks are independent: a cell that matched both
/// would fire both cues.
pub fn sense_cell(
    cell: Option<GridCell>,
    terrain: &TerrainLayer,
    objects: &mut ObjectLayer,
    params: &DriveParams,
    cues: &mut impl CueSink,
) -> f32 {
    let Some(cell) = cell else {
        return params.water_max_speed;
    };

    let cap = params.cap_for(terrain.is_land(cell));

    let marker = objects.marker(cell);
    if marker == Marker::GasCan {
        cues.play(Cue::Refuel);
        objects.clear(cell);
    }
    if marker == Marker::Duck {
        cues.play(Cue::Duck);
        objects.clear(cell);
    }

    cap
}

pub fn sense_terrain_and_pickups(
    handles: Res<SceneHandles>,
    params: Res<DriveParams>,
    geometry: Res<TileMapGeometry>,
    terrain: Res<TerrainLayer>,
    mut objects: ResMut<ObjectLayer>,
    mut vehicles: Query<(&Transform, &mut DriveState)>,
    mut cues: EventWriter<PlayCueEvent>,
) {
    let Ok((transform, mut drive)) = vehicles.get_mut(handles.vehicle) else {
        return;
    };
    let cell = geometry.cell_at(transform.translation.truncate());

    // Flag the layer changed only when a marker was cleared.
    let mut fired: Vec<Cue> = Vec::new();
    let cap = sense_cell(
        cell,
        &terrain,
        objects.bypass_change_detection(),
        &params,
        &mut fired,
    );
    if !fired.is_empty() {
        debug!("pickup at {:?}: {:?}", cell, fired);
        objects.set_changed();
    }
    for cue in fired {
        cues.play(cue);
    }

    if drive.max_speed != cap {
        drive.max_speed = cap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers() -> (TerrainLayer, ObjectLayer) {
        let mut terrain = TerrainLayer::new(4, 4);
        terrain.set_land(GridCell::new(1, 1), 0.5);
        terrain.set_land(GridCell::new(2, 1), 0.5);
        let mut objects = ObjectLayer::new(4, 4);
        objects.set_marker(GridCell::new(1, 1), Marker::GasCan);
        objects.set_marker(GridCell::new(3, 3), Marker::Duck);
        (terrain, objects)
    }

    #[test]
    fn test_land_cell_gives_land_cap() {
        let (terrain, mut objects) = layers();
        let mut cues: Vec<Cue> = Vec::new();
        let params = DriveParams::default();
        let cap = sense_cell(
            Some(GridCell::new(2, 1)),
            &terrain,
            &mut objects,
            &params,
            &mut cues,
        );
        assert_eq!(cap, params.land_max_speed);
        assert!(cues.is_empty());
    }

    #[test]
    fn test_water_cell_gives_water_cap() {
        let (terrain, mut objects) = layers();
        let mut cues: Vec<Cue> = Vec::new();
        let params = DriveParams::default();
        let cap = sense_cell(
            Some(GridCell::new(0, 0)),
            &terrain,
            &mut objects,
            &params,
            &mut cues,
        );
        assert_eq!(cap, params.water_max_speed);
    }

    #[test]
    fn test_off_map_is_water_without_pickup() {
        let (terrain, mut objects) = layers();
        let mut cues: Vec<Cue> = Vec::new();
        let params = DriveParams::default();
        let cap = sense_cell(None, &terrain, &mut objects, &params, &mut cues);
        assert_eq!(cap, params.water_max_speed);
        assert!(cues.is_empty());
        assert_eq!(objects.populated(), 2);
    }

    #[test]
    fn test_gas_can_pickup_fires_refuel_and_clears() {
        let (terrain, mut objects) = layers();
        let mut cues: Vec<Cue> = Vec::new();
        let cell = Some(GridCell::new(1, 1));
        sense_cell(cell, &terrain, &mut objects, &DriveParams::default(), &mut cues);
        assert_eq!(cues, vec![Cue::Refuel]);
        assert_eq!(objects.marker(GridCell::new(1, 1)), Marker::None);
    }

    #[test]
    fn test_duck_pickup_fires_duck_and_clears() {
        let (terrain, mut objects) = layers();
        let mut cues: Vec<Cue> = Vec::new();
        let cell = Some(GridCell::new(3, 3));
        let cap = sense_cell(cell, &terrain, &mut objects, &DriveParams::default(), &mut cues);
        assert_eq!(cues, vec![Cue::Duck]);
        assert_eq!(cap, 200.0);
        assert_eq!(objects.marker(GridCell::new(3, 3)), Marker::None);
    }

    #[test]
    fn test_pickup_is_idempotent() {
        let (terrain, mut objects) = layers();
        let mut cues: Vec<Cue> = Vec::new();
        let params = DriveParams::default();
        let cell = Some(GridCell::new(1, 1));
        for _ in 0..5 {
            sense_cell(cell, &terrain, &mut objects, &params, &mut cues);
        }
        assert_eq!(cues, vec![Cue::Refuel]);
        assert_eq!(objects.populated(), 1);
    }
}
