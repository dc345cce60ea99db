//! Scene binding: validate the collaborators once and hand out direct handles.
//!
//! After `bind_scene` runs, systems reach the vehicle through
//! [`SceneHandles`] instead of searching for it, and the marker templates are
//! available as a resource. Anything missing here aborts startup.

use bevy::prelude::*;

use crate::error::{abort_on_config_error, SceneConfigError};
use crate::grid::{ObjectLayer, TerrainLayer, TileMapGeometry};
use crate::motion::Vehicle;
use crate::tileset::{MarkerTemplates, TileSet};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneHandles {
    pub vehicle: Entity,
}

/// Check that every required collaborator is present and resolve templates.
pub fn resolve_scene(
    world: &mut World,
) -> Result<(SceneHandles, MarkerTemplates), SceneConfigError> {
    let vehicles: Vec<Entity> = world
        .query_filtered::<Entity, With<Vehicle>>()
        .iter(world)
        .collect();
    let vehicle = match vehicles.as_slice() {
        [] => return Err(SceneConfigError::MissingVehicle),
        [one] => *one,
        many => return Err(SceneConfigError::DuplicateVehicle(many.len())),
    };

    if !world.contains_resource::<TileMapGeometry>() {
        return Err(SceneConfigError::MissingLayer("TileMapGeometry"));
    }
    if !world.contains_resource::<TerrainLayer>() {
        return Err(SceneConfigError::MissingLayer("TerrainLayer"));
    }
    if !world.contains_resource::<ObjectLayer>() {
        return Err(SceneConfigError::MissingLayer("ObjectLayer"));
    }

    let templates = match world.get_resource::<TileSet>() {
        Some(tileset) => MarkerTemplates::resolve(tileset)?,
        None => return Err(SceneConfigError::MissingLayer("TileSet")),
    };

    Ok((SceneHandles { vehicle }, templates))
}

/// Startup system. Exclusive so it sees everything `init_world` inserted.
pub fn bind_scene(world: &mut World) {
    let (handles, templates) = abort_on_config_error(resolve_scene(world));
    info!(
        "Scene bound: vehicle {:?}, templates '{}' / '{}'",
        handles.vehicle, templates.duck.name, templates.gas_can.name
    );
    world.insert_resource(handles);
    world.insert_resource(templates);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_world() -> World {
        let mut world = World::new();
        world.insert_resource(TileMapGeometry::centered(4, 4, 16.0));
        world.insert_resource(TerrainLayer::new(4, 4));
        world.insert_resource(ObjectLayer::new(4, 4));
        world.insert_resource(TileSet::embedded().expect("embedded tile set parses"));
        world
    }

    #[test]
    fn test_complete_scene_resolves() {
        let mut world = complete_world();
        let vehicle = world.spawn(Vehicle).id();
        let (handles, templates) = resolve_scene(&mut world).expect("scene is complete");
        assert_eq!(handles.vehicle, vehicle);
        assert_eq!(templates.duck.name, "Duck");
    }

    #[test]
    fn test_missing_vehicle() {
        let mut world = complete_world();
        let err = resolve_scene(&mut world).unwrap_err();
        assert!(matches!(err, SceneConfigError::MissingVehicle));
    }

    #[test]
    fn test_two_vehicles_rejected() {
        let mut world = complete_world();
        world.spawn(Vehicle);
        world.spawn(Vehicle);
        let err = resolve_scene(&mut world).unwrap_err();
        assert!(matches!(err, SceneConfigError::DuplicateVehicle(2)));
    }

    #[test]
    fn test_missing_object_layer() {
        let mut world = complete_world();
        world.remove_resource::<ObjectLayer>();
        world.spawn(Vehicle);
        let err = resolve_scene(&mut world).unwrap_err();
        assert!(matches!(err, SceneConfigError::MissingLayer("ObjectLayer")));
    }

    #[test]
    fn test_missing_terrain_layer() {
        let mut world = complete_world();
        world.remove_resource::<TerrainLayer>();
        world.spawn(Vehicle);
        let err = resolve_scene(&mut world).unwrap_err();
        assert!(matches!(err, SceneConfigError::MissingLayer("TerrainLayer")));
    }

    #[test]
    fn test_incomplete_tileset() {
        let mut world = complete_world();
        world.insert_resource(TileSet { groups: Vec::new() });
        world.spawn(Vehicle);
        let err = resolve_scene(&mut world).unwrap_err();
        assert!(matches!(err, SceneConfigError::MissingTileGroup(_)));
    }

    #[test]
    fn test_template_marker_mismatch_rejected() {
        let mut world = complete_world();
        let set = TileSet::from_json(
            r#"{ "groups": [
                { "name": "Duck", "color": [1.0, 1.0, 0.0] },
                { "name": "Gas Can", "marker": "gas_can", "color": [1.0, 0.0, 0.0] }
            ] }"#,
        )
        .expect("valid json");
        world.insert_resource(set);
        world.spawn(Vehicle);
        let err = resolve_scene(&mut world).unwrap_err();
        assert!(matches!(err, SceneConfigError::TemplateMarkerMismatch { .. }));
    }

    #[test]
    #[should_panic(expected = "Scene has no vehicle node")]
    fn test_bind_scene_aborts_without_vehicle() {
        let mut world = complete_world();
        bind_scene(&mut world);
    }

    #[test]
    fn test_bind_scene_inserts_handles() {
        let mut world = complete_world();
        let vehicle = world.spawn(Vehicle).id();
        bind_scene(&mut world);
        assert_eq!(world.resource::<SceneHandles>().vehicle, vehicle);
        assert!(world.contains_resource::<MarkerTemplates>());
    }
}
