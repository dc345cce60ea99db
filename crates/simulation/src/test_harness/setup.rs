//! Builder methods for terrain, markers, and vehicle setup in integration tests.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::grid::{GridCell, Marker, ObjectLayer, TerrainLayer, TileMapGeometry};
use crate::motion::DriveState;
use crate::physics::LinearVelocity;
use crate::placement::scatter_objects;
use crate::pointer::TargetPoint;
use crate::scene::SceneHandles;
use crate::tileset::MarkerTemplates;

use super::TestDrive;

impl TestDrive {
    // -----------------------------------------------------------------------
    // Terrain and markers
    // -----------------------------------------------------------------------

    /// Give a single cell a land tile.
    pub fn with_land(mut self, cell: GridCell) -> Self {
        self.app
            .world_mut()
            .resource_mut::<TerrainLayer>()
            .set_land(cell, 0.5);
        self
    }

    /// Give every cell in the rectangle (inclusive) a land tile.
    pub fn with_land_rect(mut self, c0: i32, r0: i32, c1: i32, r1: i32) -> Self {
        {
            let mut terrain = self.app.world_mut().resource_mut::<TerrainLayer>();
            for row in r0..=r1 {
                for column in c0..=c1 {
                    terrain.set_land(GridCell::new(column, row), 0.5);
                }
            }
        }
        self
    }

    /// Put a marker on the object layer.
    pub fn with_marker(mut self, cell: GridCell, marker: Marker) -> Self {
        self.app
            .world_mut()
            .resource_mut::<ObjectLayer>()
            .set_marker(cell, marker);
        self
    }

    /// Run object placement against the current terrain with a fixed seed.
    pub fn with_scattered_objects(mut self, count: usize, seed: u64) -> Self {
        let world = self.app.world_mut();
        let templates = world.resource::<MarkerTemplates>().clone();
        world.resource_scope(|world, mut objects: Mut<ObjectLayer>| {
            let terrain = world.resource::<TerrainLayer>();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            scatter_objects(terrain, &mut objects, &templates, count, &mut rng);
        });
        self
    }

    // -----------------------------------------------------------------------
    // Vehicle and target
    // -----------------------------------------------------------------------

    /// Move the vehicle to a scene position.
    pub fn with_vehicle_at(mut self, position: Vec2) -> Self {
        let vehicle = self.vehicle();
        if let Some(mut transform) = self.app.world_mut().get_mut::<Transform>(vehicle) {
            transform.translation.x = position.x;
            transform.translation.y = position.y;
        }
        self
    }

    /// Move the vehicle to the centre of a cell.
    pub fn with_vehicle_in_cell(self, cell: GridCell) -> Self {
        let position = self.geometry().cell_center(cell);
        self.with_vehicle_at(position)
    }

    /// Set the acceleration scalar directly.
    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        let vehicle = self.vehicle();
        if let Some(mut drive) = self.app.world_mut().get_mut::<DriveState>(vehicle) {
            drive.acceleration = acceleration;
        }
        self
    }

    /// Set the vehicle's current velocity directly.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        let vehicle = self.vehicle();
        if let Some(mut v) = self.app.world_mut().get_mut::<LinearVelocity>(vehicle) {
            v.0 = velocity;
        }
        self
    }

    /// Place the target point without going through pointer events.
    pub fn with_target(mut self, target: Vec2) -> Self {
        self.app.world_mut().resource_mut::<TargetPoint>().0 = target;
        self
    }

    pub(crate) fn vehicle(&self) -> Entity {
        self.app.world().resource::<SceneHandles>().vehicle
    }

    pub fn geometry(&self) -> TileMapGeometry {
        *self.app.world().resource::<TileMapGeometry>()
    }

    /// Drive state straight from the ECS, for builders that need it.
    pub fn drive_state(&self) -> DriveState {
        *self
            .app
            .world()
            .get::<DriveState>(self.vehicle())
            .expect("vehicle has DriveState")
    }
}
