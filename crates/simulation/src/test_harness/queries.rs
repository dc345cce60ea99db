//! Tick control, pointer input, and state queries.

use bevy::prelude::*;

use crate::cues::{Cue, PlayCueEvent};
use crate::grid::{GridCell, Marker, ObjectLayer, TerrainLayer};
use crate::physics::LinearVelocity;
use crate::pointer::{PointerEvent, TargetPoint};
use crate::TickCounter;

use super::TestDrive;

impl TestDrive {
    // -----------------------------------------------------------------------
    // Tick control
    // -----------------------------------------------------------------------

    /// Run N fixed ticks by directly executing the `FixedUpdate` schedule.
    /// This bypasses Bevy's time system, so every call is exactly N ticks of
    /// the configured fixed timestep.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Run one tick and return the acceleration and cap it ended with.
    pub fn tick_and_sample(&mut self) -> (f32, f32) {
        self.tick(1);
        let drive = self.drive_state();
        (drive.acceleration, drive.max_speed)
    }

    // -----------------------------------------------------------------------
    // Pointer input
    // -----------------------------------------------------------------------

    /// Send a pointer event and run the `Update` schedule so input systems see it.
    pub fn send_pointer(&mut self, event: PointerEvent) {
        self.app.world_mut().send_event(event);
        self.app.world_mut().run_schedule(Update);
    }

    pub fn press(&mut self, location: Vec2) {
        self.send_pointer(PointerEvent::pressed(location));
    }

    pub fn drag(&mut self, location: Vec2) {
        self.send_pointer(PointerEvent::moved(location));
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    /// Get a reference to any resource.
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn terrain(&self) -> &TerrainLayer {
        self.resource::<TerrainLayer>()
    }

    pub fn objects(&self) -> &ObjectLayer {
        self.resource::<ObjectLayer>()
    }

    pub fn marker(&self, cell: GridCell) -> Marker {
        self.objects().marker(cell)
    }

    pub fn target(&self) -> Vec2 {
        self.resource::<TargetPoint>().0
    }

    pub fn tick_count(&self) -> u64 {
        self.resource::<TickCounter>().0
    }

    pub fn vehicle_position(&self) -> Vec2 {
        self.app
            .world()
            .get::<Transform>(self.vehicle())
            .map(|t| t.translation.truncate())
            .unwrap_or(Vec2::NAN)
    }

    /// Vehicle heading in radians, from its rotation about Z.
    pub fn heading(&self) -> f32 {
        self.app
            .world()
            .get::<Transform>(self.vehicle())
            .map(|t| t.rotation.to_euler(EulerRot::ZYX).0)
            .unwrap_or(f32::NAN)
    }

    pub fn velocity(&self) -> Vec2 {
        self.app
            .world()
            .get::<LinearVelocity>(self.vehicle())
            .map(|v| v.0)
            .unwrap_or(Vec2::NAN)
    }

    pub fn vehicle_cell(&self) -> Option<GridCell> {
        self.geometry().cell_at(self.vehicle_position())
    }

    /// Take every cue fired since the last call.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        self.app
            .world_mut()
            .resource_mut::<Events<PlayCueEvent>>()
            .drain()
            .map(|e| e.cue)
            .collect()
    }
}
