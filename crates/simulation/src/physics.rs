//! Minimal physics step standing in for the host engine's integrator.
//!
//! Moves each body by its linear velocity over one fixed timestep, then keeps
//! it inside the scene frame (the map bounds act as an edge loop).

use bevy::prelude::*;

use crate::grid::TileMapGeometry;

/// Linear velocity in scene units per second.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearVelocity(pub Vec2);

/// Advance `position` by `velocity * dt` and confine it to `frame`.
///
/// A body that would leave the frame is placed on the edge and loses the
/// velocity component that carried it out.
pub fn integrate(position: Vec2, velocity: Vec2, dt: f32, frame: Rect) -> (Vec2, Vec2) {
    let moved = position + velocity * dt;
    let clamped = moved.clamp(frame.min, frame.max);
    let mut velocity = velocity;
    if clamped.x != moved.x {
        velocity.x = 0.0;
    }
    if clamped.y != moved.y {
        velocity.y = 0.0;
    }
    (clamped, velocity)
}

pub fn physics_step(
    time: Res<Time<Fixed>>,
    geometry: Res<TileMapGeometry>,
    mut bodies: Query<(&mut Transform, &mut LinearVelocity)>,
) {
    let dt = time.timestep().as_secs_f32();
    let frame = geometry.bounds();
    for (mut transform, mut velocity) in &mut bodies {
        let (position, new_velocity) =
            integrate(transform.translation.truncate(), velocity.0, dt, frame);
        transform.translation.x = position.x;
        transform.translation.y = position.y;
        if new_velocity != velocity.0 {
            velocity.0 = new_velocity;
        }
    }
}
