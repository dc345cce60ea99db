use bevy::prelude::*;

use simulation::motion::Vehicle;

const VEHICLE_SIZE: Vec2 = Vec2::new(48.0, 26.0);
const VEHICLE_COLOR: Color = Color::srgb(0.93, 0.93, 0.95);

/// Give the vehicle a body sprite. Longer than wide so the heading reads.
pub fn attach_vehicle_sprite(mut commands: Commands, vehicles: Query<Entity, Added<Vehicle>>) {
    for entity in &vehicles {
        commands.entity(entity).insert(Sprite {
            color: VEHICLE_COLOR,
            custom_size: Some(VEHICLE_SIZE),
            ..default()
        });
    }
}
