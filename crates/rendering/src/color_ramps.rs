//! Tile colours for the terrain and object layers.

use bevy::prelude::*;

use simulation::config::LAND_THRESHOLD;
use simulation::grid::LandTile;
use simulation::tileset::TileGroup;

pub const WATER: Color = Color::srgb(0.16, 0.42, 0.72);
const SHORE: [f32; 3] = [0.86, 0.80, 0.56];
const HIGHLAND: [f32; 3] = [0.22, 0.48, 0.20];

/// Sand near the shoreline, darker green inland.
pub fn land_color(elevation: f32) -> Color {
    let t = ((elevation - LAND_THRESHOLD) / (1.0 - LAND_THRESHOLD)).clamp(0.0, 1.0);
    Color::srgb(
        SHORE[0] + (HIGHLAND[0] - SHORE[0]) * t,
        SHORE[1] + (HIGHLAND[1] - SHORE[1]) * t,
        SHORE[2] + (HIGHLAND[2] - SHORE[2]) * t,
    )
}

pub fn terrain_color(tile: Option<LandTile>) -> Color {
    match tile {
        Some(land) => land_color(land.elevation),
        None => WATER,
    }
}

pub fn group_color(group: &TileGroup) -> Color {
    let [r, g, b] = group.color;
    Color::srgb(r, g, b)
}
