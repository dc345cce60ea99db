use bevy::prelude::*;

use simulation::grid::{GridCell, TerrainLayer, TileMapGeometry};

use crate::color_ramps::terrain_color;

#[derive(Component)]
pub struct TerrainTile {
    pub cell: GridCell,
}

/// One flat sprite per cell. The terrain layer never changes after
/// startup, so these are spawned once.
pub fn spawn_terrain_tiles(
    mut commands: Commands,
    geometry: Res<TileMapGeometry>,
    terrain: Res<TerrainLayer>,
) {
    let size = Vec2::splat(geometry.cell_size);
    let mut spawned = 0usize;
    for (cell, tile) in terrain.tiles.iter() {
        let center = geometry.cell_center(cell);
        commands.spawn((
            TerrainTile { cell },
            Sprite {
                color: terrain_color(tile),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
        ));
        spawned += 1;
    }
    debug!("Spawned {} terrain tiles", spawned);
}
