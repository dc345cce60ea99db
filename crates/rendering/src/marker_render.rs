//! Marker sprites follow the object layer: one sprite per populated cell,
//! removed when the vehicle clears the cell.

use bevy::prelude::*;
use bevy::utils::HashMap;

use simulation::grid::{GridCell, Marker, ObjectLayer, TileMapGeometry};
use simulation::tileset::TileSet;

use crate::color_ramps::group_color;

const MARKER_FRACTION: f32 = 0.55;

#[derive(Component)]
pub struct MarkerSprite {
    pub cell: GridCell,
}

/// Sprite entity per populated cell.
#[derive(Resource, Default)]
pub struct MarkerSprites {
    pub by_cell: HashMap<GridCell, Entity>,
}

/// Cells whose sprite must go, and cells that need a new sprite.
pub fn marker_diff(
    objects: &ObjectLayer,
    shown: &HashMap<GridCell, Entity>,
) -> (Vec<GridCell>, Vec<(GridCell, Marker)>) {
    let stale = shown
        .keys()
        .copied()
        .filter(|cell| !objects.marker(*cell).is_some())
        .collect();
    let missing = objects
        .tiles
        .iter()
        .filter(|(cell, marker)| marker.is_some() && !shown.contains_key(cell))
        .collect();
    (stale, missing)
}

pub fn sync_marker_sprites(
    mut commands: Commands,
    objects: Res<ObjectLayer>,
    geometry: Res<TileMapGeometry>,
    tileset: Res<TileSet>,
    mut sprites: ResMut<MarkerSprites>,
) {
    if !objects.is_changed() {
        return;
    }

    let (stale, missing) = marker_diff(&objects, &sprites.by_cell);
    for cell in stale {
        if let Some(entity) = sprites.by_cell.remove(&cell) {
            commands.entity(entity).despawn();
        }
    }

    let size = Vec2::splat(geometry.cell_size * MARKER_FRACTION);
    for (cell, marker) in missing {
        let Some(group) = tileset.group_for(marker) else {
            warn!("No tile group for {:?}, marker at {:?} not drawn", marker, cell);
            continue;
        };
        let center = geometry.cell_center(cell);
        let entity = commands
            .spawn((
                MarkerSprite { cell },
                Sprite {
                    color: group_color(group),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_xyz(center.x, center.y, 0.5),
            ))
            .id();
        sprites.by_cell.insert(cell, entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_spawns_new_markers() {
        let mut objects = ObjectLayer::new(4, 4);
        objects.set_marker(GridCell::new(1, 2), Marker::Duck);
        let (stale, missing) = marker_diff(&objects, &HashMap::default());
        assert!(stale.is_empty());
        assert_eq!(missing, vec![(GridCell::new(1, 2), Marker::Duck)]);
    }

    #[test]
    fn test_diff_removes_cleared_cells() {
        let objects = ObjectLayer::new(4, 4);
        let mut shown = HashMap::default();
        shown.insert(GridCell::new(3, 3), Entity::PLACEHOLDER);
        let (stale, missing) = marker_diff(&objects, &shown);
        assert_eq!(stale, vec![GridCell::new(3, 3)]);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_diff_keeps_existing_sprites() {
        let mut objects = ObjectLayer::new(4, 4);
        objects.set_marker(GridCell::new(0, 0), Marker::GasCan);
        let mut shown = HashMap::default();
        shown.insert(GridCell::new(0, 0), Entity::PLACEHOLDER);
        let (stale, missing) = marker_diff(&objects, &shown);
        assert!(stale.is_empty());
        assert!(missing.is_empty());
    }
}
