use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::config::{ISLAND_FALLOFF, LAND_THRESHOLD, TERRAIN_BASE_FREQUENCY};
use crate::grid::{GridCell, TerrainLayer};

/// Author the land layer: noise shaped into an island by a radial falloff.
/// Cells whose value reaches `LAND_THRESHOLD` get a land tile; the rest stay water.
pub fn generate_island(terrain: &mut TerrainLayer, seed: i32) {
    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(TERRAIN_BASE_FREQUENCY));

    let columns = terrain.tiles.columns;
    let rows = terrain.tiles.rows;
    let half_w = columns as f32 * 0.5;
    let half_h = rows as f32 * 0.5;

    for row in 0..rows {
        for column in 0..columns {
            let raw = noise.get_noise_2d(column as f32, row as f32);
            let base = (raw + 1.0) * 0.5; // normalize to 0..1

            // 0 at the centre, 1 at the edge midpoints
            let dx = (column as f32 + 0.5 - half_w) / half_w;
            let dy = (row as f32 + 0.5 - half_h) / half_h;
            let falloff = (dx * dx + dy * dy).sqrt() * ISLAND_FALLOFF;

            let elevation = (base + 0.3 - falloff).clamp(0.0, 1.0);
            if elevation >= LAND_THRESHOLD {
                terrain.set_land(GridCell::new(column as i32, row as i32), elevation);
            }
        }
    }
}

/// Land cell nearest to the map centre, if the map has any land.
pub fn nearest_land_to_center(terrain: &TerrainLayer) -> Option<GridCell> {
    let cx = terrain.tiles.columns as f32 * 0.5;
    let cy = terrain.tiles.rows as f32 * 0.5;
    terrain
        .tiles
        .iter()
        .filter(|(_, tile)| tile.is_some())
        .map(|(cell, _)| {
            let dx = cell.column as f32 + 0.5 - cx;
            let dy = cell.row as f32 + 0.5 - cy;
            (cell, dx * dx + dy * dy)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(cell, _)| cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRID_COLUMNS, GRID_ROWS};

    #[test]
    fn test_island_has_land_and_water() {
        let mut terrain = TerrainLayer::new(GRID_COLUMNS, GRID_ROWS);
        generate_island(&mut terrain, 42);
        let land = terrain.land_count();
        assert!(land > 0, "should have some land cells");
        assert!(land < GRID_COLUMNS * GRID_ROWS, "should not be all land");
    }

    #[test]
    fn test_island_corners_are_water() {
        let mut terrain = TerrainLayer::new(GRID_COLUMNS, GRID_ROWS);
        generate_island(&mut terrain, 42);
        let last_c = GRID_COLUMNS as i32 - 1;
        let last_r = GRID_ROWS as i32 - 1;
        for cell in [
            GridCell::new(0, 0),
            GridCell::new(last_c, 0),
            GridCell::new(0, last_r),
            GridCell::new(last_c, last_r),
        ] {
            assert!(!terrain.is_land(cell), "corner {cell:?} should be water");
        }
    }

    #[test]
    fn test_deterministic() {
        let mut a = TerrainLayer::new(GRID_COLUMNS, GRID_ROWS);
        let mut b = TerrainLayer::new(GRID_COLUMNS, GRID_ROWS);
        generate_island(&mut a, 7);
        generate_island(&mut b, 7);
        for ((_, ta), (_, tb)) in a.tiles.iter().zip(b.tiles.iter()) {
            assert_eq!(ta, tb);
        }
    }

    #[test]
    fn test_elevation_bounds() {
        let mut terrain = TerrainLayer::new(GRID_COLUMNS, GRID_ROWS);
        generate_island(&mut terrain, 3);
        for (_, tile) in terrain.tiles.iter() {
            if let Some(tile) = tile {
                assert!(tile.elevation >= LAND_THRESHOLD && tile.elevation <= 1.0);
            }
        }
    }

    #[test]
    fn test_nearest_land_to_center() {
        let mut terrain = TerrainLayer::new(10, 10);
        assert_eq!(nearest_land_to_center(&terrain), None);
        terrain.set_land(GridCell::new(0, 0), 0.5);
        terrain.set_land(GridCell::new(6, 5), 0.5);
        assert_eq!(nearest_land_to_center(&terrain), Some(GridCell::new(6, 5)));
    }
}
