pub const GRID_COLUMNS: usize = 48;
pub const GRID_ROWS: usize = 32;
pub const CELL_SIZE: f32 = 64.0;
pub const MAP_WIDTH: f32 = GRID_COLUMNS as f32 * CELL_SIZE;
pub const MAP_HEIGHT: f32 = GRID_ROWS as f32 * CELL_SIZE;

/// Fixed simulation cadence. Acceleration steps are applied once per tick,
/// not scaled by elapsed time, so this also sets how fast the car ramps up.
pub const FIXED_TICK_HZ: f64 = 60.0;

/// Terrain noise value at or above which a cell receives a land tile.
pub const LAND_THRESHOLD: f32 = 0.42;
pub const TERRAIN_BASE_FREQUENCY: f32 = 0.09;
/// Strength of the radial falloff that pushes the map edges under water.
pub const ISLAND_FALLOFF: f32 = 0.7;
