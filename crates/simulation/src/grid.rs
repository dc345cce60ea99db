use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CELL_SIZE, GRID_COLUMNS, GRID_ROWS};

/// Integer (column, row) coordinate into a tile map.
///
/// Signed so that positions off the map still produce a cell; such cells are
/// simply out of range for every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub column: i32,
    pub row: i32,
}

impl GridCell {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

/// Marker placed on the object layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    #[default]
    None,
    Duck,
    GasCan,
}

impl Marker {
    pub fn is_some(self) -> bool {
        self != Marker::None
    }
}

/// A land tile on the terrain layer. Water is the absence of a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandTile {
    /// Noise height in [0, 1], used only for shading.
    pub elevation: f32,
}

// ---------------------------------------------------------------------------
// TileGrid
// ---------------------------------------------------------------------------

/// Dense row-major 2D array indexed by (column, row).
///
/// Reads outside the grid return `T::default()`, which every layer uses as
/// its "no tile" sentinel.
#[derive(Debug, Clone)]
pub struct TileGrid<T> {
    cells: Vec<T>,
    pub columns: usize,
    pub rows: usize,
}

impl<T: Copy + Default> TileGrid<T> {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![T::default(); columns * rows],
            columns,
            rows,
        }
    }

    #[inline]
    fn index(&self, cell: GridCell) -> Option<usize> {
        if self.in_bounds(cell) {
            Some(cell.row as usize * self.columns + cell.column as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn in_bounds(&self, cell: GridCell) -> bool {
        cell.column >= 0
            && cell.row >= 0
            && (cell.column as usize) < self.columns
            && (cell.row as usize) < self.rows
    }

    #[inline]
    pub fn get(&self, cell: GridCell) -> T {
        self.index(cell).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Write a cell. Returns `false` (and does nothing) when out of range.
    pub fn set(&mut self, cell: GridCell, value: T) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (GridCell, T)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().map(move |(i, value)| {
            let cell = GridCell::new((i % columns) as i32, (i / columns) as i32);
            (cell, *value)
        })
    }
}

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

/// The "land" layer. Read-only once the scene is running.
#[derive(Resource, Debug, Clone)]
pub struct TerrainLayer {
    pub tiles: TileGrid<Option<LandTile>>,
}

impl TerrainLayer {
    /// An all-water layer.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            tiles: TileGrid::new(columns, rows),
        }
    }

    pub fn tile(&self, cell: GridCell) -> Option<LandTile> {
        self.tiles.get(cell)
    }

    pub fn is_land(&self, cell: GridCell) -> bool {
        self.tile(cell).is_some()
    }

    pub fn set_land(&mut self, cell: GridCell, elevation: f32) -> bool {
        self.tiles.set(cell, Some(LandTile { elevation }))
    }

    pub fn land_count(&self) -> usize {
        self.tiles.iter().filter(|(_, t)| t.is_some()).count()
    }
}

/// The secondary layer holding collectible markers.
#[derive(Resource, Debug, Clone)]
pub struct ObjectLayer {
    pub tiles: TileGrid<Marker>,
}

impl ObjectLayer {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            tiles: TileGrid::new(columns, rows),
        }
    }

    pub fn marker(&self, cell: GridCell) -> Marker {
        self.tiles.get(cell)
    }

    pub fn set_marker(&mut self, cell: GridCell, marker: Marker) -> bool {
        self.tiles.set(cell, marker)
    }

    pub fn clear(&mut self, cell: GridCell) {
        self.tiles.set(cell, Marker::None);
    }

    pub fn count(&self, marker: Marker) -> usize {
        self.tiles.iter().filter(|(_, m)| *m == marker).count()
    }

    /// Number of cells holding any marker.
    pub fn populated(&self) -> usize {
        self.tiles.iter().filter(|(_, m)| m.is_some()).count()
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Cell-size geometry shared by both layers. `origin` is the scene position
/// of the bottom-left corner of cell (0, 0).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TileMapGeometry {
    pub columns: usize,
    pub rows: usize,
    pub cell_size: f32,
    pub origin: Vec2,
}

impl Default for TileMapGeometry {
    fn default() -> Self {
        Self::centered(GRID_COLUMNS, GRID_ROWS, CELL_SIZE)
    }
}

impl TileMapGeometry {
    /// A map whose centre sits on the scene origin.
    pub fn centered(columns: usize, rows: usize, cell_size: f32) -> Self {
        let size = Vec2::new(columns as f32, rows as f32) * cell_size;
        Self {
            columns,
            rows,
            cell_size,
            origin: -size * 0.5,
        }
    }

    /// Cell containing a scene position, or `None` off the map.
    pub fn cell_at(&self, position: Vec2) -> Option<GridCell> {
        let local = (position - self.origin) / self.cell_size;
        if !local.is_finite() {
            return None;
        }
        let column = local.x.floor();
        let row = local.y.floor();
        if column < 0.0 || row < 0.0 || column >= self.columns as f32 || row >= self.rows as f32
        {
            return None;
        }
        Some(GridCell::new(column as i32, row as i32))
    }

    pub fn cell_center(&self, cell: GridCell) -> Vec2 {
        self.origin + (Vec2::new(cell.column as f32, cell.row as f32) + 0.5) * self.cell_size
    }

    /// Scene frame covered by the map.
    pub fn bounds(&self) -> Rect {
        let size = Vec2::new(self.columns as f32, self.rows as f32) * self.cell_size;
        Rect::from_corners(self.origin, self.origin + size)
    }
}
