//! Marching-squares tile selection
//!
//! Every cell is bounded by four corners. The solid/empty pattern of those
//! corners is packed into a 4-bit tile ID which renderers use as a position
//! in a 4x4 tile atlas. Bit order and corner order are fixed: changing
//! either misapplies every tile in existing art.

use ndarray::Array2;

use crate::io::error::{GenerationError, IndexSpace, Result};
use crate::spatial::grid::{CornerGrid, CornerState};

/// Number of distinct tile configurations
pub const TILE_CONFIGURATIONS: usize = 16;

/// Bit contributed by each corner, in clockwise order from top-left
const CORNER_BITS: [u8; 4] = [1, 2, 4, 8];

/// A cell identified by its row and column in the cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Cell row
    pub row: usize,
    /// Cell column
    pub col: usize,
}

impl Cell {
    /// Create a cell reference
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Corner indices of this cell, clockwise from top-left
    ///
    /// Top-left, top-right, bottom-right, bottom-left.
    pub const fn corner_positions(&self) -> [[usize; 2]; 4] {
        let (r, c) = (self.row, self.col);
        [[r, c], [r, c + 1], [r + 1, c + 1], [r + 1, c]]
    }

    /// Read the four corner states of this cell from a grid
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGrid` if the grid has no cells, or `OutOfBounds`
    /// (in cell space) if the cell lies outside the grid
    pub fn corners(&self, grid: &CornerGrid) -> Result<[CornerState; 4]> {
        ensure_cells(grid, "read cell corners")?;
        if self.row >= grid.rows() || self.col >= grid.cols() {
            return Err(GenerationError::OutOfBounds {
                space: IndexSpace::Cell,
                row: self.row,
                col: self.col,
                max_row: grid.rows() - 1,
                max_col: grid.cols() - 1,
            });
        }

        let mut states = [CornerState::Empty; 4];
        for (state, [row, col]) in states.iter_mut().zip(self.corner_positions()) {
            *state = grid.get(row, col)?;
        }
        Ok(states)
    }
}

/// Marching-squares configuration of a cell, in `0..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileId(u8);

impl TileId {
    /// Tile with no solid corners
    pub const EMPTY: Self = Self(0);
    /// Tile with every corner solid
    pub const SOLID: Self = Self(15);

    /// Raw 4-bit value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Position of the tile in a 4x4 atlas as `(atlas_row, atlas_col)`
    pub const fn atlas_position(self) -> (u8, u8) {
        (self.0 & 3, self.0 >> 2)
    }
}

impl From<TileId> for u8 {
    fn from(id: TileId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

/// Pack four corner states, clockwise from top-left, into a tile ID
pub fn tile_id_from_corners(corners: [CornerState; 4]) -> TileId {
    let bits = corners
        .iter()
        .zip(CORNER_BITS)
        .filter(|(state, _)| state.is_solid())
        .fold(0, |acc, (_, bit)| acc | bit);
    TileId(bits)
}

/// Tile ID of a single cell
///
/// # Errors
///
/// Returns `DegenerateGrid` if the grid has zero rows or columns, or
/// `OutOfBounds` if the cell is outside the grid
pub fn cell_tile_id(grid: &CornerGrid, cell_row: usize, cell_col: usize) -> Result<TileId> {
    Cell::new(cell_row, cell_col)
        .corners(grid)
        .map(tile_id_from_corners)
}

/// Tile IDs for every cell of the grid, shaped `rows` x `cols`
///
/// # Errors
///
/// Returns `DegenerateGrid` if the grid has zero rows or columns
pub fn tile_map(grid: &CornerGrid) -> Result<Array2<TileId>> {
    ensure_cells(grid, "build tile map")?;
    let corners = grid.corners();

    let state_at = |row: usize, col: usize| {
        corners
            .get((row, col))
            .copied()
            .unwrap_or(CornerState::Empty)
    };

    Ok(Array2::from_shape_fn((grid.rows(), grid.cols()), |(row, col)| {
        let cell = Cell::new(row, col);
        let states = cell.corner_positions().map(|[r, c]| state_at(r, c));
        tile_id_from_corners(states)
    }))
}

/// Pixel size of one cell when the grid is drawn into a viewport
///
/// # Errors
///
/// Returns `DegenerateGrid` if the grid has zero rows or columns, since the
/// per-cell size would be a division by zero
pub fn cell_pixel_size(
    grid: &CornerGrid,
    viewport_width: u32,
    viewport_height: u32,
) -> Result<(u32, u32)> {
    ensure_cells(grid, "map cells to screen space")?;
    let cols = u32::try_from(grid.cols()).unwrap_or(u32::MAX);
    let rows = u32::try_from(grid.rows()).unwrap_or(u32::MAX);
    Ok((viewport_width / cols, viewport_height / rows))
}

fn ensure_cells(grid: &CornerGrid, operation: &'static str) -> Result<()> {
    if grid.is_degenerate() {
        return Err(GenerationError::DegenerateGrid {
            operation,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    Ok(())
}
