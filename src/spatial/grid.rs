//! Corner-state grid with the (rows + 1) x (cols + 1) sizing invariant
//!
//! A map of `rows` x `cols` cells is stored as the lattice of corners the
//! cells share. Corners live in a single row-major array and are only
//! reachable through bounds-checked accessors.

use ndarray::{Array2, ArrayView2};

use crate::io::error::{Result, corner_out_of_bounds, invalid_parameter};
use crate::spatial::extension::{Extendable, resize_extendable};

/// State of a single corner
///
/// Outside of a connectivity analysis every corner is `Solid` or `Empty`.
/// The remaining states are classification markers that only the flood fill
/// writes, and that it clears again before every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CornerState {
    /// Wall
    Solid,
    /// Open floor
    #[default]
    Empty,
    /// Reached by the flood fill, far from any wall
    Flooded,
    /// Reached by the flood fill, close to a wall
    Perimeter,
    /// Reached by the flood fill, inside a tight pocket
    Spawn,
}

impl CornerState {
    /// Check if the corner is a wall
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Solid)
    }

    /// Check if the corner carries a flood fill classification
    pub const fn is_classified(self) -> bool {
        matches!(self, Self::Flooded | Self::Perimeter | Self::Spawn)
    }

    /// Canonical two-state form: everything that is not solid is empty
    pub const fn canonical(self) -> Self {
        if self.is_solid() {
            Self::Solid
        } else {
            Self::Empty
        }
    }
}

impl Extendable for CornerState {
    fn padding_value() -> Self {
        Self::Empty
    }
}

/// Lattice of corner states for a grid of cells
///
/// `rows` and `cols` count cells; the corner array always has one more row
/// and one more column than that, because neighbouring cells share corners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerGrid {
    corners: Array2<CornerState>,
    rows: usize,
    cols: usize,
}

impl Default for CornerGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CornerGrid {
    /// Create an empty grid with zero cells (a single `Empty` corner)
    pub fn new() -> Self {
        Self {
            corners: Array2::from_elem((1, 1), CornerState::Empty),
            rows: 0,
            cols: 0,
        }
    }

    /// Create a grid of `rows` x `cols` cells with every corner `Empty`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the corner lattice cannot be addressed
    pub fn with_size(rows: usize, cols: usize) -> Result<Self> {
        let dims = lattice_dims(rows, cols)?;
        Ok(Self {
            corners: Array2::from_elem(dims, CornerState::Empty),
            rows,
            cols,
        })
    }

    /// Number of cell rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cell columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of corner rows (`rows + 1`)
    pub const fn corner_rows(&self) -> usize {
        self.rows + 1
    }

    /// Number of corner columns (`cols + 1`)
    pub const fn corner_cols(&self) -> usize {
        self.cols + 1
    }

    /// Total number of corners in the lattice
    pub const fn corner_count(&self) -> usize {
        self.corner_rows() * self.corner_cols()
    }

    /// Check if the grid has no cells at all in either dimension
    pub const fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Resize to `rows` x `cols` cells
    ///
    /// The overlapping region is preserved, corners past the new bound are
    /// discarded, and newly introduced corners start `Empty`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the corner lattice cannot be addressed;
    /// the grid is left untouched
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let dims = lattice_dims(rows, cols)?;
        self.corners = resize_extendable(&self.corners, dims);
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    /// Change the number of cell rows, keeping the column count
    ///
    /// # Errors
    ///
    /// Same as [`CornerGrid::resize`]
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        self.resize(rows, self.cols)
    }

    /// Change the number of cell columns, keeping the row count
    ///
    /// # Errors
    ///
    /// Same as [`CornerGrid::resize`]
    pub fn set_cols(&mut self, cols: usize) -> Result<()> {
        self.resize(self.rows, cols)
    }

    /// Read a corner
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` unless `row <= rows` and `col <= cols`
    pub fn get(&self, row: usize, col: usize) -> Result<CornerState> {
        self.corners
            .get((row, col))
            .copied()
            .ok_or_else(|| corner_out_of_bounds(row, col, self.rows, self.cols))
    }

    /// Write a corner
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` unless `row <= rows` and `col <= cols`
    pub fn set(&mut self, row: usize, col: usize, state: CornerState) -> Result<()> {
        let (rows, cols) = (self.rows, self.cols);
        let corner = self
            .corners
            .get_mut((row, col))
            .ok_or_else(|| corner_out_of_bounds(row, col, rows, cols))?;
        *corner = state;
        Ok(())
    }

    /// Check if a corner index lies inside the lattice
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row <= self.rows && col <= self.cols
    }

    /// Set every corner to the same state
    pub fn fill(&mut self, state: CornerState) {
        self.corners.fill(state);
    }

    /// Count corners in the given state
    pub fn count(&self, state: CornerState) -> usize {
        self.corners.iter().filter(|&&corner| corner == state).count()
    }

    /// Return every corner to its canonical two-state form
    ///
    /// Anything that is not `Solid` becomes `Empty`.
    pub fn reset_classification(&mut self) {
        self.corners.mapv_inplace(CornerState::canonical);
    }

    /// Read-only view of the corner lattice in row-major order
    pub fn corners(&self) -> ArrayView2<'_, CornerState> {
        self.corners.view()
    }

    /// Iterate over `([row, col], state)` pairs in row-major order
    pub fn indexed_corners(&self) -> impl Iterator<Item = ([usize; 2], CornerState)> + '_ {
        self.corners
            .indexed_iter()
            .map(|((row, col), &state)| ([row, col], state))
    }

    /// Mutable access to the lattice for bulk transforms within the crate
    pub(crate) const fn corners_mut(&mut self) -> &mut Array2<CornerState> {
        &mut self.corners
    }

    /// Build a grid directly from a corner lattice
    ///
    /// The cell dimensions are derived from the lattice shape.
    pub(crate) fn from_corners(corners: Array2<CornerState>) -> Self {
        let (corner_rows, corner_cols) = corners.dim();
        Self {
            corners,
            rows: corner_rows.saturating_sub(1),
            cols: corner_cols.saturating_sub(1),
        }
    }
}

// Corner lattice shape for a cell grid. ndarray caps element counts at
// `isize::MAX`, so both the `+ 1` and the product are checked.
fn lattice_dims(rows: usize, cols: usize) -> Result<(usize, usize)> {
    let corner_rows = rows
        .checked_add(1)
        .ok_or_else(|| invalid_parameter("rows", &rows, &"corner row count overflows"))?;
    let corner_cols = cols
        .checked_add(1)
        .ok_or_else(|| invalid_parameter("cols", &cols, &"corner column count overflows"))?;

    let addressable = corner_rows
        .checked_mul(corner_cols)
        .is_some_and(|count| isize::try_from(count).is_ok());
    if !addressable {
        return Err(invalid_parameter(
            "rows",
            &rows,
            &format!("{corner_rows}x{corner_cols} corner lattice is too large"),
        ));
    }

    Ok((corner_rows, corner_cols))
}
