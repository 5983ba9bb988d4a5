use bitvec::prelude::*;
use std::fmt;

use crate::spatial::grid::CornerGrid;

/// Offsets of the 8 Moore neighbours as (row, col) deltas
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Frozen snapshot of which corners are solid
///
/// Stored row-major, one bit per corner. Neighbour counts are always taken
/// against this snapshot so a pass never sees its own writes.
#[derive(Clone, Debug)]
pub struct SolidMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl SolidMask {
    /// Snapshot the solid corners of a grid
    pub fn from_grid(grid: &CornerGrid) -> Self {
        let rows = grid.corner_rows();
        let cols = grid.corner_cols();
        let mut bits = bitvec![0; rows * cols];
        for (index, (_, state)) in grid.indexed_corners().enumerate() {
            if state.is_solid() {
                bits.set(index, true);
            }
        }
        Self { bits, rows, cols }
    }

    /// Corner rows covered by the mask
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Corner columns covered by the mask
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Solidity of a corner, or `None` when the position is off the grid
    pub fn get(&self, row: isize, col: isize) -> Option<bool> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.cols)?;
        self.bits.get(row * self.cols + col).as_deref().copied()
    }

    /// Test whether an in-bounds corner is solid
    pub fn is_solid(&self, row: usize, col: usize) -> bool {
        row < self.rows
            && col < self.cols
            && self.bits.get(row * self.cols + col).as_deref() == Some(&true)
    }

    /// Count solid corners among the 8 Moore neighbours of `(row, col)`
    ///
    /// Positions outside the grid count as solid when `edge_solid` is set
    /// and are ignored otherwise.
    pub fn moore_count(&self, row: usize, col: usize, edge_solid: bool) -> u8 {
        let (row, col) = (row as isize, col as isize);
        let mut count = 0;
        for (dr, dc) in MOORE_OFFSETS {
            if self.get(row + dr, col + dc).unwrap_or(edge_solid) {
                count += 1;
            }
        }
        count
    }

    /// Number of solid corners in the snapshot
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

impl fmt::Display for SolidMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SolidMask({}x{}, {} solid)",
            self.rows,
            self.cols,
            self.count()
        )
    }
}
