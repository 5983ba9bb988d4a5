//! Flood fill connectivity and cave classification
//!
//! A flood fill grows over 4-connected `Empty` corners from a seed and tags
//! every corner it reaches by how many of its 8 Moore neighbours are solid.
//! Positions off the grid always count as solid here, unlike the automaton
//! where the edge policy is chosen by the caller.
//!
//! The fill uses an explicit work stack. Corners are classified when they
//! are pushed, which takes them out of the `Empty` state and doubles as the
//! visited check.

use bitvec::prelude::*;

use crate::algorithm::mask::SolidMask;
use crate::io::configuration::{FLOODED_MAX_SOLID_NEIGHBORS, SPAWN_MIN_SOLID_NEIGHBORS};
use crate::io::error::{Result, corner_out_of_bounds};
use crate::spatial::grid::{CornerGrid, CornerState};

/// Offsets of the 4 axis-aligned neighbours as (row, col) deltas
const VON_NEUMANN_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Per-class corner totals left behind by a flood fill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationCounts {
    /// Deep interior corners
    pub flooded: usize,
    /// Corners close to a wall
    pub perimeter: usize,
    /// Corners in tight pockets
    pub spawn: usize,
}

impl ClassificationCounts {
    /// Total number of classified corners
    pub const fn total(&self) -> usize {
        self.flooded + self.perimeter + self.spawn
    }

    fn record(&mut self, state: CornerState) {
        match state {
            CornerState::Flooded => self.flooded += 1,
            CornerState::Perimeter => self.perimeter += 1,
            CornerState::Spawn => self.spawn += 1,
            CornerState::Solid | CornerState::Empty => {}
        }
    }
}

/// Cave accepted by [`locate_cave`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaveReport {
    /// Corner the accepted flood fill started from
    pub seed: [usize; 2],
    /// Classification of the accepted region
    pub counts: ClassificationCounts,
}

impl CaveReport {
    /// Number of corners in the cave
    pub const fn size(&self) -> usize {
        self.counts.total()
    }
}

/// Classify a reached corner by its Moore solid count
pub const fn classify(solid_neighbors: u8) -> CornerState {
    if solid_neighbors <= FLOODED_MAX_SOLID_NEIGHBORS {
        CornerState::Flooded
    } else if solid_neighbors < SPAWN_MIN_SOLID_NEIGHBORS {
        CornerState::Perimeter
    } else {
        CornerState::Spawn
    }
}

/// Flood fill from a seed corner and classify the region it reaches
///
/// Any classification from an earlier call is cleared first. A solid seed
/// grows nothing. Returns the number of corners classified.
///
/// # Errors
///
/// Returns `OutOfBounds` if the seed is outside the corner lattice
pub fn flood_fill(grid: &mut CornerGrid, seed_row: usize, seed_col: usize) -> Result<usize> {
    if !grid.contains(seed_row, seed_col) {
        return Err(corner_out_of_bounds(
            seed_row,
            seed_col,
            grid.rows(),
            grid.cols(),
        ));
    }

    grid.reset_classification();
    let walls = SolidMask::from_grid(grid);
    Ok(fill_region(grid, &walls, [seed_row, seed_col], None))
}

// Grows one region over a grid that is already in two-state form.
// Flood fill only writes non-solid markers, so `walls` stays accurate for
// the whole traversal.
fn fill_region(
    grid: &mut CornerGrid,
    walls: &SolidMask,
    seed: [usize; 2],
    mut explored: Option<&mut BitVec>,
) -> usize {
    let corner_cols = grid.corner_cols();
    let mut visit = |grid: &mut CornerGrid, [row, col]: [usize; 2]| -> bool {
        if grid.get(row, col).ok() != Some(CornerState::Empty) {
            return false;
        }
        let state = classify(walls.moore_count(row, col, true));
        if grid.set(row, col, state).is_err() {
            return false;
        }
        if let Some(explored) = explored.as_deref_mut() {
            explored.set(row * corner_cols + col, true);
        }
        true
    };

    if !visit(grid, seed) {
        return 0;
    }

    let mut classified = 1;
    let mut stack = vec![seed];
    while let Some([row, col]) = stack.pop() {
        for (dr, dc) in VON_NEUMANN_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if visit(grid, [r, c]) {
                classified += 1;
                stack.push([r, c]);
            }
        }
    }

    classified
}

/// Search the grid for a cave of at least `min_corner_count` corners
///
/// Seeds are tried in row-major order. The first region large enough is
/// left classified in the grid and reported; otherwise the grid is reset to
/// its two-state form and `None` is returned.
///
/// Corners inside a region already measured too small are not used as
/// seeds again, since every seed of a region classifies it identically.
pub fn locate_cave(grid: &mut CornerGrid, min_corner_count: usize) -> Option<CaveReport> {
    grid.reset_classification();
    let walls = SolidMask::from_grid(grid);
    let corner_cols = grid.corner_cols();
    let mut explored = bitvec![0; grid.corner_count()];

    for row in 0..grid.corner_rows() {
        for col in 0..corner_cols {
            if explored.get(row * corner_cols + col).as_deref() == Some(&true) {
                continue;
            }

            let size = fill_region(grid, &walls, [row, col], Some(&mut explored));

            if size >= min_corner_count {
                let counts = classification_counts(grid);
                log::debug!("Cave of {size} corners found from seed ({row}, {col})");
                return Some(CaveReport {
                    seed: [row, col],
                    counts,
                });
            }

            // Only the accepted region may stay classified
            if size > 0 {
                grid.reset_classification();
            }
        }
    }
    log::debug!("No cave of at least {min_corner_count} corners");
    None
}

/// Check whether the grid holds a cave of at least `min_corner_count` corners
///
/// On success the cave's classification stays in the grid for inspection.
/// On failure the grid is returned to its two-state form.
pub fn find_cave(grid: &mut CornerGrid, min_corner_count: usize) -> bool {
    locate_cave(grid, min_corner_count).is_some()
}

/// Tally the classification markers currently in the grid
pub fn classification_counts(grid: &CornerGrid) -> ClassificationCounts {
    let mut counts = ClassificationCounts::default();
    for (_, state) in grid.indexed_corners() {
        counts.record(state);
    }
    counts
}

/// Corners classified as spawn pockets, in row-major order
pub fn spawn_points(grid: &CornerGrid) -> Vec<[usize; 2]> {
    grid.indexed_corners()
        .filter(|&(_, state)| state == CornerState::Spawn)
        .map(|(position, _)| position)
        .collect()
}
