//! Cellular automaton smoothing over the corner lattice
//!
//! One pass snapshots the grid, counts solid Moore neighbours for every
//! corner against that snapshot, and builds a complete new grid from the
//! birth/survival thresholds. The new grid then replaces the old one in a
//! single assignment, so no corner ever reads a value written in the same
//! pass. Isolated specks die, weakly supported pockets fill in, and large
//! open or solid regions stay put.

use ndarray::Array2;

use crate::algorithm::mask::SolidMask;
use crate::io::configuration::{DEFAULT_BIRTH_LIMIT, DEFAULT_SURVIVE_MAX, DEFAULT_SURVIVE_MIN};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{CornerGrid, CornerState};

/// Thresholds and boundary policy for one smoothing pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutomatonRules {
    /// State assumed for neighbour positions outside the grid
    pub edge_value: CornerState,
    /// Empty corners turn solid when their solid count exceeds this
    pub birth_limit: u8,
    /// Lowest solid count at which a solid corner survives
    pub survive_min: u8,
    /// Highest solid count at which a solid corner survives
    pub survive_max: u8,
}

impl Default for AutomatonRules {
    fn default() -> Self {
        Self {
            edge_value: CornerState::Solid,
            birth_limit: DEFAULT_BIRTH_LIMIT,
            survive_min: DEFAULT_SURVIVE_MIN,
            survive_max: DEFAULT_SURVIVE_MAX,
        }
    }
}

impl AutomatonRules {
    /// Check that the survival window is not inverted
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `survive_min > survive_max`
    pub fn validate(&self) -> Result<()> {
        if self.survive_min > self.survive_max {
            return Err(invalid_parameter(
                "survive_min",
                &self.survive_min,
                &format!("must not exceed survive_max ({})", self.survive_max),
            ));
        }
        Ok(())
    }

    /// Next state of a corner given its current state and solid count
    ///
    /// Classification markers are treated as empty.
    pub const fn next_state(&self, current: CornerState, solid_neighbors: u8) -> CornerState {
        let solid = if current.is_solid() {
            solid_neighbors >= self.survive_min && solid_neighbors <= self.survive_max
        } else {
            solid_neighbors > self.birth_limit
        };

        if solid {
            CornerState::Solid
        } else {
            CornerState::Empty
        }
    }
}

/// Compute one smoothing pass without touching the input grid
pub fn step(grid: &CornerGrid, rules: &AutomatonRules) -> CornerGrid {
    let snapshot = SolidMask::from_grid(grid);
    let edge_solid = rules.edge_value.is_solid();
    let corners = grid.corners();

    let next = Array2::from_shape_fn(corners.dim(), |(row, col)| {
        let current = corners
            .get((row, col))
            .copied()
            .unwrap_or(CornerState::Empty);
        let solid_neighbors = snapshot.moore_count(row, col, edge_solid);
        rules.next_state(current, solid_neighbors)
    });

    CornerGrid::from_corners(next)
}

/// Apply one smoothing pass in place
pub fn smooth(grid: &mut CornerGrid, rules: &AutomatonRules) {
    *grid = step(grid, rules);
}

/// Apply `passes` smoothing passes in place
pub fn smooth_passes(grid: &mut CornerGrid, rules: &AutomatonRules, passes: usize) {
    for pass in 0..passes {
        smooth(grid, rules);
        log::trace!(
            "Smoothing pass {}/{passes}: {} solid corners",
            pass + 1,
            grid.count(CornerState::Solid)
        );
    }
}
