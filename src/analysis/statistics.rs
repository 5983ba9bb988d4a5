//! Summary statistics of a corner grid and its tile configurations

use crate::spatial::grid::{CornerGrid, CornerState};
use crate::spatial::tiles::{TILE_CONFIGURATIONS, tile_map};

/// Corner state counts and tile usage for a single map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStatistics {
    /// Solid corners
    pub solid: usize,
    /// Empty corners
    pub empty: usize,
    /// Flooded corners
    pub flooded: usize,
    /// Perimeter corners
    pub perimeter: usize,
    /// Spawn corners
    pub spawn: usize,
    /// Number of cells using each tile ID, indexed by ID
    ///
    /// All zero for a grid without cells.
    pub tile_histogram: [usize; TILE_CONFIGURATIONS],
}

impl MapStatistics {
    /// Gather statistics from a grid
    pub fn from_grid(grid: &CornerGrid) -> Self {
        let mut stats = Self {
            solid: 0,
            empty: 0,
            flooded: 0,
            perimeter: 0,
            spawn: 0,
            tile_histogram: [0; TILE_CONFIGURATIONS],
        };

        for (_, state) in grid.indexed_corners() {
            match state {
                CornerState::Solid => stats.solid += 1,
                CornerState::Empty => stats.empty += 1,
                CornerState::Flooded => stats.flooded += 1,
                CornerState::Perimeter => stats.perimeter += 1,
                CornerState::Spawn => stats.spawn += 1,
            }
        }

        // Degenerate grids have no cells to tally
        if let Ok(tiles) = tile_map(grid) {
            for tile in &tiles {
                if let Some(bin) = stats.tile_histogram.get_mut(usize::from(tile.value())) {
                    *bin += 1;
                }
            }
        }

        stats
    }

    /// Total number of corners counted
    pub const fn corner_count(&self) -> usize {
        self.solid + self.empty + self.flooded + self.perimeter + self.spawn
    }

    /// Fraction of corners that are solid, 0.0 for an empty tally
    pub fn solid_fraction(&self) -> f64 {
        let total = self.corner_count();
        if total == 0 {
            return 0.0;
        }
        self.solid as f64 / total as f64
    }

    /// Number of corners carrying a flood fill classification
    pub const fn classified(&self) -> usize {
        self.flooded + self.perimeter + self.spawn
    }

    /// Number of cells that are neither fully open nor fully solid
    pub fn edge_cells(&self) -> usize {
        let total: usize = self.tile_histogram.iter().sum();
        let uniform = self.tile_histogram.first().copied().unwrap_or(0)
            + self.tile_histogram.last().copied().unwrap_or(0);
        total - uniform
    }
}
