//! Independent Bernoulli fill of the corner lattice

use rand::Rng;

use crate::spatial::grid::{CornerGrid, CornerState};

/// Fill every corner from its own draw against `solid_probability`
///
/// Each corner is `Solid` when a uniform draw in `[0, 1)` falls below the
/// probability, otherwise `Empty`. A probability of 0 leaves the grid all
/// empty and any value of 1 or more makes it all solid. Previous states,
/// classification markers included, are overwritten.
pub fn randomize_all<R: Rng>(grid: &mut CornerGrid, solid_probability: f64, rng: &mut R) {
    for corner in grid.corners_mut().iter_mut() {
        *corner = if rng.random::<f64>() < solid_probability {
            CornerState::Solid
        } else {
            CornerState::Empty
        };
    }
    log::debug!(
        "Randomized {} corners at p={solid_probability}",
        grid.corner_count()
    );
}
