//! Procedural cave generation on a corner grid with marching-squares tile selection
//!
//! Maps are stored as the lattice of corners shared by their cells. A random
//! fill and cellular automaton passes shape the walls, a flood fill measures
//! and classifies the open space, and every cell's four corners select one of
//! sixteen marching-squares tiles.

#![forbid(unsafe_code)]

/// Fill, smoothing, connectivity analysis and the generation driver
pub mod algorithm;
/// Summary statistics for generated maps
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Corner grid storage and marching-squares tile selection
pub mod spatial;

pub use io::error::{GenerationError, Result};
pub use spatial::grid::{CornerGrid, CornerState};
