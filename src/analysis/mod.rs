//! Analysis of generated maps

/// Corner and tile statistics for a grid
pub mod statistics;
