//! Spatial data structures and tile selection
//!
//! This module contains spatial-related functionality including:
//! - Corner grid storage and its resize rules
//! - Overlap-preserving array resizing
//! - Marching-squares tile IDs for cells

/// Grid resize utilities
pub mod extension;
/// Corner grid storage and access
pub mod grid;
/// Marching-squares tile selection
pub mod tiles;

pub use grid::{CornerGrid, CornerState};
