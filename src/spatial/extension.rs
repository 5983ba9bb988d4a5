//! Grid resize utilities for the corner lattice
//!
//! Reallocates a 2D array to new dimensions while preserving the region that
//! overlaps the old and new shapes. Rows and columns past the new bound are
//! dropped; newly introduced positions take the type's padding value.

use ndarray::Array2;

/// Trait for types that can fill newly introduced grid positions
pub trait Extendable {
    /// The value to use for padding new positions
    fn padding_value() -> Self;
}

/// Resize information calculated from current and requested dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeInfo {
    /// Dimensions before the resize (rows, cols)
    pub old_dims: (usize, usize),
    /// Dimensions after the resize (rows, cols)
    pub new_dims: (usize, usize),
    /// Region copied across from the old array (rows, cols)
    pub overlap: (usize, usize),
    /// Whether reallocation is actually required
    pub needs_resize: bool,
}

/// Calculate resize information for an array
pub fn calculate_resize(old_dims: (usize, usize), new_dims: (usize, usize)) -> ResizeInfo {
    ResizeInfo {
        old_dims,
        new_dims,
        overlap: (old_dims.0.min(new_dims.0), old_dims.1.min(new_dims.1)),
        needs_resize: old_dims != new_dims,
    }
}

/// Resize a 2D array, anchoring existing data at the origin
///
/// Returns a clone of the original array when the shape is unchanged.
pub fn resize_array_2d<T: Clone>(array: &Array2<T>, info: &ResizeInfo, padding: T) -> Array2<T> {
    if !info.needs_resize {
        return array.clone();
    }

    let (rows, cols) = info.overlap;
    Array2::from_shape_fn(info.new_dims, |(row, col)| {
        if row < rows
            && col < cols
            && let Some(value) = array.get((row, col))
        {
            return value.clone();
        }
        padding.clone()
    })
}

/// Resize an array of an [`Extendable`] element type to new dimensions
pub fn resize_extendable<T: Clone + Extendable>(
    array: &Array2<T>,
    new_dims: (usize, usize),
) -> Array2<T> {
    let info = calculate_resize(array.dim(), new_dims);
    resize_array_2d(array, &info, T::padding_value())
}
