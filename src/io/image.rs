//! PNG export of corner states as a debug overlay

use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::grid::{CornerGrid, CornerState};
use image::{Rgba, RgbaImage};
use ndarray::ArrayView2;

/// Overlay colour for each corner state
pub const fn corner_color(state: CornerState) -> [u8; 4] {
    match state {
        CornerState::Solid => [40, 36, 48, 255],
        CornerState::Empty => [200, 196, 184, 255],
        CornerState::Flooded => [88, 160, 220, 255],
        CornerState::Perimeter => [236, 184, 72, 255],
        CornerState::Spawn => [220, 72, 80, 255],
    }
}

/// Render a corner lattice as `scale` x `scale` pixel blocks
///
/// # Errors
///
/// Returns `InvalidParameter` if `scale` is zero or the image would not fit
/// in `u32` dimensions
pub fn render_corners(corners: ArrayView2<'_, CornerState>, scale: u32) -> Result<RgbaImage> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }

    let (rows, cols) = corners.dim();
    let to_pixels = |count: usize, parameter: &'static str| {
        u32::try_from(count)
            .ok()
            .and_then(|n| n.checked_mul(scale))
            .ok_or_else(|| invalid_parameter(parameter, &count, &"image too large"))
    };
    let width = to_pixels(cols, "cols")?;
    let height = to_pixels(rows, "rows")?;

    let mut img = RgbaImage::new(width, height);
    for ((row, col), &state) in corners.indexed_iter() {
        let color = Rgba(corner_color(state));
        let x0 = col as u32 * scale;
        let y0 = row as u32 * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(x0 + dx, y0 + dy, color);
            }
        }
    }

    Ok(img)
}

/// Export the grid's corner states as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_corners_as_png(grid: &CornerGrid, output_path: &str, scale: u32) -> Result<()> {
    let img = render_corners(grid.corners(), scale)?;

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
