//! Frame capture and GIF generation for generation passes

use crate::io::error::{GenerationError, Result};
use crate::io::image::render_corners;
use crate::spatial::grid::{CornerGrid, CornerState};
use image::Frame;
use ndarray::Array2;

/// Snapshot of the corner lattice after one generation pass
#[derive(Debug, Clone)]
pub struct PassFrame {
    /// Short name of the pass that produced this frame
    pub label: &'static str,
    /// Corner states at the end of the pass
    pub corners: Array2<CornerState>,
}

/// Captures grid snapshots for visualization
///
/// Records one frame per pass so the fill, each smoothing step and the
/// final classification can be replayed as an animation.
pub struct VisualizationCapture {
    pub(crate) frames: Vec<PassFrame>,
}

impl VisualizationCapture {
    /// Create an empty capture with room for `expected_frames`
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
        }
    }

    /// Records the grid as it is now
    pub fn record(&mut self, grid: &CornerGrid, label: &'static str) {
        self.frames.push(PassFrame {
            label,
            corners: grid.corners().to_owned(),
        });
    }

    /// Drop every recorded frame
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Returns all recorded frames
    pub fn frames(&self) -> &[PassFrame] {
        &self.frames
    }

    /// Returns the number of recorded frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a GIF
    ///
    /// The last frame is held three times longer so the final map is
    /// readable before the animation loops.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - `scale` is zero
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32, scale: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(GenerationError::InvalidParameter {
                parameter: "frames",
                value: "0".to_string(),
                reason: "No passes captured for visualization".to_string(),
            });
        }

        let last = self.frames.len() - 1;
        let mut frames = Vec::with_capacity(self.frames.len());
        for (index, frame) in self.frames.iter().enumerate() {
            let delay = if index == last {
                frame_delay_ms.saturating_mul(3)
            } else {
                frame_delay_ms
            };
            let img = render_corners(frame.corners.view(), scale)?;
            frames.push(Frame::from_parts(
                img,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay, 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}
