//! Error types for grid access, generation and export

use std::fmt;
use std::path::PathBuf;

/// Index space an out-of-bounds access was made in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSpace {
    /// Corner lattice, inclusive of the extra row and column
    Corner,
    /// Cell grid, one smaller than the corner lattice in each dimension
    Cell,
}

impl fmt::Display for IndexSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corner => write!(f, "corner"),
            Self::Cell => write!(f, "cell"),
        }
    }
}

/// Main error type for all grid and generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Index outside the valid range of the grid
    ///
    /// Reported separately from generic index faults so callers can tell
    /// a bad coordinate apart from other failures.
    OutOfBounds {
        /// Which lattice the index refers to
        space: IndexSpace,
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Largest valid row (inclusive)
        max_row: usize,
        /// Largest valid column (inclusive)
        max_col: usize,
    },

    /// Operation needs at least one cell but the grid has none
    DegenerateGrid {
        /// Name of the operation that was attempted
        operation: &'static str,
        /// Cell rows at the time of the call
        rows: usize,
        /// Cell columns at the time of the call
        cols: usize,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Every generation attempt was rejected by the cave search
    NoCaveFound {
        /// Number of attempts made
        attempts: usize,
        /// Minimum cave size that was requested
        min_corner_count: usize,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A global logger was already installed
    Logging {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                space,
                row,
                col,
                max_row,
                max_col,
            } => {
                write!(
                    f,
                    "{space} index ({row}, {col}) is out of bounds (max: ({max_row}, {max_col}))"
                )
            }
            Self::DegenerateGrid {
                operation,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Cannot {operation} on a degenerate grid ({rows}x{cols} cells)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoCaveFound {
                attempts,
                min_corner_count,
            } => {
                write!(
                    f,
                    "No cave of at least {min_corner_count} corners found after {attempts} attempts"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { source } => write!(f, "Failed to initialize logging: {source}"),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<log::SetLoggerError> for GenerationError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logging { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a corner-space out-of-bounds error for a grid of `rows` x `cols` cells
pub const fn corner_out_of_bounds(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> GenerationError {
    GenerationError::OutOfBounds {
        space: IndexSpace::Corner,
        row,
        col,
        max_row: rows,
        max_col: cols,
    }
}
