//! Generation constants and runtime configuration defaults

// Default map shape, in cells
/// Default number of cell rows
pub const DEFAULT_ROWS: usize = 48;
/// Default number of cell columns
pub const DEFAULT_COLS: usize = 64;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Chance that a corner starts solid during random fill
pub const DEFAULT_SOLID_PROBABILITY: f64 = 0.45;

/// Number of smoothing passes applied after the random fill
pub const DEFAULT_SMOOTHING_PASSES: usize = 4;

// Classic 4-5 cave rule: walls survive with 4+ solid neighbours,
// floor turns to wall with 5+
/// An empty corner turns solid when its solid neighbour count exceeds this
pub const DEFAULT_BIRTH_LIMIT: u8 = 4;
/// Minimum solid neighbours for a solid corner to survive
pub const DEFAULT_SURVIVE_MIN: u8 = 4;
/// Maximum solid neighbours for a solid corner to survive
pub const DEFAULT_SURVIVE_MAX: u8 = 8;

// Flood fill classification thresholds (Moore solid count, boundary solid)
/// Corners with at most this many solid neighbours are deep interior
pub const FLOODED_MAX_SOLID_NEIGHBORS: u8 = 1;
/// Corners with at least this many solid neighbours are spawn pockets
pub const SPAWN_MIN_SOLID_NEIGHBORS: u8 = 5;

/// Minimum number of classified corners for a map to be accepted
pub const DEFAULT_MIN_CAVE_CORNERS: usize = 500;

/// Attempts before generation gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Pixels per corner in exported overlays
pub const DEFAULT_PIXEL_SCALE: u32 = 4;
/// Suffix added to the overlay filename for the pass animation
pub const VISUALIZATION_SUFFIX: &str = "_passes";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
