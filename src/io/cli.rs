//! Command-line interface for generating and validating cave maps

use crate::algorithm::automaton::AutomatonRules;
use crate::algorithm::executor::{GenerationConfig, MapGenerator};
use crate::analysis::statistics::MapStatistics;
use crate::io::configuration::{
    DEFAULT_BIRTH_LIMIT, DEFAULT_COLS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_CAVE_CORNERS,
    DEFAULT_PIXEL_SCALE, DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_SMOOTHING_PASSES,
    DEFAULT_SOLID_PROBABILITY, DEFAULT_SURVIVE_MAX, DEFAULT_SURVIVE_MIN, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_corners_as_png;
use crate::io::progress::ProgressManager;
use crate::spatial::grid::CornerState;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Boundary policy for the smoothing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EdgePolicy {
    /// Positions off the grid count as walls
    Solid,
    /// Positions off the grid count as floor
    Empty,
}

impl EdgePolicy {
    /// Corner state used for off-grid neighbours
    pub const fn corner_state(self) -> CornerState {
        match self {
            Self::Solid => CornerState::Solid,
            Self::Empty => CornerState::Empty,
        }
    }
}

#[derive(Parser)]
#[command(name = "marching-caves")]
#[command(
    author,
    version,
    about = "Generate cave maps on a corner grid and validate their open space"
)]
/// Command-line arguments for the cave generator
pub struct Cli {
    /// PNG file to write the corner overlay to
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of cell rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of cell columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Chance that a corner starts solid
    #[arg(short, long, default_value_t = DEFAULT_SOLID_PROBABILITY)]
    pub probability: f64,

    /// Number of smoothing passes after the random fill
    #[arg(short = 'n', long, default_value_t = DEFAULT_SMOOTHING_PASSES)]
    pub passes: usize,

    /// Empty corners turn solid above this many solid neighbours
    #[arg(long, default_value_t = DEFAULT_BIRTH_LIMIT)]
    pub birth_limit: u8,

    /// Fewest solid neighbours a solid corner needs to survive
    #[arg(long, default_value_t = DEFAULT_SURVIVE_MIN)]
    pub survive_min: u8,

    /// Most solid neighbours a solid corner may have and survive
    #[arg(long, default_value_t = DEFAULT_SURVIVE_MAX)]
    pub survive_max: u8,

    /// How off-grid neighbours count during smoothing
    #[arg(long, value_enum, default_value_t = EdgePolicy::Solid)]
    pub edge: EdgePolicy,

    /// Minimum cave size, in corners, for a map to be accepted
    #[arg(short, long, default_value_t = DEFAULT_MIN_CAVE_CORNERS)]
    pub min_cave: usize,

    /// Maximum generation attempts
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Pixels per corner in exported images
    #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
    pub scale: u32,

    /// Also export the generation passes as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite the output even if it exists
    #[arg(long)]
    pub no_skip: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// Check if an existing output file should be left alone
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the generation configuration from the arguments
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            rows: self.rows,
            cols: self.cols,
            solid_probability: self.probability,
            smoothing_passes: self.passes,
            rules: AutomatonRules {
                edge_value: self.edge.corner_state(),
                birth_limit: self.birth_limit,
                survive_min: self.survive_min,
                survive_max: self.survive_max,
            },
            min_cave_corners: self.min_cave,
            max_attempts: self.attempts,
        }
    }

    /// Path of the pass animation written next to the overlay
    pub fn visualization_path(&self) -> PathBuf {
        let stem = self.output.file_stem().unwrap_or_default();
        let viz_name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

        if let Some(parent) = self.output.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}

/// Outcome of a command-line run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Output already existed and skipping was enabled
    Skipped,
    /// A map was generated and exported
    Generated {
        /// Attempts used before a map was accepted
        attempts: usize,
        /// Statistics of the accepted map
        statistics: MapStatistics,
    },
}

/// Orchestrates generation, export and progress display for one run
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate a map according to CLI arguments and export it
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, no cave is found
    /// within the attempt budget, or an export fails
    pub fn process(&mut self) -> Result<RunOutcome> {
        if self.cli.skip_existing() && self.cli.output.exists() {
            log::warn!("Skipping: {} (output exists)", self.cli.output.display());
            return Ok(RunOutcome::Skipped);
        }

        let start_time = Instant::now();
        let mut generator = MapGenerator::new(self.cli.generation_config(), self.cli.seed)?;
        if self.cli.visualize {
            generator.enable_visualization();
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.attempts);
        }

        let progress = self.progress_manager.as_ref();
        let outcome = generator
            .generate_with(|attempt| {
                if let Some(pm) = progress {
                    pm.update_attempt(attempt);
                }
            })
            .map(|_| ());

        if let Some(pm) = progress {
            pm.finish(outcome.is_ok());
        }
        outcome?;

        let output_path = Self::path_str(&self.cli.output)?;
        export_corners_as_png(generator.grid(), output_path, self.cli.scale)?;

        if self.cli.visualize {
            let viz_path = self.cli.visualization_path();
            generator.export_visualization(Self::path_str(&viz_path)?, self.cli.scale)?;
        }

        let statistics = MapStatistics::from_grid(generator.grid());
        log::info!(
            "Wrote {} in {:.2?}: {:.1}% solid, {} corners in cave, {} spawn points",
            self.cli.output.display(),
            start_time.elapsed(),
            statistics.solid_fraction() * 100.0,
            statistics.classified(),
            statistics.spawn
        );

        Ok(RunOutcome::Generated {
            attempts: generator.attempts,
            statistics,
        })
    }

    fn path_str(path: &Path) -> Result<&str> {
        path.to_str()
            .ok_or_else(|| invalid_parameter("output", &path.display(), &"path is not UTF-8"))
    }
}
