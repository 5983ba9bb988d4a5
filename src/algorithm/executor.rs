use crate::{
    algorithm::automaton::{AutomatonRules, smooth},
    algorithm::connectivity::{CaveReport, locate_cave},
    algorithm::randomizer::randomize_all,
    io::configuration::{
        DEFAULT_COLS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_CAVE_CORNERS, DEFAULT_ROWS,
        DEFAULT_SMOOTHING_PASSES, DEFAULT_SOLID_PROBABILITY, MAX_GRID_DIMENSION,
    },
    io::error::{GenerationError, Result, invalid_parameter},
    io::visualization::VisualizationCapture,
    spatial::grid::CornerGrid,
};
use rand::{SeedableRng, rngs::StdRng};

/// Parameters controlling map shape, fill, smoothing and acceptance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Cell rows
    pub rows: usize,
    /// Cell columns
    pub cols: usize,
    /// Chance that a corner starts solid
    pub solid_probability: f64,
    /// Smoothing passes applied after the fill
    pub smoothing_passes: usize,
    /// Automaton thresholds and edge policy
    pub rules: AutomatonRules,
    /// Minimum classified corners for a map to be accepted
    pub min_cave_corners: usize,
    /// Attempts before giving up
    pub max_attempts: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            solid_probability: DEFAULT_SOLID_PROBABILITY,
            smoothing_passes: DEFAULT_SMOOTHING_PASSES,
            rules: AutomatonRules::default(),
            min_cave_corners: DEFAULT_MIN_CAVE_CORNERS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GenerationConfig {
    /// Validate the configuration before any work is done
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - Either dimension is zero or above `MAX_GRID_DIMENSION`
    /// - The solid probability is not a finite number
    /// - The survival window is inverted
    /// - No attempts are allowed
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if !self.solid_probability.is_finite() {
            return Err(invalid_parameter(
                "solid_probability",
                &self.solid_probability,
                &"must be a finite number",
            ));
        }

        self.rules.validate()?;

        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"must be at least 1",
            ));
        }

        Ok(())
    }
}

/// Cave map generator: random fill, smoothing, and cave acceptance
///
/// Each attempt refills the whole grid from the generator's seeded RNG, so
/// a given seed and configuration always produce the same map.
pub struct MapGenerator {
    /// Validated generation parameters
    pub config: GenerationConfig,
    /// Grid produced by the latest attempt
    pub grid: CornerGrid,
    /// Random number generator feeding the fill
    pub rng: StdRng,
    /// Attempts made so far
    pub attempts: usize,
    /// Cave accepted by the latest successful attempt
    pub cave: Option<CaveReport>,
    /// Optional capture of every generation pass
    pub visualization: Option<VisualizationCapture>,
}

impl MapGenerator {
    /// Create a generator with a seeded RNG
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: GenerationConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            grid: CornerGrid::with_size(config.rows, config.cols)?,
            rng: StdRng::seed_from_u64(seed),
            attempts: 0,
            cave: None,
            visualization: None,
        })
    }

    /// Record a frame after the fill, after every pass, and after the search
    pub fn enable_visualization(&mut self) {
        let frames = self.config.smoothing_passes + 2;
        self.visualization = Some(VisualizationCapture::new(frames));
    }

    /// Run a single attempt and report whether the map was accepted
    ///
    /// # Errors
    ///
    /// Returns `NoCaveFound` once `max_attempts` have been used up
    pub fn run_attempt(&mut self) -> Result<bool> {
        if self.attempts >= self.config.max_attempts {
            return Err(self.exhausted());
        }
        self.attempts += 1;

        if let Some(viz) = &mut self.visualization {
            viz.clear();
        }

        self.grid.resize(self.config.rows, self.config.cols)?;
        randomize_all(&mut self.grid, self.config.solid_probability, &mut self.rng);
        self.capture("fill");

        for _ in 0..self.config.smoothing_passes {
            smooth(&mut self.grid, &self.config.rules);
            self.capture("smooth");
        }

        self.cave = locate_cave(&mut self.grid, self.config.min_cave_corners);
        self.capture("classify");

        match &self.cave {
            Some(cave) => {
                log::info!(
                    "Attempt {} accepted: cave of {} corners seeded at ({}, {})",
                    self.attempts,
                    cave.size(),
                    cave.seed[0],
                    cave.seed[1]
                );
                Ok(true)
            }
            None => {
                log::debug!("Attempt {} rejected", self.attempts);
                Ok(false)
            }
        }
    }

    /// Run attempts until a map is accepted
    ///
    /// # Errors
    ///
    /// Returns `NoCaveFound` if every attempt is rejected
    pub fn generate(&mut self) -> Result<&CornerGrid> {
        self.generate_with(|_| {})
    }

    /// Run attempts until a map is accepted, calling `on_attempt` with the
    /// 1-based number of each attempt before it starts
    ///
    /// # Errors
    ///
    /// Returns `NoCaveFound` if every attempt is rejected
    pub fn generate_with<F: FnMut(usize)>(&mut self, mut on_attempt: F) -> Result<&CornerGrid> {
        while self.attempts < self.config.max_attempts {
            on_attempt(self.attempts + 1);
            if self.run_attempt()? {
                return Ok(&self.grid);
            }
        }

        log::warn!(
            "Giving up after {} attempts without a cave of {} corners",
            self.attempts,
            self.config.min_cave_corners
        );
        Err(self.exhausted())
    }

    /// Grid produced by the latest attempt
    pub const fn grid(&self) -> &CornerGrid {
        &self.grid
    }

    /// Export the captured passes of the latest attempt as a GIF
    ///
    /// # Errors
    ///
    /// Returns an error if visualization was not enabled or the export fails
    pub fn export_visualization(&self, output_path: &str, scale: u32) -> Result<()> {
        use crate::io::configuration::GIF_FRAME_DELAY_MS;

        self.visualization
            .as_ref()
            .ok_or_else(|| invalid_parameter("visualize", &false, &"visualization not enabled"))?
            .export_gif(output_path, GIF_FRAME_DELAY_MS, scale)
    }

    fn capture(&mut self, label: &'static str) {
        if let Some(viz) = &mut self.visualization {
            viz.record(&self.grid, label);
        }
    }

    fn exhausted(&self) -> GenerationError {
        GenerationError::NoCaveFound {
            attempts: self.attempts,
            min_corner_count: self.config.min_cave_corners,
        }
    }
}
