//! Attempt progress display for map generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Attempts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many generation attempts have been made
///
/// The bar is created lazily on [`ProgressManager::initialize`] so a manager
/// can be built before the attempt budget is known.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    max_attempts: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            max_attempts: 0,
        }
    }

    /// Create the bar for a run of up to `max_attempts` attempts
    pub fn initialize(&mut self, max_attempts: usize) {
        self.max_attempts = max_attempts;
        let bar = ProgressBar::new(max_attempts as u64);
        bar.set_style(ATTEMPT_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Attempt budget the bar was initialized with
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Report that `attempt` has started
    pub fn update_attempt(&self, attempt: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(attempt as u64);
            bar.set_message(format!("attempt {attempt}"));
        }
    }

    /// Report the final outcome and release the bar
    pub fn finish(&self, accepted: bool) {
        if let Some(ref bar) = self.bar {
            if accepted {
                bar.finish_with_message("cave accepted");
            } else {
                bar.abandon_with_message("no cave found");
            }
        }
    }
}
