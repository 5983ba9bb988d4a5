/// Command-line parsing and run orchestration
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of corner states
pub mod image;
/// Terminal logger setup
pub mod logging;
/// Attempt progress display
pub mod progress;
/// GIF capture of generation passes
pub mod visualization;
