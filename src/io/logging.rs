//! Terminal logger setup for the command-line driver

use crate::io::error::Result;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Map the `--quiet` flag and `--debug` count to a log level
///
/// Quiet wins over any debug count.
pub const fn level_filter(quiet: bool, debug: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match debug {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a stderr logger at the given level
///
/// # Errors
///
/// Returns `Logging` if a global logger is already installed
pub fn init(level: LevelFilter) -> Result<()> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
