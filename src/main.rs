//! CLI entry point for corner-grid cave generation

use clap::Parser;
use marching_caves::io::cli::{Cli, MapProcessor};
use marching_caves::io::logging;

fn main() -> marching_caves::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_filter(cli.quiet, cli.debug))?;
    let mut processor = MapProcessor::new(cli);
    processor.process().map(|_| ())
}
