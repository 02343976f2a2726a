//! CLI entry point for the cube mosaic reveal

use clap::Parser;
use cubemosaic::io::cli::{Cli, FileProcessor};

fn main() -> cubemosaic::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
