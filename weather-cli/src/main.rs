//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompting
//! - Wiring the core data source and formatter into the prompt loop

use clap::Parser;

mod cli;
mod controller;
mod prompt;

fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run()
}
