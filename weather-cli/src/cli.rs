use anyhow::Result;
use clap::Parser;
use std::{
    io::{self, IsTerminal},
    sync::Arc,
};
use tracing_subscriber::EnvFilter;
use weather_core::{SeededProvider, SentenceFormatter, WeatherTable};

use crate::{
    controller::InteractionController,
    prompt::{InquirePrompter, LinePrompter, Prompter},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Canned weather reports for a few cities",
    long_about = "Interactive prompt that prints a weather report for New York, London or Tokyo.\n\
                  Type 'exit' at the city prompt to quit."
)]
pub struct Cli {}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_logging();

        let table = Arc::new(WeatherTable::builtin()?);
        let source = SeededProvider::new(table);

        let prompter: Box<dyn Prompter> = if io::stdin().is_terminal() {
            Box::new(InquirePrompter)
        } else {
            Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
        };

        let mut controller =
            InteractionController::new(source, SentenceFormatter, prompter, io::stdout());
        controller.run()
    }
}

/// Status lines go to stderr so stdout carries only prompts and forecasts.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
