use anyhow::{Context, Result};
use std::io::Write;
use weather_core::{
    ReportFormatter, WeatherProvider,
    format::not_found_for,
    model::is_exit_sentinel,
};

use crate::prompt::Prompter;

pub const CITY_PROMPT: &str = "Enter the city to get the weather forecast or 'exit' to quit: ";
pub const DETAIL_PROMPT: &str = "Do you want a detailed forecast? (yes/no): ";

/// Where the prompt loop currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    AwaitingCity,
    AwaitingDetailChoice(String),
    Terminated,
}

/// Connects a weather source and a formatter to the user.
#[derive(Debug)]
pub struct InteractionController<S, F, P, W> {
    source: S,
    formatter: F,
    prompter: P,
    out: W,
}

impl<S, F, P, W> InteractionController<S, F, P, W>
where
    S: WeatherProvider,
    F: ReportFormatter,
    P: Prompter,
    W: Write,
{
    pub fn new(source: S, formatter: F, prompter: P, out: W) -> Self {
        Self { source, formatter, prompter, out }
    }

    /// Ask for a city. Returns the trimmed answer with its case preserved,
    /// or `None` once input is exhausted.
    pub fn prompt_city(&mut self) -> Result<Option<String>> {
        let answer = self.prompter.ask(CITY_PROMPT)?;
        Ok(answer.map(|a| a.trim().to_string()))
    }

    /// True only for a "yes" answer. Exhausted input counts as "no".
    pub fn prompt_wants_detail(&mut self) -> Result<bool> {
        let answer = self.prompter.ask(DETAIL_PROMPT)?;
        Ok(answer.is_some_and(|a| a.trim().to_lowercase() == "yes"))
    }

    /// Write the basic report. Unknown cities get a line naming the city as typed.
    pub fn render_basic(&mut self, city: &str) -> Result<()> {
        let line = match self.source.fetch(city) {
            Some(record) => self.formatter.format(Some(&record)),
            None => not_found_for(city),
        };
        writeln!(self.out, "{line}").context("Failed to write forecast")
    }

    /// The detailed report, exactly as the formatter renders it.
    pub fn render_detailed(&self, city: &str) -> String {
        let record = self.source.fetch(city);
        self.formatter.format(record.as_ref())
    }

    /// Advance the loop by one prompt.
    pub fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::AwaitingCity => match self.prompt_city()? {
                Some(city) if !is_exit_sentinel(&city) => State::AwaitingDetailChoice(city),
                _ => State::Terminated,
            },
            State::AwaitingDetailChoice(city) => {
                if self.prompt_wants_detail()? {
                    let report = self.render_detailed(&city);
                    writeln!(self.out, "{report}").context("Failed to write forecast")?;
                } else {
                    self.render_basic(&city)?;
                }
                State::AwaitingCity
            }
            State::Terminated => State::Terminated,
        };

        tracing::debug!(?next, "controller state");
        Ok(next)
    }

    /// Prompt until the user types the exit word or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::AwaitingCity;
        while state != State::Terminated {
            state = self.step(state)?;
        }
        self.out.flush().context("Failed to flush output")
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}
