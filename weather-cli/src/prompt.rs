use anyhow::{Context, Result};
use inquire::{
    InquireError, Text,
    ui::{RenderConfig, Styled},
};
use std::io::{BufRead, Write};

/// Source of user answers.
pub trait Prompter {
    /// Show `message` and read one answer. `Ok(None)` means no more input.
    fn ask(&mut self, message: &str) -> Result<Option<String>>;
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        (**self).ask(message)
    }
}

/// Plain line-oriented prompting, for piped input.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input line")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Terminal prompting through `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        let (head, tail) = split_prompt(message);
        let render_config = RenderConfig::default()
            .with_prompt_prefix(Styled::new(head))
            .with_answered_prompt_prefix(Styled::new(head));

        match Text::new(tail).with_render_config(render_config).prompt() {
            Ok(answer) => Ok(Some(answer)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e).context("Failed to read answer from terminal"),
        }
    }
}

/// Split `message` around its last space.
///
/// inquire renders `{prefix} {prompt} {input}`, so passing the halves as
/// prefix and prompt reproduces the message text exactly.
fn split_prompt(message: &str) -> (&str, &str) {
    let trimmed = message.trim_end();
    trimmed.rsplit_once(' ').unwrap_or(("", trimmed))
}
