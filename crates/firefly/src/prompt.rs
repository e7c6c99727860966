//! Line-based prompting on a terminal.

use std::io::{BufRead, Write};

use firefly_core::{Action, Confirmation, DecisionSource, Error, Message, Presentation, Result};
use tracing::debug;

/// Asks questions on `out` and reads answers line by line from `input`.
///
/// End of input is treated as an interrupt. Reads block the calling thread;
/// under tokio that is the main task, which holds no other work.
pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Creates a prompter over the given streams.
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Writes `prompt` and returns the trimmed answer.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Interrupted);
        }
        Ok(line.trim().to_string())
    }

    /// Blocks until the user presses Enter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] at end of input.
    pub fn wait_for_enter(&mut self, prompt: &str) -> Result<()> {
        self.ask(&format!("\n{prompt}")).map(|_| ())
    }
}

impl<R: BufRead, W: Write> DecisionSource for LinePrompter<R, W> {
    fn choose_action(&mut self, _presentation: &Presentation<'_>) -> Result<Action> {
        let keys: Vec<&str> = Action::ALL.iter().map(Action::key).collect();
        let prompt = format!("\nAction [{}] ({}): ", keys.join("/"), Action::default().key());

        loop {
            let answer = self.ask(&prompt)?;
            if answer.is_empty() {
                return Ok(Action::default());
            }
            if let Some(action) = Action::parse(&answer) {
                return Ok(action);
            }
            debug!(%answer, "Unrecognised action");
            writeln!(self.out, "Please select one of the available options")?;
        }
    }

    fn confirm(&mut self, confirmation: &Confirmation) -> Result<bool> {
        let default = confirmation.default_answer();
        let prompt = format!(
            "\n{} [y/n] ({}): ",
            confirmation.question(),
            if default { "y" } else { "n" }
        );

        loop {
            let answer = self.ask(&prompt)?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.out, "Please enter Y or N")?,
            }
        }
    }

    fn compose_reply(&mut self, original: &Message) -> Result<String> {
        writeln!(self.out, "\n📝 Drafting reply to {}...", original.sender)?;
        self.ask("Reply message: ")
    }
}
