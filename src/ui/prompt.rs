//! Line-based question/answer helpers for the interactive session.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Asks questions on `out` and reads answers from `input`.
///
/// Generic so the session can be driven by stdin in the binary and by
/// in-memory buffers in tests.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Print `question` and return the trimmed answer.
    /// Closed input is an error, so callers never loop forever.
    pub fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.out, "\n{question}\n> ")?;
        self.out.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(answer.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, warning with `hint` otherwise.
    pub fn ask_until<T, F>(&mut self, question: &str, hint: &str, parse: F) -> AppResult<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Some(v) => return Ok(v),
                None => warning(format!("'{answer}' is not a valid choice. {hint}")),
            }
        }
    }

    /// yes/y (any case) is true, anything else false.
    pub fn confirm(&mut self, question: &str) -> AppResult<bool> {
        let answer = self.ask(question)?.to_ascii_lowercase();
        Ok(answer == "yes" || answer == "y")
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}
