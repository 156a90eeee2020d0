//! Line-oriented prompting with bounded re-prompts.

use std::io::{self, BufRead, Write};

/// Consecutive invalid answers accepted before a prompt gives up.
pub const MAX_PROMPT_ATTEMPTS: usize = 5;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `Enter choice:` and reads one trimmed line. `None` at end of input.
    pub fn ask(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "Enter choice:")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Shows a menu until one of `1..=options` is picked.
    ///
    /// `None` when input ends or every attempt was invalid.
    pub fn choose<F>(&mut self, options: u8, mut show_menu: F) -> io::Result<Option<u8>>
    where
        F: FnMut(&mut W) -> io::Result<()>,
    {
        for _ in 0..MAX_PROMPT_ATTEMPTS {
            show_menu(&mut self.output)?;
            let Some(answer) = self.ask()? else {
                return Ok(None);
            };
            match answer.parse::<u8>() {
                Ok(choice) if (1..=options).contains(&choice) => return Ok(Some(choice)),
                _ => tracing::debug!(answer = %answer, "Invalid menu choice"),
            }
        }
        Ok(None)
    }

    /// Asks for a non-negative integer; `0` is the caller's cancel value.
    ///
    /// Negative and non-numeric answers re-prompt. `None` when input ends or
    /// every attempt was invalid.
    pub fn amount(&mut self, question: &str) -> io::Result<Option<i64>> {
        for _ in 0..MAX_PROMPT_ATTEMPTS {
            writeln!(self.output)?;
            writeln!(self.output, "{question}")?;
            let Some(answer) = self.ask()? else {
                return Ok(None);
            };
            match answer.parse::<i64>() {
                Ok(value) if value >= 0 => return Ok(Some(value)),
                Ok(_) => writeln!(self.output, "Please enter a positive integer number")?,
                Err(_) => writeln!(self.output, "Please enter integer number")?,
            }
        }
        Ok(None)
    }
}
