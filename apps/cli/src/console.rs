//! Line-oriented prompts over any reader/writer pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{CliError, CliResult};
use crate::style::{Palette, Tone};

pub struct Console<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows `label` and reads one line, without its line terminator.
    ///
    /// Returns [`CliError::InputClosed`] at end of input. Lines that are not
    /// valid UTF-8 are reported and asked for again.
    pub fn prompt_line(&mut self, label: &str) -> CliResult<String> {
        loop {
            let prompt = self.palette.paint(Tone::Prompt, label);
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut bytes = Vec::new();
            if self.input.read_until(b'\n', &mut bytes)? == 0 {
                return Err(CliError::InputClosed);
            }
            match String::from_utf8(bytes) {
                Ok(mut line) => {
                    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
                    line.truncate(trimmed_len);
                    return Ok(line);
                }
                Err(err) => {
                    tracing::debug!("Rejected non-UTF-8 input: {}", err);
                    self.failure("Input was not valid text. Please try again.")?;
                }
            }
        }
    }

    /// Prompts until the user enters something that parses as a decimal.
    pub fn prompt_decimal(&mut self, label: &str) -> CliResult<Decimal> {
        loop {
            let line = self.prompt_line(label)?;
            match Decimal::from_str(line.trim()) {
                Ok(amount) => return Ok(amount),
                Err(err) => {
                    tracing::debug!("Rejected numeric input {:?}: {}", line, err);
                    self.failure("Please enter a valid number.")?;
                }
            }
        }
    }

    pub fn success(&mut self, message: &str) -> CliResult<()> {
        self.say(Tone::Success, message)
    }

    pub fn failure(&mut self, message: &str) -> CliResult<()> {
        self.say(Tone::Failure, message)
    }

    pub fn say(&mut self, tone: Tone, message: &str) -> CliResult<()> {
        writeln!(self.output, "{}", self.palette.paint(tone, message))?;
        Ok(())
    }

    /// Writes pre-rendered text as is.
    pub fn write_block(&mut self, block: &str) -> CliResult<()> {
        write!(self.output, "{}", block)?;
        Ok(())
    }

    pub fn plain(&mut self, message: &str) -> CliResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
