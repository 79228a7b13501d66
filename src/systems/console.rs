//! Line-oriented console I/O
//!
//! Wraps any buffered reader and writer. End of input is reported as `None`
//! rather than an error so the session can wind down cleanly.

use std::fmt;
use std::io::{self, BufRead, Write};

/// Prompting console over a reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given input and output
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line
    pub fn say(&mut self, line: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Write a prompt without a newline and read the answer
    ///
    /// Returns the trimmed line, or `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Consume the console, returning the output
    pub fn into_output(self) -> W {
        self.output
    }
}
