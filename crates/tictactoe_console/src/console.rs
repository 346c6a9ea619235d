//! Line-oriented console the game reads moves from and prints to.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// Text input and output used by players and the game loop.
pub trait Terminal {
    /// Reads one line without its trailing newline.
    ///
    /// Errors when the input is closed.
    fn read_line(&mut self) -> Result<String>;

    /// Writes `text` as-is and flushes.
    fn say(&mut self, text: &str) -> Result<()>;
}

/// [`Terminal`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game finished");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
