//! Console input and output
//!
//! `Ui` is generic over its reader and writer so sessions can be driven
//! from an in-memory buffer in tests and from stdin/stdout in the binary.

use crate::error::OscarError;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Divider printed between exchanges
pub const DIVIDER: &str = "___________________________________\n";

pub struct Ui<R, W> {
    input: R,
    output: W,
}

impl Ui<StdinLock<'static>, Stdout> {
    /// Console bound to the process' standard input and output
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Ui<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, without its line ending
    ///
    /// Returns `None` once the input is exhausted.
    pub fn read_command(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn show_response(&mut self, response: &str) -> io::Result<()> {
        writeln!(self.output, "{}", response)?;
        self.output.flush()
    }

    pub fn show_error(&mut self, error: &OscarError) -> io::Result<()> {
        self.show_response(&error.to_string())
    }

    pub fn show_line(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", DIVIDER)?;
        self.output.flush()
    }

    /// Give back the writer, mainly to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }
}
