//! Line-oriented console collaborators.
//!
//! Programs only talk to [`LineReader`] and [`LineWriter`]; the binary wires
//! them to stdin/stdout through [`Console`].

use std::io::{self, BufRead, Write};

/// Source of single lines of user input.
pub trait LineReader {
    /// Shows `prompt`, then reads one line without its line ending.
    ///
    /// Returns `Ok(None)` when no more input is available.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Sink for lines of program output.
pub trait LineWriter {
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// Reads from `input`, writes results to `output` and prompts to `prompts`.
///
/// Prompts are kept apart from results so piped output stays clean.
pub struct Console<R, W, P> {
    input: R,
    output: W,
    prompts: P,
}

impl<R: BufRead, W: Write, P: Write> Console<R, W, P> {
    pub fn new(input: R, output: W, prompts: P) -> Self {
        Self {
            input,
            output,
            prompts,
        }
    }
}

impl<R: BufRead, W: Write, P: Write> LineReader for Console<R, W, P> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompts, "{prompt} ")?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write, P: Write> LineWriter for Console<R, W, P> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }
}
