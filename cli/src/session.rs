//! Interactive read-eval-print loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rowdb_sql::{Processor, Response};
use tracing::{debug, info};

use crate::input::InputBuffer;

/// The prompt shown when waiting for input.
pub const DEFAULT_PROMPT: &str = "db > ";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `.exit` was entered.
    Exit,
    /// The input stream ran out before `.exit`.
    InputClosed,
}

pub struct Session<R, W> {
    processor: Processor,
    input: InputBuffer,
    reader: R,
    writer: W,
    prompt: Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(processor: Processor, reader: R, writer: W) -> Self {
        Self {
            processor,
            input: InputBuffer::new(),
            reader,
            writer,
            prompt: Some(DEFAULT_PROMPT.to_string()),
        }
    }

    /// Set the prompt; `None` disables it.
    pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
        self.prompt = prompt;
        self
    }

    /// Process lines until `.exit` or end of input.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.writer, "{prompt}")?;
                self.writer.flush()?;
            }

            let line = match self
                .input
                .read_line(&mut self.reader)
                .context("Error reading input")?
            {
                Some(line) => line,
                None => {
                    writeln!(self.writer, "Error reading input")?;
                    info!("Input closed before .exit");
                    return Ok(SessionEnd::InputClosed);
                }
            };

            debug!(line, "Processing line");
            let response = self.processor.process_line(line);
            if response == Response::Exit {
                info!(rows = self.processor.table().num_rows(), "Exiting");
                return Ok(SessionEnd::Exit);
            }

            write_response(&mut self.writer, &response)?;
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    match response {
        Response::Exit => {}
        Response::Executed(rows) => {
            for row in rows {
                writeln!(writer, "{row}")?;
            }
            writeln!(writer, "Executed.")?;
        }
        Response::Info(text) => writeln!(writer, "{text}")?,
        Response::Error(err) => writeln!(writer, "{err}")?,
    }
    Ok(())
}
