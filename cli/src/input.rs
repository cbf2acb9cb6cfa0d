//! Line reader for the shell.

use std::io::{self, BufRead};

/// Reusable buffer holding the most recent input line.
#[derive(Debug, Default)]
pub struct InputBuffer {
    buffer: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the next line, without its line terminator.
    ///
    /// Returns `Ok(None)` once the reader is exhausted. Lines of any length
    /// are accepted; the buffer grows as needed and is reused between calls.
    pub fn read_line<R: BufRead>(&mut self, reader: &mut R) -> io::Result<Option<&str>> {
        self.buffer.clear();
        if reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }

        let line = self.buffer.strip_suffix('\n').unwrap_or(&self.buffer);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line))
    }
}
