use std::io::{BufRead, Write};

use tally_client::{ClientError, ClientResult};

use crate::stdout_io::{flush_with_broken_pipe_tolerance, write_with_broken_pipe_tolerance};

/// Line-oriented prompt/answer channel for the interactive session.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R, W> Terminal<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write_line(&mut self, text: &str) -> ClientResult<()> {
        self.write_raw(text)?;
        self.write_raw("\n")?;
        self.flush()
    }

    pub fn write_lines(&mut self, lines: &[String]) -> ClientResult<()> {
        for line in lines {
            self.write_raw(line)?;
            self.write_raw("\n")?;
        }
        self.flush()
    }

    /// Prints `label` without a newline and reads one answer line. The line
    /// terminator is stripped; everything else is returned as typed.
    pub fn prompt(&mut self, label: &str) -> ClientResult<String> {
        self.write_raw(label)?;
        self.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|error| ClientError::terminal_io_failed(&error.to_string()))?;
        if read == 0 {
            return Err(ClientError::input_closed());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_raw(&mut self, text: &str) -> ClientResult<()> {
        write_with_broken_pipe_tolerance(&mut self.output, text.as_bytes())
            .map_err(|error| ClientError::terminal_io_failed(&error.to_string()))
    }

    fn flush(&mut self) -> ClientResult<()> {
        flush_with_broken_pipe_tolerance(&mut self.output)
            .map_err(|error| ClientError::terminal_io_failed(&error.to_string()))
    }
}
