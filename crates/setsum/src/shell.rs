//! The interactive shell: drives a running [`Setsum`] from command lines.
//!
//! Reads one command per line from any [`BufRead`] and writes responses to
//! any [`Write`]. Only `digest`, unknown lines and rejected digests produce
//! output.

use std::io::{BufRead, Write};

use serde::Serialize;
use setsum_core::Setsum;

use crate::command::{trim_line_ending, Command, USAGE};
use crate::config::ShellConfig;
use crate::error::{Result, ShellError};

/// Whether the session should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Summary of a shell session.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ShellReport {
    /// Lines read, including the quit line.
    pub lines: u64,
    pub inserts: u64,
    pub removes: u64,
    pub merges: u64,
    pub subtracts: u64,
    pub digests: u64,
    /// `merge`/`subtract` lines whose digest failed to decode.
    pub invalid_digests: u64,
    /// Lines answered with the usage text.
    pub unknown: u64,
    /// Whether the session ended on a quit command rather than end of input.
    pub quit: bool,
    /// The running checksum when the session ended.
    pub setsum: Setsum,
}

/// A shell session holding the running checksum.
pub struct Shell {
    config: ShellConfig,
    setsum: Setsum,
    report: ShellReport,
}

impl Shell {
    /// Create a new session starting from `config.initial`.
    pub fn new(config: ShellConfig) -> Self {
        let setsum = config.initial;
        Self {
            config,
            setsum,
            report: ShellReport::default(),
        }
    }

    /// The running checksum.
    pub fn setsum(&self) -> &Setsum {
        &self.setsum
    }

    /// Counters so far.
    pub fn report(&self) -> &ShellReport {
        &self.report
    }

    /// Run until a quit command or end of input.
    pub fn run<R, W>(mut self, mut input: R, mut output: W) -> Result<ShellReport>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf = Vec::new();

        loop {
            if let Some(prompt) = &self.config.prompt {
                output.write_all(prompt.as_bytes())?;
                output.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("end of input after {} lines", self.report.lines);
                break;
            }

            let command = Command::parse(trim_line_ending(&buf));
            let flow = self.execute(command, &mut output)?;
            output.flush()?;
            if flow == Flow::Quit {
                self.report.quit = true;
                break;
            }
        }

        self.report.setsum = self.setsum;
        tracing::info!(
            "session finished: {} lines, digest {}",
            self.report.lines,
            self.setsum.hex_digest()
        );
        Ok(self.report)
    }

    /// Apply one command to the running checksum.
    pub fn execute<W: Write>(&mut self, command: Command<'_>, output: &mut W) -> Result<Flow> {
        self.report.lines += 1;
        tracing::debug!("line {}: {}", self.report.lines, command.name());

        match command {
            Command::Insert(value) => {
                self.setsum.insert(value);
                self.report.inserts += 1;
            }
            Command::Remove(value) => {
                self.setsum.remove(value);
                self.report.removes += 1;
            }
            Command::Merge(arg) => {
                if let Some(other) = self.parse_digest(arg, output)? {
                    self.setsum = self.setsum.merge(&other);
                    self.report.merges += 1;
                }
            }
            Command::Subtract(arg) => {
                if let Some(other) = self.parse_digest(arg, output)? {
                    self.setsum = self.setsum.subtract(&other);
                    self.report.subtracts += 1;
                }
            }
            Command::Digest => {
                writeln!(output, "{}", self.setsum.hex_digest())?;
                self.report.digests += 1;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown => {
                output.write_all(USAGE.as_bytes())?;
                self.report.unknown += 1;
            }
        }

        Ok(Flow::Continue)
    }

    /// Decode a `merge`/`subtract` argument.
    ///
    /// On failure the running checksum is left alone. Strict sessions stop
    /// with an error; otherwise the error is printed and `None` returned.
    fn parse_digest<W: Write>(&mut self, arg: &[u8], output: &mut W) -> Result<Option<Setsum>> {
        let hex_digest = String::from_utf8_lossy(arg);
        match Setsum::from_hex_digest(&hex_digest) {
            Ok(setsum) => Ok(Some(setsum)),
            Err(e) => {
                self.report.invalid_digests += 1;
                tracing::warn!("line {}: rejected digest: {}", self.report.lines, e);
                if self.config.strict {
                    return Err(ShellError::InvalidDigest {
                        line: self.report.lines,
                        source: e,
                    });
                }
                writeln!(output, "error: {}", e)?;
                Ok(None)
            }
        }
    }
}
