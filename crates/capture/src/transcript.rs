// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flattening captured runs into one line sequence.
//!
//! Every invocation contributes, in order: an optional command header,
//! the stdout lines, the stderr lines (when captured) and the exit status,
//! with optional separator lines between the sections.

use crate::error::{CaptureError, Stream};
use crate::lines::split_lines;
use crate::run::{CapturedRun, Invocation, StderrMode};

pub const STDOUT_SEPARATOR: &str = "---- stdout ----";
pub const STDERR_SEPARATOR: &str = "---- stderr ----";
pub const EXIT_SEPARATOR: &str = "---- exit status ----";

/// Settings that shape the flattened output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranscriptOptions {
    /// Emit `---- ... ----` lines before each section.
    pub separators: bool,
    /// Emit a `======== <command> ========` line before each invocation.
    pub command_headers: bool,
    pub stderr: StderrMode,
}

impl Default for TranscriptOptions {
    fn default() -> Self {
        Self {
            separators: true,
            command_headers: false,
            stderr: StderrMode::Capture,
        }
    }
}

/// The flattened output of one or more invocations.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    options: TranscriptOptions,
    lines: Vec<String>,
}

impl Transcript {
    pub fn new(options: TranscriptOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
        }
    }

    /// Append the output of `run`, produced by `invocation`.
    pub fn record(
        &mut self,
        invocation: &Invocation,
        run: &CapturedRun,
    ) -> Result<(), CaptureError> {
        let decode = |stream: Stream, bytes: &[u8]| {
            split_lines(bytes).map_err(|source| CaptureError::Decode {
                command: invocation.command_line(),
                stream,
                source,
            })
        };

        if self.options.command_headers {
            let header = format!("======== {} ========", invocation.command_line());
            self.lines.push(header);
        }

        if self.options.separators {
            self.push(STDOUT_SEPARATOR);
        }
        self.lines.extend(decode(Stream::Stdout, &run.stdout)?);

        if let Some(ref stderr) = run.stderr {
            if self.options.separators {
                self.push(STDERR_SEPARATOR);
            }
            self.lines.extend(decode(Stream::Stderr, stderr)?);
        }

        // Without separators a zero exit status is left out.
        if self.options.separators {
            self.push(EXIT_SEPARATOR);
            self.lines.push(format!("Exit {}", run.exit_code));
        } else if run.exit_code != 0 {
            self.lines.push(format!("Exit {}", run.exit_code));
        }

        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Runs a program once per extra-argument line and flattens the results.
#[derive(Clone, Debug)]
pub struct Runner {
    program: String,
    fixed_args: Vec<String>,
    options: TranscriptOptions,
}

impl Runner {
    pub fn new(
        program: impl Into<String>,
        fixed_args: Vec<String>,
        options: TranscriptOptions,
    ) -> Self {
        Self {
            program: program.into(),
            fixed_args,
            options,
        }
    }

    /// The invocations for `extra_lines`, in order.
    pub fn invocations<'a>(
        &'a self,
        extra_lines: &'a [String],
    ) -> impl Iterator<Item = Invocation> + 'a {
        extra_lines
            .iter()
            .map(|line| Invocation::with_extra_line(&self.program, &self.fixed_args, line))
    }

    /// Run every invocation sequentially and return the flattened lines.
    ///
    /// `on_start` is called with each invocation just before it runs.
    pub async fn run_all<F>(
        &self,
        extra_lines: &[String],
        mut on_start: F,
    ) -> Result<Vec<String>, CaptureError>
    where
        F: FnMut(&Invocation),
    {
        let mut transcript = Transcript::new(self.options);
        for invocation in self.invocations(extra_lines) {
            on_start(&invocation);
            let run = invocation.run(self.options.stderr).await?;
            transcript.record(&invocation, &run)?;
        }
        Ok(transcript.into_lines())
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
