// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Launching a program and capturing what it produced.

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::error::CaptureError;

/// What to do with the child's stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StderrMode {
    /// Capture stderr into the run record.
    #[default]
    Capture,
    /// Let stderr pass through to our own stderr.
    Inherit,
}

/// One concrete program invocation: the program plus its full argument list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build an invocation whose arguments are `fixed` followed by the
    /// whitespace-separated words of `extra_line`.
    pub fn with_extra_line(program: &str, fixed: &[String], extra_line: &str) -> Self {
        let args = fixed
            .iter()
            .cloned()
            .chain(extra_line.split_whitespace().map(str::to_string))
            .collect();
        Self::new(program, args)
    }

    /// The command line as a single space-joined string.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the program to completion and capture its output.
    ///
    /// stdin is inherited. stderr is captured or inherited per `stderr`.
    pub async fn run(&self, stderr: StderrMode) -> Result<CapturedRun, CaptureError> {
        let stderr_cfg = match stderr {
            StderrMode::Capture => Stdio::piped(),
            StderrMode::Inherit => Stdio::inherit(),
        };

        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(stderr_cfg)
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CaptureError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| CaptureError::Wait {
                command: self.command_line(),
                source,
            })?;

        Ok(CapturedRun {
            stdout: output.stdout,
            stderr: match stderr {
                StderrMode::Capture => Some(output.stderr),
                StderrMode::Inherit => None,
            },
            exit_code: exit_code(output.status),
        })
    }
}

/// Output of a single finished invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedRun {
    pub stdout: Vec<u8>,
    /// `None` when stderr was passed through rather than captured.
    pub stderr: Option<Vec<u8>>,
    pub exit_code: i32,
}

/// Exit code of a finished process. A child killed by a signal reports
/// the negated signal number.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
