// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Program output capture for expected-output tests.
//!
//! This crate runs a program one or more times, captures what it writes
//! to stdout and stderr along with its exit status, and flattens all of
//! it into a single sequence of text lines that can be normalized and
//! diffed against a stored baseline.

mod error;
mod lines;
mod run;
mod transcript;

pub use error::{CaptureError, Stream};
pub use lines::{split_lines, NO_NEWLINE_MARKER};
pub use run::{CapturedRun, Invocation, StderrMode};
pub use transcript::{
    Runner, Transcript, TranscriptOptions, EXIT_SEPARATOR, STDERR_SEPARATOR, STDOUT_SEPARATOR,
};
