// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;
use compare_expect_capture::{StderrMode, TranscriptOptions};

/// Run a program and compare its output to what is expected.
///
/// Before comparison the output is normalized: a line containing
/// "VOLATILE" becomes just "VOLATILE", and with --hex-replacer every
/// "0x" followed by two or more hex digits becomes "0xHEXDIGITS" unless
/// the digits are "7F" repeated.
#[derive(Parser, Clone, Debug)]
#[command(name = "run-compare-expect", version)]
pub struct Cli {
    /// If provided, write the actual output to this file
    #[arg(long, value_name = "FILE")]
    pub actual: Option<PathBuf>,

    /// Expected output
    #[arg(long, value_name = "FILE")]
    pub expect: PathBuf,

    /// Run the program once per line in ARGFILE
    #[arg(long, value_name = "ARGFILE")]
    pub argfile: Option<PathBuf>,

    /// Discard lines matching REGEX before comparison. Can specify multiple
    #[arg(long = "drop-lines", value_name = "REGEX")]
    pub drop_lines: Vec<String>,

    /// Use the 0xHEXDIGITS replacer
    #[arg(long)]
    pub hex_replacer: bool,

    /// Do not print the stdout/stderr/exit code separators
    #[arg(long)]
    pub no_separators: bool,

    /// Do not capture stderr; instead let it pass through
    #[arg(long)]
    pub no_stderr: bool,

    /// Program to run
    pub program: String,

    /// Arguments to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub prog_args: Vec<String>,
}

impl Cli {
    /// How each invocation's output is flattened.
    pub fn transcript_options(&self) -> TranscriptOptions {
        TranscriptOptions {
            separators: !self.no_separators,
            command_headers: self.argfile.is_some(),
            stderr: if self.no_stderr {
                StderrMode::Inherit
            } else {
                StderrMode::Capture
            },
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
