// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expected-output test driver.
//!
//! Runs a program (optionally once per line of an argument file), flattens
//! its stdout, stderr and exit status into lines, normalizes them and diffs
//! the result against a stored expected-output file. Differences can be
//! accepted automatically or interactively through `UPDATE_EXPECT`.

pub mod app;
pub mod cli;
pub mod diff;
pub mod env;
pub mod error;
pub mod expect_file;
pub mod normalize;
pub mod output_diagnostic;
pub mod prompt;
pub mod reconcile;
pub mod update;

pub use error::CompareError;
pub use reconcile::{exit_codes, Outcome};
