// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/debug formatting.
//!
//! Provides ANSI color support with automatic terminal detection.

use std::error::Error;
use std::io::{self, IsTerminal, Write};

use crate::error::CompareError;

/// Print a failure as a one-line `Kind: message` summary to stderr.
///
/// With `debug_level >= 1` the chain of underlying causes follows.
pub fn print_failure(err: &CompareError, debug_level: u32) {
    let is_tty = io::stderr().is_terminal();
    write_failure(&mut io::stderr(), err, debug_level, is_tty);
}

/// Write a failure summary to a writer with explicit terminal flag.
fn write_failure<W: Write>(
    writer: &mut W,
    err: &CompareError,
    debug_level: u32,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31m{}: {}\x1b[0m", err.kind(), err);
    } else {
        let _ = writeln!(writer, "{}: {}", err.kind(), err);
    }

    if debug_level >= 1 {
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = writeln!(writer, "  caused by: {}", cause);
            source = cause.source();
        }
        let _ = writeln!(writer, "{:#?}", err);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Print a trace message to stderr when `debug_level >= 2`.
pub fn print_debug(debug_level: u32, msg: impl std::fmt::Display) {
    write_debug(&mut io::stderr(), debug_level, msg);
}

fn write_debug<W: Write>(writer: &mut W, debug_level: u32, msg: impl std::fmt::Display) {
    if debug_level >= 2 {
        let _ = writeln!(writer, "debug: {}", msg);
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
