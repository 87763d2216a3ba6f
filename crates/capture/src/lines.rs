// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting captured bytes into lines.

use std::str::Utf8Error;

/// Line appended when the captured text does not end in a newline.
///
/// Makes a missing trailing newline show up as a diffable difference.
pub const NO_NEWLINE_MARKER: &str = "\\ no newline";

/// Decode `data` as UTF-8 and split it at LF or CRLF boundaries.
///
/// The returned lines carry no line terminators. If the text is non-empty
/// and its last character is not `\n`, [`NO_NEWLINE_MARKER`] is appended.
pub fn split_lines(data: &[u8]) -> Result<Vec<String>, Utf8Error> {
    let text = std::str::from_utf8(data)?;
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    if !text.is_empty() && !text.ends_with('\n') {
        lines.push(NO_NEWLINE_MARKER.to_string());
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
