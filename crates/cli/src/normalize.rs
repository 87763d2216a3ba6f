// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output normalization.
//!
//! Removes the parts of captured output that vary from run to run so the
//! result can be compared against a stored baseline. Rules apply to each
//! line in a fixed order:
//!
//! 1. Lines matching any drop pattern are removed.
//! 2. A line containing `VOLATILE` is replaced by `VOLATILE`.
//! 3. If enabled, `0x` followed by two or more hex digits becomes
//!    `0xHEXDIGITS`, unless the digits are `7F` repeated.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::CompareError;

/// Marker that makes a whole line volatile.
pub const VOLATILE: &str = "VOLATILE";

/// Replacement for masked hex numbers.
pub const HEX_PLACEHOLDER: &str = "0xHEXDIGITS";

/// Hex numbers with at least two digits.
static HEX_DIGITS_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"0x[0-9a-fA-F]{2,}").ok());

/// Hex numbers left alone. Anchored at both ends so the entire digit run
/// must be `7F` repeats, not just a prefix.
static PRESERVED_HEX_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^0x(?:7F)+$").ok());

/// Immutable normalization rules, compiled once.
#[derive(Clone, Debug)]
pub struct Normalizer {
    drop_patterns: Vec<Regex>,
    hex_masking: bool,
}

impl Normalizer {
    /// Compile `drop_patterns` and build a normalizer.
    pub fn new<S: AsRef<str>>(
        drop_patterns: &[S],
        hex_masking: bool,
    ) -> Result<Self, CompareError> {
        let drop_patterns = drop_patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| CompareError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            drop_patterns,
            hex_masking,
        })
    }

    /// True if `line` matches any drop pattern anywhere.
    fn is_dropped(&self, line: &str) -> bool {
        self.drop_patterns.iter().any(|re| re.is_match(line))
    }

    /// Normalize one line, or return `None` if it is dropped.
    pub fn normalize_line<'a>(&self, line: &'a str) -> Option<Cow<'a, str>> {
        if self.is_dropped(line) {
            return None;
        }
        if line.contains(VOLATILE) {
            return Some(Cow::Borrowed(VOLATILE));
        }
        if self.hex_masking {
            return Some(mask_hex(line));
        }
        Some(Cow::Borrowed(line))
    }

    /// Normalize a whole line sequence, preserving order.
    pub fn normalize_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines
            .iter()
            .filter_map(|line| self.normalize_line(line.as_ref()))
            .map(Cow::into_owned)
            .collect()
    }
}

/// Replace every hex number in `line` with [`HEX_PLACEHOLDER`], except
/// those whose digits are all `7F` repeats.
pub fn mask_hex(line: &str) -> Cow<'_, str> {
    let (Some(hex), Some(preserved)) = (HEX_DIGITS_REGEX.as_ref(), PRESERVED_HEX_REGEX.as_ref())
    else {
        return Cow::Borrowed(line);
    };
    hex.replace_all(line, |caps: &Captures| {
        let matched = &caps[0];
        if preserved.is_match(matched) {
            matched.to_string()
        } else {
            HEX_PLACEHOLDER.to_string()
        }
    })
}

/// Collapse every whitespace run in `line` to one space and trim the ends.
///
/// Only used for the whitespace-insensitive view shown on request at the
/// interactive prompt, never for the comparison itself.
pub fn normalize_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`normalize_whitespace`] applied to every line.
pub fn normalize_whitespace_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| normalize_whitespace(line.as_ref()))
        .collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
