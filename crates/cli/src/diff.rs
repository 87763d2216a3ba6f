// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unified diff of expected vs actual lines.

use std::fmt;

use similar::TextDiff;

/// Lines of context around each change.
pub const CONTEXT_RADIUS: usize = 3;

/// A rendered, non-empty unified diff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffReport {
    hunks: usize,
    text: String,
}

impl DiffReport {
    /// Diff `expect` against `actual`, or `None` if they are equal.
    ///
    /// The two sides are labelled `expect` and `actual`.
    pub fn between<S: AsRef<str>, T: AsRef<str>>(expect: &[S], actual: &[T]) -> Option<Self> {
        let old: Vec<&str> = expect.iter().map(|line| line.as_ref()).collect();
        let new: Vec<&str> = actual.iter().map(|line| line.as_ref()).collect();
        if old == new {
            return None;
        }

        let diff = TextDiff::from_slices(&old, &new);
        let hunks = diff.grouped_ops(CONTEXT_RADIUS).len();
        let text = diff
            .unified_diff()
            .context_radius(CONTEXT_RADIUS)
            .header("expect", "actual")
            .to_string();
        Some(Self { hunks, text })
    }

    pub fn hunk_count(&self) -> usize {
        self.hunks
    }

    /// The diff, one output line per item.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
