// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparing actual output with the expected output and resolving
//! differences according to the update policy.

use std::io::Write;
use std::path::Path;

use crate::diff::DiffReport;
use crate::env::EnvSettings;
use crate::error::CompareError;
use crate::expect_file::replace_lines;
use crate::normalize::normalize_whitespace_lines;
use crate::output_diagnostic::print_debug;
use crate::prompt::AnswerSource;
use crate::update::{prompt_text, PromptDefault, PromptState, UpdatePolicy};

/// Exit codes of the tool.
pub mod exit_codes {
    /// Outputs matched, or the expected output was updated.
    pub const SUCCESS: i32 = 0;
    /// Outputs differ and were not updated, or the run itself failed.
    pub const FAILURE: i32 = 2;
}

/// How a comparison ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Expected and actual output are identical.
    Matched,
    /// The expected-output file was overwritten with the actual output.
    Updated,
    /// The outputs differ and no update was requested.
    Unresolved,
    /// The operator declined the update.
    Declined,
    /// An interactive update was requested under a parallel build.
    RefusedParallel,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Matched | Outcome::Updated => exit_codes::SUCCESS,
            Outcome::Unresolved | Outcome::Declined | Outcome::RefusedParallel => {
                exit_codes::FAILURE
            }
        }
    }
}

/// Compares one actual output against its expected-output file.
///
/// Messages for the operator go to `out`; interactive answers come from
/// `answers`.
pub struct Reconciler<'a, A: ?Sized, W: ?Sized> {
    expect_path: &'a Path,
    expected: &'a [String],
    actual: &'a [String],
    answers: &'a mut A,
    out: &'a mut W,
}

impl<'a, A, W> Reconciler<'a, A, W>
where
    A: AnswerSource + ?Sized,
    W: Write + ?Sized,
{
    pub fn new(
        expect_path: &'a Path,
        expected: &'a [String],
        actual: &'a [String],
        answers: &'a mut A,
        out: &'a mut W,
    ) -> Self {
        Self {
            expect_path,
            expected,
            actual,
            answers,
            out,
        }
    }

    /// Diff the outputs and, on mismatch, apply the update policy in
    /// `settings`.
    pub fn run(&mut self, settings: &EnvSettings) -> Result<Outcome, CompareError> {
        let Some(report) = DiffReport::between(self.expected, self.actual) else {
            return Ok(Outcome::Matched);
        };

        print_debug(
            settings.debug_level,
            format_args!("{} differing hunks", report.hunk_count()),
        );
        self.say(format_args!("Results are different:"))?;
        self.print_diff(&report)?;

        match settings.update {
            UpdatePolicy::Always => {
                let path = self.expect_path;
                self.say(format_args!(
                    "UPDATE_EXPECT is 1.  Updating {} with the new output.",
                    path.display()
                ))?;
                self.update()?;
                Ok(Outcome::Updated)
            }
            UpdatePolicy::Prompt(default) => {
                // MAKEFLAGS is consulted only when prompting.
                if settings.parallel_build() {
                    self.say(format_args!(
                        "Since MAKEFLAGS contains '-j', I will not prompt to update."
                    ))?;
                    return Ok(Outcome::RefusedParallel);
                }
                self.interact(default)
            }
            UpdatePolicy::Never => {
                self.say(format_args!(
                    "Re-run with UPDATE_EXPECT=1 or UPDATE_EXPECT=prompt[yes] to update."
                ))?;
                Ok(Outcome::Unresolved)
            }
        }
    }

    /// Run the prompt state machine until it reaches a terminal state.
    fn interact(&mut self, default: PromptDefault) -> Result<Outcome, CompareError> {
        let mut state = PromptState::Prompting;
        while !state.is_terminal() {
            state = match state {
                PromptState::Prompting => {
                    let answer = self
                        .answers
                        .ask(prompt_text(default))
                        .map_err(CompareError::Prompt)?
                        .ok_or(CompareError::PromptClosed)?;
                    PromptState::after_answer(&answer, default)
                }
                PromptState::ShowingWhitespaceDiff => {
                    self.show_whitespace_diff()?;
                    PromptState::Prompting
                }
                PromptState::Updating | PromptState::Rejecting => state,
            };
        }

        if state == PromptState::Updating {
            let path = self.expect_path;
            self.say(format_args!(
                "Answer was 'y'.  Updating {} with the new output.",
                path.display()
            ))?;
            self.update()?;
            Ok(Outcome::Updated)
        } else {
            self.say(format_args!("Answer was 'n'.  Exiting with error."))?;
            Ok(Outcome::Declined)
        }
    }

    fn show_whitespace_diff(&mut self) -> Result<(), CompareError> {
        self.say(format_args!(
            "Answer was 'b'.  Repeating diff with whitespace normalized."
        ))?;
        let expected = normalize_whitespace_lines(self.expected);
        let actual = normalize_whitespace_lines(self.actual);
        match DiffReport::between(&expected, &actual) {
            Some(report) => {
                self.say(format_args!("Differences with normalized whitespace:"))?;
                self.print_diff(&report)
            }
            None => self.say(format_args!(
                "There are no differences after normalizing whitespace."
            )),
        }
    }

    fn update(&self) -> Result<(), CompareError> {
        replace_lines(self.expect_path, self.actual)
    }

    fn print_diff(&mut self, report: &DiffReport) -> Result<(), CompareError> {
        for line in report.lines() {
            self.say(format_args!("{line}"))?;
        }
        Ok(())
    }

    fn say(&mut self, msg: std::fmt::Arguments<'_>) -> Result<(), CompareError> {
        writeln!(self.out, "{msg}").map_err(CompareError::Output)
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
