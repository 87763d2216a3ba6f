// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Update policies and the interactive update state machine.

/// Which way an empty answer at the interactive prompt goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptDefault {
    No,
    Yes,
}

/// What to do with the expected-output file when the outputs differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Report the difference and fail.
    #[default]
    Never,
    /// Overwrite the expected output without asking.
    Always,
    /// Ask the operator.
    Prompt(PromptDefault),
}

impl UpdatePolicy {
    /// Parse the value of `UPDATE_EXPECT`.
    ///
    /// Unset, `"0"` and anything unrecognized mean [`UpdatePolicy::Never`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("1") => UpdatePolicy::Always,
            Some("prompt") => UpdatePolicy::Prompt(PromptDefault::No),
            Some("promptyes") => UpdatePolicy::Prompt(PromptDefault::Yes),
            _ => UpdatePolicy::Never,
        }
    }
}

/// States of the interactive update loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptState {
    Prompting,
    ShowingWhitespaceDiff,
    /// Terminal: overwrite the expected output.
    Updating,
    /// Terminal: leave the expected output alone and fail.
    Rejecting,
}

impl PromptState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PromptState::Updating | PromptState::Rejecting)
    }

    /// The state reached from [`PromptState::Prompting`] after `answer`.
    ///
    /// Only the line terminator is stripped from `answer`; unrecognized
    /// answers prompt again.
    pub fn after_answer(answer: &str, default: PromptDefault) -> Self {
        match answer.trim_end_matches(['\n', '\r']) {
            "y" => PromptState::Updating,
            "n" => PromptState::Rejecting,
            "b" => PromptState::ShowingWhitespaceDiff,
            "" => match default {
                PromptDefault::Yes => PromptState::Updating,
                PromptDefault::No => PromptState::Rejecting,
            },
            _ => PromptState::Prompting,
        }
    }
}

/// The question asked at the interactive prompt.
pub fn prompt_text(default: PromptDefault) -> &'static str {
    match default {
        PromptDefault::No => "Update expected output (y/n/b)? ",
        PromptDefault::Yes => "Update expected output (Y/n/b)? ",
    }
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
