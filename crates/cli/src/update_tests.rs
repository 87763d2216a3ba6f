// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    unset = { None, UpdatePolicy::Never },
    zero = { Some("0"), UpdatePolicy::Never },
    one = { Some("1"), UpdatePolicy::Always },
    prompt = { Some("prompt"), UpdatePolicy::Prompt(PromptDefault::No) },
    prompt_yes = { Some("promptyes"), UpdatePolicy::Prompt(PromptDefault::Yes) },
    unknown = { Some("yes"), UpdatePolicy::Never },
    wrong_case = { Some("PROMPT"), UpdatePolicy::Never },
)]
fn policy_from_env_value(value: Option<&str>, expected: UpdatePolicy) {
    assert_eq!(UpdatePolicy::from_env_value(value), expected);
}

#[parameterized(
    yes = { "y", PromptDefault::No, PromptState::Updating },
    no = { "n", PromptDefault::Yes, PromptState::Rejecting },
    blank_view = { "b", PromptDefault::No, PromptState::ShowingWhitespaceDiff },
    empty_default_no = { "", PromptDefault::No, PromptState::Rejecting },
    empty_default_yes = { "", PromptDefault::Yes, PromptState::Updating },
    newline_stripped = { "y\n", PromptDefault::No, PromptState::Updating },
    crlf_stripped = { "n\r\n", PromptDefault::No, PromptState::Rejecting },
    bare_newline_default_yes = { "\n", PromptDefault::Yes, PromptState::Updating },
    uppercase_reprompts = { "Y", PromptDefault::No, PromptState::Prompting },
    word_reprompts = { "yes", PromptDefault::Yes, PromptState::Prompting },
    padded_reprompts = { " y", PromptDefault::No, PromptState::Prompting },
)]
fn answer_transitions(answer: &str, default: PromptDefault, expected: PromptState) {
    assert_eq!(PromptState::after_answer(answer, default), expected);
}

#[test]
fn only_update_and_reject_are_terminal() {
    assert!(PromptState::Updating.is_terminal());
    assert!(PromptState::Rejecting.is_terminal());
    assert!(!PromptState::Prompting.is_terminal());
    assert!(!PromptState::ShowingWhitespaceDiff.is_terminal());
}

#[test]
fn prompt_text_shows_default_in_capitals() {
    assert_eq!(prompt_text(PromptDefault::No), "Update expected output (y/n/b)? ");
    assert_eq!(prompt_text(PromptDefault::Yes), "Update expected output (Y/n/b)? ");
}
