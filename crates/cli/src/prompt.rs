// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where interactive answers come from.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A source of operator answers for the interactive update prompt.
pub trait AnswerSource {
    /// Show `prompt` and read one answer line.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Answers typed at the console: the prompt goes to stdout, the answer
/// is read from stdin.
#[derive(Debug, Default)]
pub struct ConsoleAnswers;

impl AnswerSource for ConsoleAnswers {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Pre-scripted answers, handed out in order. Records every prompt shown.
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
