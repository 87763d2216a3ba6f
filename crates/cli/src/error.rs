// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the comparison tool.

use std::path::PathBuf;

use compare_expect_capture::CaptureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("invalid --drop-lines pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    NotUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("failed to read answer: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("input closed while waiting for an answer")]
    PromptClosed,

    #[error(transparent)]
    Capture(#[from] CaptureError),
}

impl CompareError {
    /// Short category name shown in front of the message.
    pub fn kind(&self) -> &'static str {
        match self {
            CompareError::InvalidPattern { .. } => "ConfigError",
            CompareError::Read { .. } | CompareError::Write { .. } | CompareError::Output(_) => {
                "IoError"
            }
            CompareError::NotUtf8 { .. } => "DecodeError",
            CompareError::Prompt(_) | CompareError::PromptClosed => "PromptError",
            CompareError::Capture(CaptureError::Decode { .. }) => "DecodeError",
            CompareError::Capture(_) => "SpawnError",
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
