// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables consulted by the tool are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use crate::update::UpdatePolicy;

/// `UPDATE_EXPECT`: what to do when the outputs differ.
pub fn update_expect() -> Option<String> {
    std::env::var(names::UPDATE_EXPECT).ok()
}

/// `MAKEFLAGS`: flags of an enclosing `make`, used to detect `-j`.
pub fn makeflags() -> Option<String> {
    std::env::var(names::MAKEFLAGS).ok()
}

/// `DEBUG`: diagnostic verbosity. Default 0.
pub fn debug_level() -> Option<u32> {
    var_u32(names::DEBUG)
}

fn var_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Snapshot of every environment-provided setting, taken once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvSettings {
    pub update: UpdatePolicy,
    pub makeflags: Option<String>,
    pub debug_level: u32,
}

impl EnvSettings {
    /// Read the settings from the process environment.
    pub fn from_process_env() -> Self {
        Self {
            update: UpdatePolicy::from_env_value(update_expect().as_deref()),
            makeflags: makeflags(),
            debug_level: debug_level().unwrap_or(0),
        }
    }

    /// True when an enclosing `make` runs jobs in parallel.
    pub fn parallel_build(&self) -> bool {
        self.makeflags
            .as_deref()
            .is_some_and(|flags| flags.contains("-j"))
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
