// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn generated_names_match_variables() {
    assert_eq!(UPDATE_EXPECT, "UPDATE_EXPECT");
    assert_eq!(MAKEFLAGS, "MAKEFLAGS");
    assert_eq!(DEBUG, "DEBUG");
}

#[parameterized(
    unset = { None, false },
    empty = { Some(""), false },
    serial = { Some("--no-print-directory"), false },
    jobs = { Some("-j4"), true },
    jobs_bare = { Some(" -j --jobserver-auth=3,4"), true },
)]
fn parallel_build_detection(makeflags: Option<&str>, expected: bool) {
    let settings = EnvSettings {
        makeflags: makeflags.map(str::to_string),
        ..EnvSettings::default()
    };
    assert_eq!(settings.parallel_build(), expected);
}

#[test]
fn default_settings_never_update() {
    let settings = EnvSettings::default();
    assert_eq!(settings.update, UpdatePolicy::Never);
    assert_eq!(settings.debug_level, 0);
}
