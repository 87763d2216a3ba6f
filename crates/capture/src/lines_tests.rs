// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(b"abc\n", &["abc"])]
#[case(b"abc", &["abc", "\\ no newline"])]
#[case(b"", &[])]
#[case(b"\n", &[""])]
#[case(b"a\r\nb\r\n", &["a", "b"])]
#[case(b"a\nb\r\nc\n", &["a", "b", "c"])]
#[case(b"a\r\nb", &["a", "b", "\\ no newline"])]
#[case(b"one\n\nthree\n", &["one", "", "three"])]
fn splits_lines(#[case] input: &[u8], #[case] expected: &[&str]) {
    assert_eq!(split_lines(input).unwrap(), expected);
}

#[test]
fn invalid_utf8_is_an_error() {
    assert!(split_lines(b"ok\n\xff\xfe\n").is_err());
}

#[test]
fn marker_is_a_literal_backslash_line() {
    assert_eq!(NO_NEWLINE_MARKER, r"\ no newline");
}

proptest! {
    #[test]
    fn lines_never_contain_terminators(text in "[a-z \r\n]{0,64}") {
        let lines = split_lines(text.as_bytes()).unwrap();
        for line in &lines {
            prop_assert!(!line.contains('\n'));
            prop_assert!(!line.ends_with("\r\n"));
        }
    }

    #[test]
    fn marker_appended_only_without_trailing_newline(text in "[a-z\n]{1,64}") {
        let lines = split_lines(text.as_bytes()).unwrap();
        let has_marker = lines.last().map(String::as_str) == Some(NO_NEWLINE_MARKER);
        prop_assert_eq!(has_marker, !text.ends_with('\n'));
    }
}
