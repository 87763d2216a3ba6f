// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use rstest::rstest;

fn run(stdout: &[u8], stderr: Option<&[u8]>, exit_code: i32) -> CapturedRun {
    CapturedRun {
        stdout: stdout.to_vec(),
        stderr: stderr.map(<[u8]>::to_vec),
        exit_code,
    }
}

fn options(separators: bool, command_headers: bool) -> TranscriptOptions {
    TranscriptOptions {
        separators,
        command_headers,
        stderr: StderrMode::Capture,
    }
}

fn prog() -> Invocation {
    Invocation::new("prog", vec!["x".to_string()])
}

#[test]
fn separators_wrap_every_section() {
    let mut transcript = Transcript::new(options(true, false));
    transcript
        .record(&prog(), &run(b"out\n", Some(b"err\n"), 0))
        .unwrap();

    assert_eq!(
        transcript.lines(),
        [
            "---- stdout ----",
            "out",
            "---- stderr ----",
            "err",
            "---- exit status ----",
            "Exit 0",
        ]
    );
}

#[test]
fn uncaptured_stderr_has_no_section() {
    let mut transcript = Transcript::new(options(true, false));
    transcript.record(&prog(), &run(b"out\n", None, 1)).unwrap();

    assert_eq!(
        transcript.lines(),
        ["---- stdout ----", "out", "---- exit status ----", "Exit 1"]
    );
}

#[rstest]
#[case(true, 0, true)]
#[case(true, 5, true)]
#[case(false, 0, false)]
#[case(false, 5, true)]
fn exit_line_emission(#[case] separators: bool, #[case] code: i32, #[case] shown: bool) {
    let mut transcript = Transcript::new(options(separators, false));
    transcript.record(&prog(), &run(b"", Some(b""), code)).unwrap();

    let exit_line = format!("Exit {}", code);
    assert_eq!(transcript.lines().contains(&exit_line), shown);
}

#[test]
fn no_separators_is_just_the_output() {
    let mut transcript = Transcript::new(options(false, false));
    transcript
        .record(&prog(), &run(b"a\nb\n", Some(b"c\n"), 0))
        .unwrap();

    assert_eq!(transcript.lines(), ["a", "b", "c"]);
}

#[test]
fn missing_newline_is_marked_per_stream() {
    let mut transcript = Transcript::new(options(false, false));
    transcript
        .record(&prog(), &run(b"partial", Some(b"oops"), 0))
        .unwrap();

    assert_eq!(
        transcript.lines(),
        ["partial", "\\ no newline", "oops", "\\ no newline"]
    );
}

#[test]
fn command_header_precedes_each_invocation() {
    let mut transcript = Transcript::new(options(true, true));
    let first = Invocation::new("echo", vec!["a".to_string()]);
    let second = Invocation::new("echo", vec!["b".to_string()]);
    transcript.record(&first, &run(b"a\n", None, 0)).unwrap();
    transcript.record(&second, &run(b"b\n", None, 0)).unwrap();

    assert_eq!(
        transcript.into_lines(),
        [
            "======== echo a ========",
            "---- stdout ----",
            "a",
            "---- exit status ----",
            "Exit 0",
            "======== echo b ========",
            "---- stdout ----",
            "b",
            "---- exit status ----",
            "Exit 0",
        ]
    );
}

#[test]
fn invalid_utf8_names_stream_and_command() {
    let mut transcript = Transcript::new(options(true, false));
    let err = transcript
        .record(&prog(), &run(b"ok\n", Some(b"\xff\n"), 0))
        .unwrap_err();

    match err {
        CaptureError::Decode {
            command, stream, ..
        } => {
            assert_eq!(command, "prog x");
            assert_eq!(stream, Stream::Stderr);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn runner_builds_one_invocation_per_line() {
    let runner = Runner::new(
        "prog",
        vec!["--fixed".to_string()],
        TranscriptOptions::default(),
    );
    let lines = vec!["a".to_string(), String::new(), "b c".to_string()];
    let commands: Vec<String> = runner
        .invocations(&lines)
        .map(|inv| inv.command_line())
        .collect();

    assert_eq!(
        commands,
        ["prog --fixed a", "prog --fixed", "prog --fixed b c"]
    );
}

#[cfg(unix)]
#[tokio::test]
async fn runner_runs_in_order_with_headers() {
    let runner = Runner::new("echo", vec![], options(true, true));
    let lines = vec!["a".to_string(), "b".to_string()];
    let mut started = Vec::new();
    let output = runner
        .run_all(&lines, |inv| started.push(inv.command_line()))
        .await
        .unwrap();

    assert_eq!(started, ["echo a", "echo b"]);
    assert_eq!(
        output,
        [
            "======== echo a ========",
            "---- stdout ----",
            "a",
            "---- stderr ----",
            "---- exit status ----",
            "Exit 0",
            "======== echo b ========",
            "---- stdout ----",
            "b",
            "---- stderr ----",
            "---- exit status ----",
            "Exit 0",
        ]
    );
}

#[cfg(unix)]
#[tokio::test]
async fn runner_with_no_lines_runs_nothing() {
    let runner = Runner::new("echo", vec![], TranscriptOptions::default());
    let output = runner.run_all(&[], |_| {}).await.unwrap();
    assert!(output.is_empty());
}
