// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level driver: run, normalize, compare.

use std::io::Write;

use compare_expect_capture::Runner;

use crate::cli::Cli;
use crate::env::EnvSettings;
use crate::error::CompareError;
use crate::expect_file::{read_lines, write_lines};
use crate::normalize::Normalizer;
use crate::output_diagnostic::{print_debug, print_warning};
use crate::prompt::AnswerSource;
use crate::reconcile::{Outcome, Reconciler};

/// Run the program described by `cli` and reconcile its output with the
/// expected-output file.
pub async fn run<A, W>(
    cli: &Cli,
    settings: &EnvSettings,
    answers: &mut A,
    out: &mut W,
) -> Result<Outcome, CompareError>
where
    A: AnswerSource + ?Sized,
    W: Write + ?Sized,
{
    let debug = settings.debug_level;
    let normalizer = Normalizer::new(&cli.drop_lines, cli.hex_replacer)?;
    let extra_lines = extra_arg_lines(cli)?;

    let runner = Runner::new(&cli.program, cli.prog_args.clone(), cli.transcript_options());
    let raw = runner
        .run_all(&extra_lines, |invocation| {
            print_debug(debug, format_args!("running {}", invocation.command_line()));
        })
        .await?;

    let actual = normalizer.normalize_lines(&raw);
    print_debug(
        debug,
        format_args!("{} lines captured, {} after normalizing", raw.len(), actual.len()),
    );

    if let Some(path) = &cli.actual {
        write_lines(path, &actual)?;
    }

    let expected = read_lines(&cli.expect)?;
    Reconciler::new(&cli.expect, &expected, &actual, answers, out).run(settings)
}

/// The extra-argument lines, one per invocation.
fn extra_arg_lines(cli: &Cli) -> Result<Vec<String>, CompareError> {
    let Some(path) = &cli.argfile else {
        return Ok(vec![String::new()]);
    };
    let lines = read_lines(path)?;
    if lines.is_empty() {
        print_warning(format_args!(
            "{} is empty; {} will not be run",
            path.display(),
            cli.program
        ));
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
