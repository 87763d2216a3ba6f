// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `run-compare-expect` binary entry point.

use std::io;

use clap::Parser;

use compare_expect::app;
use compare_expect::cli::Cli;
use compare_expect::env::EnvSettings;
use compare_expect::output_diagnostic::print_failure;
use compare_expect::prompt::ConsoleAnswers;
use compare_expect::reconcile::exit_codes;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let settings = EnvSettings::from_process_env();

    let mut answers = ConsoleAnswers;
    let mut stdout = io::stdout();
    match app::run(&cli, &settings, &mut answers, &mut stdout).await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            print_failure(&e, settings.debug_level);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}
