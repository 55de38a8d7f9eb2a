// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ontomatch CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use ontomatch::cli::Cli;
use ontomatch::error::ExitCode;

mod cmd_match;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("ONTOMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let exit_code = match cmd_match::run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("ontomatch: {}", e);
            match e.downcast_ref::<ontomatch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::Failure,
            }
        }
    };

    std::process::exit(exit_code as i32);
}
