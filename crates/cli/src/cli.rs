// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

pub use crate::output::OutputFormat;

/// Match free-text queries against ontology labels and synonyms
#[derive(Parser, Debug)]
#[command(name = "ontomatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Query file, one query per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Ontology file (RDF/XML)
    #[arg(value_name = "ONTOLOGY")]
    pub ontology: PathBuf,

    /// Only index terms whose annotation matches (PROPERTY:VALUE, repeatable)
    #[arg(short = 'c', long = "condition", value_name = "PROPERTY:VALUE")]
    pub conditions: Vec<String>,

    /// Output format [default: tsv]
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "ONTOMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print phase timings to stderr
    #[arg(long)]
    pub timing: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
