// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for match results.
//!
//! Every formatter streams: one [`MatchResult`] is written as soon as it is
//! resolved, so memory stays flat regardless of input size.

use std::io;

use serde::Deserialize;

use crate::resolver::MatchResult;

pub mod json;
pub mod text;
pub mod tsv;

/// Selectable output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated, one row per hit
    #[default]
    Tsv,
    /// JSON Lines, one object per query
    Json,
    /// Human-readable
    Text,
}

/// Sink for match results.
pub trait MatchWriter {
    /// Called once before the first result.
    fn write_header(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Write one query's result.
    fn write_result(&mut self, result: &MatchResult<'_>) -> io::Result<()>;

    /// Flush buffered output.
    fn finish(&mut self) -> io::Result<()>;
}
