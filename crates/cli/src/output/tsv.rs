// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TSV output formatter.
//!
//! ```text
//! Query	MatchedPart	TermID	MatchType	TermLabel	MatchedSynonym
//! MCF-7 cell	MCF-7	CVCL_0031	label	MCF-7
//! zebrafish
//! ```
//!
//! A query without hits still gets a row, with every other column empty.

use std::borrow::Cow;
use std::io::Write;

use super::MatchWriter;
use crate::resolver::MatchResult;

pub const HEADER: &str = "Query\tMatchedPart\tTermID\tMatchType\tTermLabel\tMatchedSynonym";

/// TSV output formatter.
pub struct TsvFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TsvFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MatchWriter for TsvFormatter<W> {
    fn write_header(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "{HEADER}")
    }

    fn write_result(&mut self, result: &MatchResult<'_>) -> std::io::Result<()> {
        let query = cell(&result.query);

        if result.hits.is_empty() {
            return writeln!(self.writer, "{query}\t\t\t\t\t");
        }

        for hit in &result.hits {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}\t{}\t{}",
                query,
                cell(&hit.matched_part),
                cell(&hit.term.id),
                hit.kind,
                cell(hit.term.label.as_deref().unwrap_or("")),
                cell(hit.matched_synonym().unwrap_or("")),
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// Replace characters that would break the row structure.
fn cell(value: &str) -> Cow<'_, str> {
    if value.contains(['\t', '\n', '\r']) {
        Cow::Owned(value.replace(['\t', '\n', '\r'], " "))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
#[path = "tsv_tests.rs"]
mod tests;
