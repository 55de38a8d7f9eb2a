// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON Lines output formatter.
//!
//! One compact object per query, streamed as results arrive.

use std::collections::BTreeSet;
use std::io::Write;

use serde::Serialize;

use super::MatchWriter;
use crate::index::NameKind;
use crate::resolver::{Hit, MatchResult};

/// One query's result as serialized.
#[derive(Debug, Serialize)]
pub struct QueryOutput<'a> {
    pub query: &'a str,
    pub exact: bool,
    pub terms: BTreeSet<&'a str>,
    pub hits: Vec<HitOutput<'a>>,
}

/// One hit as serialized.
#[derive(Debug, Serialize)]
pub struct HitOutput<'a> {
    pub matched_part: &'a str,
    pub term_id: &'a str,
    pub match_type: NameKind,
    pub term_label: Option<&'a str>,
    pub matched_synonym: Option<&'a str>,
}

impl<'a> From<&'a MatchResult<'_>> for QueryOutput<'a> {
    fn from(result: &'a MatchResult<'_>) -> Self {
        Self {
            query: &result.query,
            exact: result.exact,
            terms: result.term_ids(),
            hits: result.hits.iter().map(Into::into).collect(),
        }
    }
}

impl<'a> From<&'a Hit<'_>> for HitOutput<'a> {
    fn from(hit: &'a Hit<'_>) -> Self {
        Self {
            matched_part: &hit.matched_part,
            term_id: &hit.term.id,
            match_type: hit.kind,
            term_label: hit.term.label.as_deref(),
            matched_synonym: hit.matched_synonym(),
        }
    }
}

/// JSON Lines output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MatchWriter for JsonFormatter<W> {
    fn write_result(&mut self, result: &MatchResult<'_>) -> std::io::Result<()> {
        let json =
            serde_json::to_string(&QueryOutput::from(result)).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    fn finish(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
