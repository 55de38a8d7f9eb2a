// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! MCF-7 cell
//!   CVCL_0031  MCF-7  label "MCF-7"
//!   CL_0000000  cell  label "cell"
//! zebrafish
//!   (no match)
//! ```
//!
//! Exact whole-line matches are marked `[exact]` after the query.

use std::io::Write;

use termcolor::WriteColor;

use super::MatchWriter;
use crate::color::scheme;
use crate::resolver::{Hit, MatchResult};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
    queries: usize,
    matched: usize,
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a new text formatter.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            queries: 0,
            matched: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_hit(&mut self, hit: &Hit<'_>) -> std::io::Result<()> {
        write!(self.writer, "  ")?;
        self.writer.set_color(&scheme::term_id())?;
        write!(self.writer, "{}", hit.term.id)?;
        self.writer.reset()?;

        if let Some(label) = &hit.term.label {
            write!(self.writer, "  {}", label)?;
        }

        write!(self.writer, "  ")?;
        self.writer.set_color(&scheme::match_type())?;
        write!(self.writer, "{}", hit.kind)?;
        self.writer.reset()?;
        writeln!(self.writer, " \"{}\"", hit.matched_part)
    }
}

impl<W: WriteColor> MatchWriter for TextFormatter<W> {
    fn write_result(&mut self, result: &MatchResult<'_>) -> std::io::Result<()> {
        self.queries += 1;

        self.writer.set_color(&scheme::query())?;
        write!(self.writer, "{}", result.query)?;
        self.writer.reset()?;
        if result.exact {
            write!(self.writer, " ")?;
            self.writer.set_color(&scheme::exact())?;
            write!(self.writer, "[exact]")?;
            self.writer.reset()?;
        }
        writeln!(self.writer)?;

        if result.is_empty() {
            write!(self.writer, "  ")?;
            self.writer.set_color(&scheme::no_match())?;
            write!(self.writer, "(no match)")?;
            self.writer.reset()?;
            return writeln!(self.writer);
        }

        self.matched += 1;
        for hit in &result.hits {
            self.write_hit(hit)?;
        }
        Ok(())
    }

    /// Write the summary line.
    fn finish(&mut self) -> std::io::Result<()> {
        if self.queries > 0 {
            writeln!(
                self.writer,
                "{} of {} quer{} matched",
                self.matched,
                self.queries,
                if self.queries == 1 { "y" } else { "ies" }
            )?;
        }
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
