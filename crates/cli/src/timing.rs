// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timing data structures for --timing flag.

use std::time::Duration;

/// Phase timing breakdown.
#[derive(Debug, Clone, Default)]
pub struct PhaseTiming {
    /// Reading and parsing the ontology.
    pub load_ms: u64,
    /// Building the term index.
    pub index_ms: u64,
    /// Resolving queries and writing output.
    pub search_ms: u64,
    /// Total elapsed time.
    pub total_ms: u64,
}

/// Complete timing information.
#[derive(Debug, Clone, Default)]
pub struct TimingInfo {
    pub phases: PhaseTiming,
    /// Query lines processed.
    pub queries: usize,
    /// Queries with at least one hit.
    pub matched: usize,
}

impl PhaseTiming {
    /// Format as text output lines for stderr.
    pub fn format_text(&self) -> String {
        format!(
            "load: {}ms\nindex: {}ms\nsearch: {}ms\ntotal: {}ms",
            self.load_ms, self.index_ms, self.search_ms, self.total_ms
        )
    }
}

impl TimingInfo {
    /// Format as text output lines for stderr.
    pub fn format_text(&self) -> String {
        format!(
            "{}\nqueries: {}/{} matched",
            self.phases.format_text(),
            self.matched,
            self.queries
        )
    }
}

/// Whole milliseconds, saturating.
pub fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
