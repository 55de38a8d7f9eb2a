// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query resolution against a [`TermIndex`].
//!
//! A query first tries an exact, case-sensitive lookup of the whole line.
//! Only when that misses is the line tokenized, delimiter-expanded and
//! broken into n-grams; every n-gram is looked up and all hits are kept,
//! across every granularity, not just the longest one that matched.

use std::collections::{BTreeSet, HashSet};

use crate::index::{NameKind, Posting, Term, TermIndex};
use crate::tokenize::{self, DEFAULT_DELIMITERS, Tokenizer, WordTokenizer};

/// Immutable per-run query settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Characters that split tokens into extra fragments.
    pub delimiters: Vec<char>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.chars().collect(),
        }
    }
}

/// One term matched by one index key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit<'a> {
    /// Index key that matched: the whole query or one n-gram.
    pub matched_part: String,
    pub term: &'a Term,
    pub kind: NameKind,
}

impl Hit<'_> {
    /// The matched name when it is a synonym rather than the label.
    pub fn matched_synonym(&self) -> Option<&str> {
        match self.kind {
            NameKind::Label => None,
            NameKind::ExactSynonym | NameKind::LowercaseSynonym => {
                Some(self.matched_part.as_str())
            }
        }
    }
}

/// Outcome of resolving one query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub query: String,
    /// True when the whole line matched without tokenization.
    pub exact: bool,
    /// Hits in candidate order, then ontology order.
    pub hits: Vec<Hit<'a>>,
}

impl MatchResult<'_> {
    /// Distinct matched term identifiers.
    pub fn term_ids(&self) -> BTreeSet<&str> {
        self.hits.iter().map(|h| h.term.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Resolves query lines against a read-only index.
pub struct QueryResolver<'a, T: Tokenizer = WordTokenizer> {
    index: &'a TermIndex,
    tokenizer: T,
    options: QueryOptions,
}

impl<'a> QueryResolver<'a, WordTokenizer> {
    pub fn new(index: &'a TermIndex, options: QueryOptions) -> Self {
        Self::with_tokenizer(index, WordTokenizer, options)
    }
}

impl<'a, T: Tokenizer> QueryResolver<'a, T> {
    pub fn with_tokenizer(index: &'a TermIndex, tokenizer: T, options: QueryOptions) -> Self {
        Self {
            index,
            tokenizer,
            options,
        }
    }

    /// Resolve one query line.
    pub fn resolve(&self, query: &str) -> MatchResult<'a> {
        let exact = self.index.lookup(query);
        if !exact.is_empty() {
            return MatchResult {
                query: query.to_string(),
                exact: true,
                hits: self.hits(query, exact),
            };
        }

        let tokens = tokenize::expand_delimiters(
            self.tokenizer.tokenize(query),
            &self.options.delimiters,
        );
        let mut matched = HashSet::new();
        let mut hits = Vec::new();
        let mut windows = 0usize;

        // Windows wider than the longest key cannot match
        tokenize::for_each_ngram(&tokens, self.index.max_words(), |gram| {
            windows += 1;
            let postings = self.index.lookup(gram);
            if !postings.is_empty() && matched.insert(gram.to_string()) {
                hits.extend(self.hits(gram, postings));
            }
        });

        tracing::debug!(
            query,
            tokens = tokens.len(),
            windows,
            hits = hits.len(),
            "Resolved by n-gram fallback"
        );

        MatchResult {
            query: query.to_string(),
            exact: false,
            hits,
        }
    }

    fn hits(&self, part: &str, postings: &[Posting]) -> Vec<Hit<'a>> {
        let index: &'a TermIndex = self.index;
        postings
            .iter()
            .map(|p| Hit {
                matched_part: part.to_string(),
                term: index.term(p),
                kind: p.kind,
            })
            .collect()
    }
}

/// Query lines of an input text: trimmed, blank lines skipped.
pub fn query_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
