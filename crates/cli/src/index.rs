// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Term index: exact name text to the terms carrying that name.
//!
//! Built once from an [`Ontology`] and read-only afterwards. Keys are stored
//! verbatim; lookups are case-sensitive. Each posting remembers whether the
//! term carries the name as its label, an exact synonym, or a lowercase
//! synonym added by ontology preprocessing.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::filter::FilterSet;
use crate::ontology::Ontology;

/// How a term carries an indexed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    Label,
    ExactSynonym,
    LowercaseSynonym,
}

impl NameKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NameKind::Label => "label",
            NameKind::ExactSynonym => "exact_synonym",
            NameKind::LowercaseSynonym => "lowercase_synonym",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An indexed ontology term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Short identifier (IRI fragment).
    pub id: String,
    /// Full IRI.
    pub iri: String,
    /// Primary label, if the class has one.
    pub label: Option<String>,
}

/// Position of a term registered with a [`TermIndexBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermId(usize);

/// One term carrying one name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Posting {
    term: TermId,
    pub kind: NameKind,
}

/// Annotation properties that supply names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNames {
    pub label: String,
    pub exact_synonym: String,
    pub lowercase_synonym: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            label: "label".to_string(),
            exact_synonym: "hasExactSynonym".to_string(),
            lowercase_synonym: "hasBroadSynonym".to_string(),
        }
    }
}

/// Immutable options for building an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexOptions {
    pub properties: PropertyNames,
    pub filter: FilterSet,
}

/// Counters collected while building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Classes in the ontology.
    pub classes: usize,
    /// Classes rejected by the filter.
    pub excluded: usize,
    /// Distinct name strings.
    pub names: usize,
    /// (name, term, kind) entries.
    pub postings: usize,
}

/// Name-to-term lookup table.
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    terms: Vec<Term>,
    names: HashMap<String, Vec<Posting>>,
    /// Most space-separated words in any key.
    max_words: usize,
    stats: IndexStats,
}

impl TermIndex {
    /// Build the index from every class admitted by the options' filter.
    pub fn build(ontology: &Ontology, options: &IndexOptions) -> Self {
        let props = &options.properties;
        let mut builder = TermIndexBuilder::default();
        builder.stats.classes = ontology.len();

        for class in &ontology.classes {
            if !options.filter.admits(class) {
                builder.stats.excluded += 1;
                continue;
            }

            let label = class.values(&props.label).next().map(str::to_string);
            let term = builder.add_term(class.id(), &class.iri, label);

            for name in class.values(&props.label) {
                builder.add_name(name, term, NameKind::Label);
            }
            for name in class.values(&props.exact_synonym) {
                builder.add_name(name, term, NameKind::ExactSynonym);
            }
            for name in class.values(&props.lowercase_synonym) {
                builder.add_name(name, term, NameKind::LowercaseSynonym);
            }
        }

        let index = builder.finish();
        tracing::info!(
            classes = index.stats.classes,
            excluded = index.stats.excluded,
            terms = index.terms.len(),
            names = index.stats.names,
            postings = index.stats.postings,
            "Built term index"
        );
        index
    }

    /// Start an empty index for incremental construction.
    pub fn builder() -> TermIndexBuilder {
        TermIndexBuilder::default()
    }

    /// Postings for an exact name, empty if absent.
    pub fn lookup(&self, name: &str) -> &[Posting] {
        self.names.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Term identifiers carrying a name.
    pub fn ids(&self, name: &str) -> BTreeSet<&str> {
        self.lookup(name)
            .iter()
            .map(|p| self.term(p).id.as_str())
            .collect()
    }

    pub fn term(&self, posting: &Posting) -> &Term {
        &self.terms[posting.term.0]
    }

    /// Word count of the longest key. Longer n-grams cannot match.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Incremental [`TermIndex`] construction.
#[derive(Debug, Default)]
pub struct TermIndexBuilder {
    terms: Vec<Term>,
    slots: HashMap<String, usize>,
    postings: Vec<Vec<Posting>>,
    seen: HashSet<(usize, Posting)>,
    max_words: usize,
    stats: IndexStats,
}

impl TermIndexBuilder {
    /// Register a term, returning its position.
    pub fn add_term(&mut self, id: &str, iri: &str, label: Option<String>) -> TermId {
        self.terms.push(Term {
            id: id.to_string(),
            iri: iri.to_string(),
            label,
        });
        TermId(self.terms.len() - 1)
    }

    /// Index a name for a registered term. Empty names and repeats are ignored.
    ///
    /// A [`TermId`] handed out by a different builder that is out of range
    /// here is dropped with a warning.
    pub fn add_name(&mut self, name: &str, term: TermId, kind: NameKind) {
        if name.is_empty() {
            return;
        }
        if term.0 >= self.terms.len() {
            tracing::warn!(name, term = term.0, "Ignoring name for unregistered term");
            return;
        }
        let slot = match self.slots.get(name) {
            Some(&slot) => slot,
            None => {
                let slot = self.postings.len();
                self.slots.insert(name.to_string(), slot);
                self.postings.push(Vec::new());
                self.max_words = self.max_words.max(name.matches(' ').count() + 1);
                slot
            }
        };

        let posting = Posting { term, kind };
        if self.seen.insert((slot, posting)) {
            self.postings[slot].push(posting);
            self.stats.postings += 1;
        }
    }

    /// Convenience: register a term with a label and index that label.
    pub fn labeled(mut self, id: &str, label: &str) -> Self {
        let term = self.add_term(id, id, Some(label.to_string()));
        self.add_name(label, term, NameKind::Label);
        self
    }

    pub fn finish(mut self) -> TermIndex {
        let names: HashMap<String, Vec<Posting>> = self
            .slots
            .into_iter()
            .map(|(name, slot)| (name, std::mem::take(&mut self.postings[slot])))
            .collect();
        let stats = IndexStats {
            names: names.len(),
            ..self.stats
        };

        TermIndex {
            terms: self.terms,
            names,
            max_words: self.max_words,
            stats,
        }
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
