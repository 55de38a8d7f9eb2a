// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ontology classes and their annotations.
//!
//! Only the parts of an ontology needed for name matching are kept: each
//! class's IRI and its flat list of `(property, value)` annotations. Property
//! names are XML local names, so `rdfs:label` is `label` and
//! `oboInOwl:hasDbXref` is `hasDbXref`.

pub mod rdfxml;

use std::path::Path;

use crate::error::{Error, Result};
use crate::reader::FileReader;

/// A single annotation on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Property local name (e.g. `label`, `hasExactSynonym`).
    pub property: String,
    /// Literal text, or the IRI for resource-valued annotations.
    pub value: String,
}

impl Annotation {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// An ontology class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyClass {
    /// Full IRI from `rdf:about`.
    pub iri: String,
    /// Annotations in document order.
    pub annotations: Vec<Annotation>,
}

impl OntologyClass {
    pub fn new(iri: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            annotations: Vec::new(),
        }
    }

    /// Builder-style annotation append.
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.annotations.push(Annotation::new(property, value));
        self
    }

    /// Short identifier: the IRI fragment after the last `#` or `/`.
    ///
    /// `http://purl.obolibrary.org/obo/CL_0000000` becomes `CL_0000000`.
    pub fn id(&self) -> &str {
        let trimmed = self.iri.trim_end_matches(['#', '/']);
        match trimmed.rfind(['#', '/']) {
            Some(pos) => &trimmed[pos + 1..],
            None => trimmed,
        }
    }

    /// All values of the given property, in document order.
    pub fn values<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.annotations
            .iter()
            .filter(move |a| a.property == property)
            .map(|a| a.value.as_str())
    }
}

/// A loaded ontology.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ontology {
    /// Classes in order of first appearance.
    pub classes: Vec<OntologyClass>,
}

impl Ontology {
    /// Load an RDF/XML ontology document from disk.
    pub fn load(path: &Path, reader: &FileReader) -> Result<Self> {
        let content = reader.read(path)?;
        let ontology = rdfxml::parse(&content.bytes).map_err(|e| Error::Ontology {
            path: path.to_path_buf(),
            message: e.message,
            position: e.position,
        })?;

        tracing::info!(
            path = %path.display(),
            bytes = content.size,
            classes = ontology.len(),
            "Loaded ontology"
        );
        Ok(ontology)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
