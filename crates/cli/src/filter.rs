// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Annotation filters restricting which classes enter the term index.
//!
//! A condition is written `PROPERTY:VALUE`. The string is split at the first
//! colon only, so `hasDbXref:NCBI_TaxID:9606` keeps `NCBI_TaxID:9606` as the
//! value. A class satisfies a condition when any of its annotations on that
//! property contains the value as a substring. Conditions combine with AND.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::ontology::OntologyClass;

/// A single `PROPERTY:VALUE` inclusion condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Annotation property local name.
    pub property: String,
    /// Substring the annotation value must contain.
    pub value: String,
}

impl Condition {
    /// Parse a condition, rejecting strings without a colon or property.
    pub fn parse(text: &str) -> Result<Self> {
        let (property, value) = text.split_once(':').ok_or_else(|| {
            Error::Argument(format!(
                "invalid condition `{text}`: expected PROPERTY:VALUE"
            ))
        })?;

        let property = property.trim();
        if property.is_empty() {
            return Err(Error::Argument(format!(
                "invalid condition `{text}`: property name is empty"
            )));
        }

        Ok(Self {
            property: property.to_string(),
            value: value.to_string(),
        })
    }

    /// Check whether a class carries a matching annotation.
    pub fn matches(&self, class: &OntologyClass) -> bool {
        class
            .values(&self.property)
            .any(|v| v.contains(self.value.as_str()))
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.value)
    }
}

/// Conjunction of conditions. Empty admits every class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    conditions: Vec<Condition>,
}

impl FilterSet {
    /// Filter that admits everything.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse every condition string, failing on the first malformed one.
    pub fn parse<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let conditions = specs
            .iter()
            .map(|s| Condition::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { conditions })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// True when the class satisfies every condition.
    pub fn admits(&self, class: &OntologyClass) -> bool {
        self.conditions.iter().all(|c| c.matches(class))
    }
}

impl From<Vec<Condition>> for FilterSet {
    fn from(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
