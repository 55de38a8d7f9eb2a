// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles ontomatch.toml parsing with version validation and unknown key warnings.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::filter::FilterSet;
use crate::index::{IndexOptions, PropertyNames};
use crate::output::OutputFormat;
use crate::reader::MAX_FILE_SIZE;
use crate::resolver::QueryOptions;
use crate::tokenize::DEFAULT_DELIMITERS;

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up during discovery.
pub const CONFIG_FILE: &str = "ontomatch.toml";

/// Known keys per section; anything else is warned about and ignored.
const KNOWN_KEYS: &[&str] = &["version", "ontology", "query", "output"];
const KNOWN_ONTOLOGY_KEYS: &[&str] = &[
    "label_property",
    "exact_synonym_property",
    "lowercase_synonym_property",
    "max_file_size",
];
const KNOWN_QUERY_KEYS: &[&str] = &["delimiters", "conditions"];
const KNOWN_OUTPUT_KEYS: &[&str] = &["format"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    #[serde(default)]
    pub ontology: OntologyConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            ontology: OntologyConfig::default(),
            query: QueryConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// `[ontology]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OntologyConfig {
    /// Annotation property holding the primary label.
    #[serde(default = "OntologyConfig::default_label_property")]
    pub label_property: String,

    /// Annotation property holding exact synonyms.
    #[serde(default = "OntologyConfig::default_exact_synonym_property")]
    pub exact_synonym_property: String,

    /// Annotation property holding preprocessed lowercase synonyms.
    #[serde(default = "OntologyConfig::default_lowercase_synonym_property")]
    pub lowercase_synonym_property: String,

    /// Largest ontology or query file to read, in bytes.
    #[serde(default = "OntologyConfig::default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            label_property: Self::default_label_property(),
            exact_synonym_property: Self::default_exact_synonym_property(),
            lowercase_synonym_property: Self::default_lowercase_synonym_property(),
            max_file_size: Self::default_max_file_size(),
        }
    }
}

impl OntologyConfig {
    fn default_label_property() -> String {
        PropertyNames::default().label
    }

    fn default_exact_synonym_property() -> String {
        PropertyNames::default().exact_synonym
    }

    fn default_lowercase_synonym_property() -> String {
        PropertyNames::default().lowercase_synonym
    }

    fn default_max_file_size() -> u64 {
        MAX_FILE_SIZE
    }
}

/// `[query]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryConfig {
    /// Characters that split tokens into extra fragments.
    #[serde(default = "QueryConfig::default_delimiters")]
    pub delimiters: String,

    /// Filter conditions applied on every run, before CLI conditions.
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            delimiters: Self::default_delimiters(),
            conditions: Vec::new(),
        }
    }
}

impl QueryConfig {
    fn default_delimiters() -> String {
        DEFAULT_DELIMITERS.to_string()
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `-o` is not given.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Index options for this config with the given filter.
    pub fn index_options(&self, filter: FilterSet) -> IndexOptions {
        IndexOptions {
            properties: PropertyNames {
                label: self.ontology.label_property.clone(),
                exact_synonym: self.ontology.exact_synonym_property.clone(),
                lowercase_synonym: self.ontology.lowercase_synonym_property.clone(),
            },
            filter,
        }
    }

    /// Query options for this config.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            delimiters: self.query.delimiters.chars().collect(),
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config, warning on unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = parse(&content, path)?;
    if let Ok(table) = content.parse::<toml::Table>() {
        for key in unknown_keys(&table) {
            warn_unknown_key(path, &key);
        }
    }
    Ok(config)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade ontomatch to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Dotted names of keys this version does not recognize.
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();

    for (key, value) in table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }

        let known: &[&str] = match key.as_str() {
            "ontology" => KNOWN_ONTOLOGY_KEYS,
            "query" => KNOWN_QUERY_KEYS,
            "output" => KNOWN_OUTPUT_KEYS,
            _ => continue,
        };

        if let toml::Value::Table(section) = value {
            for sub in section.keys() {
                if !known.contains(&sub.as_str()) {
                    unknown.push(format!("{key}.{sub}"));
                }
            }
        }
    }

    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "ontomatch: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
