// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! RDF/XML ontology reader.
//!
//! Streams the document with quick-xml and keeps only what name matching
//! needs. The recognized shape is the one OWL tools emit:
//!
//! ```text
//! <rdf:RDF ...>                                  depth 1: root
//!   <owl:Class rdf:about="...">                  depth 2: subject
//!     <rdfs:label>cell</rdfs:label>              depth 3: annotation
//!     <rdfs:subClassOf rdf:resource="..."/>      depth 3: resource annotation
//!     <rdfs:subClassOf>                          depth 3: structured, skipped
//!       <owl:Restriction>...</owl:Restriction>
//!     </rdfs:subClassOf>
//!   </owl:Class>
//! </rdf:RDF>
//! ```
//!
//! `rdf:Description` subjects count as classes when typed `owl:Class`.
//! Entities declared in the DOCTYPE (`<!ENTITY obo "...">`) are expanded in
//! attribute values and text.

use std::collections::HashMap;
use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;

use super::{Annotation, Ontology, OntologyClass};

/// Matches `<!ENTITY name "value">` declarations inside a DOCTYPE.
#[allow(clippy::expect_used)]
static ENTITY_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!ENTITY\s+([A-Za-z_][\w.-]*)\s+(?:"([^"]*)"|'([^']*)')\s*>"#)
        .expect("valid regex")
});

/// Element depths within the document.
const ROOT_DEPTH: usize = 1;
const SUBJECT_DEPTH: usize = 2;
const PROPERTY_DEPTH: usize = 3;

/// A load failure with the byte offset where it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: u64,
}

/// Parse an RDF/XML document into an [`Ontology`].
pub fn parse(bytes: &[u8]) -> Result<Ontology, ParseError> {
    let mut reader = Reader::from_reader(bytes);
    let mut parser = Parser::default();

    loop {
        let event = reader.read_event().map_err(|e| ParseError {
            message: e.to_string(),
            position: reader.buffer_position() as u64,
        })?;
        let at = |message: String| ParseError {
            message,
            position: reader.buffer_position() as u64,
        };

        match event {
            Event::Start(e) => parser.start(&e, false).map_err(at)?,
            Event::Empty(e) => parser.start(&e, true).map_err(at)?,
            Event::End(_) => parser.end(),
            Event::Text(t) if parser.wants_text() => {
                let text = t
                    .unescape_with(|entity| parser.resolve(entity))
                    .map_err(|e| at(e.to_string()))?;
                parser.text(&text);
            }
            Event::CData(c) if parser.wants_text() => {
                parser.text(&String::from_utf8_lossy(&c.into_inner()));
            }
            Event::DocType(d) => {
                parser.declare_entities(&String::from_utf8_lossy(&d.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    parser.finish().map_err(|message| ParseError {
        message,
        position: reader.buffer_position() as u64,
    })
}

/// Subject element being read (depth 2).
struct Subject {
    class: OntologyClass,
    is_class: bool,
}

/// Literal property element being read (depth 3).
struct PendingProperty {
    name: String,
    text: String,
    nested: bool,
}

#[derive(Default)]
struct Parser {
    depth: usize,
    seen_root: bool,
    entities: HashMap<String, String>,
    subject: Option<Subject>,
    property: Option<PendingProperty>,
    subjects: Vec<Subject>,
    by_iri: HashMap<String, usize>,
}

impl Parser {
    fn start(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<(), String> {
        let depth = self.depth + 1;

        match depth {
            ROOT_DEPTH => {
                let name = local_name(e);
                if name != "RDF" {
                    return Err(format!(
                        "unsupported ontology format: root element <{name}>, expected <rdf:RDF>"
                    ));
                }
                self.seen_root = true;
            }
            SUBJECT_DEPTH => {
                self.subject = self.subject_for(e)?;
                if empty {
                    self.finish_subject();
                }
            }
            PROPERTY_DEPTH => {
                if self.subject.is_some() {
                    self.start_property(e, empty)?;
                }
            }
            _ => {
                if let Some(property) = self.property.as_mut() {
                    property.nested = true;
                }
            }
        }

        if !empty {
            self.depth = depth;
        }
        Ok(())
    }

    fn end(&mut self) {
        match self.depth {
            PROPERTY_DEPTH => {
                if let Some(property) = self.property.take()
                    && !property.nested
                    && !property.text.trim().is_empty()
                    && let Some(subject) = self.subject.as_mut()
                {
                    subject
                        .class
                        .annotations
                        .push(Annotation::new(property.name, property.text));
                }
            }
            SUBJECT_DEPTH => self.finish_subject(),
            _ => {}
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn wants_text(&self) -> bool {
        self.depth == PROPERTY_DEPTH && self.property.as_ref().is_some_and(|p| !p.nested)
    }

    fn text(&mut self, text: &str) {
        if let Some(property) = self.property.as_mut() {
            property.text.push_str(text);
        }
    }

    fn declare_entities(&mut self, doctype: &str) {
        for caps in ENTITY_DECL.captures_iter(doctype) {
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            self.entities.insert(caps[1].to_string(), value.to_string());
        }
    }

    fn resolve(&self, entity: &str) -> Option<&str> {
        self.entities
            .get(entity)
            .map(String::as_str)
            .or_else(|| resolve_predefined_entity(entity))
    }

    fn subject_for(&self, e: &BytesStart<'_>) -> Result<Option<Subject>, String> {
        let is_class = match local_name(e).as_str() {
            "Class" => true,
            "Description" => false,
            _ => return Ok(None),
        };

        let iri = match self.attr(e, b"about")? {
            Some(iri) => iri,
            None => match self.attr(e, b"ID")? {
                Some(id) => format!("#{id}"),
                None => return Ok(None),
            },
        };

        Ok(Some(Subject {
            class: OntologyClass::new(iri),
            is_class,
        }))
    }

    fn start_property(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<(), String> {
        let name = local_name(e);
        let resource = self.attr(e, b"resource")?;

        let Some(subject) = self.subject.as_mut() else {
            return Ok(());
        };

        match resource {
            Some(iri) if name == "type" => {
                if iri.ends_with("#Class") {
                    subject.is_class = true;
                }
            }
            Some(iri) => subject.class.annotations.push(Annotation::new(name, iri)),
            None if !empty => {
                self.property = Some(PendingProperty {
                    name,
                    text: String::new(),
                    nested: false,
                });
            }
            None => {}
        }
        Ok(())
    }

    fn finish_subject(&mut self) {
        let Some(subject) = self.subject.take() else {
            return;
        };

        match self.by_iri.get(&subject.class.iri) {
            Some(&idx) => {
                let existing = &mut self.subjects[idx];
                existing.is_class |= subject.is_class;
                existing.class.annotations.extend(subject.class.annotations);
            }
            None => {
                self.by_iri
                    .insert(subject.class.iri.clone(), self.subjects.len());
                self.subjects.push(subject);
            }
        }
    }

    fn finish(self) -> Result<Ontology, String> {
        if !self.seen_root {
            return Err("no root element found".to_string());
        }
        if self.depth != 0 {
            return Err(format!(
                "unexpected end of document: {} unclosed element(s)",
                self.depth
            ));
        }

        Ok(Ontology {
            classes: self
                .subjects
                .into_iter()
                .filter(|s| s.is_class)
                .map(|s| s.class)
                .collect(),
        })
    }

    fn attr(&self, e: &BytesStart<'_>, local: &[u8]) -> Result<Option<String>, String> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| err.to_string())?;
            if attr.key.local_name().as_ref() == local {
                let value = attr
                    .unescape_value_with(|entity| self.resolve(entity))
                    .map_err(|err| err.to_string())?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

#[cfg(test)]
#[path = "rdfxml_tests.rs"]
mod tests;
