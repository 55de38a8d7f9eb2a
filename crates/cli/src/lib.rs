pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod index;
pub mod ontology;
pub mod output;
pub mod reader;
pub mod resolver;
pub mod timing;
pub mod tokenize;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use filter::{Condition, FilterSet};
pub use index::{IndexOptions, NameKind, Term, TermIndex};
pub use ontology::{Ontology, OntologyClass};
pub use reader::{FileContent, FileReader};
pub use resolver::{Hit, MatchResult, QueryOptions, QueryResolver};
pub use tokenize::{Tokenizer, WordTokenizer};
