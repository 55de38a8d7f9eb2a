// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use std::io::BufWriter;
use std::time::Instant;

use termcolor::BufferedStandardStream;

use ontomatch::cli::{Cli, OutputFormat};
use ontomatch::color;
use ontomatch::config::{self, Config};
use ontomatch::discovery;
use ontomatch::filter::FilterSet;
use ontomatch::index::TermIndex;
use ontomatch::ontology::Ontology;
use ontomatch::output::MatchWriter;
use ontomatch::output::json::JsonFormatter;
use ontomatch::output::text::TextFormatter;
use ontomatch::output::tsv::TsvFormatter;
use ontomatch::reader::FileReader;
use ontomatch::resolver::{QueryResolver, query_lines};
use ontomatch::timing::{PhaseTiming, TimingInfo, millis};

/// Run the match command.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let total_start = Instant::now();
    let cwd = std::env::current_dir()?;

    // Find and load config
    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading config");
            config::load_with_warnings(&path)?
        }
        None => Config::default(),
    };

    // Malformed conditions must fail before any file is touched
    let conditions: Vec<&str> = config
        .query
        .conditions
        .iter()
        .chain(&cli.conditions)
        .map(String::as_str)
        .collect();
    let filter = FilterSet::parse(&conditions)?;

    let reader = FileReader::with_max_size(config.ontology.max_file_size);
    let queries = reader.read(&cli.input)?;

    let load_start = Instant::now();
    let ontology = Ontology::load(&cli.ontology, &reader)?;
    let load_ms = millis(load_start.elapsed());

    let index_start = Instant::now();
    let index = TermIndex::build(&ontology, &config.index_options(filter));
    let index_ms = millis(index_start.elapsed());
    drop(ontology);

    let format = cli.output.or(config.output.format).unwrap_or_default();
    let mut writer: Box<dyn MatchWriter> = match format {
        OutputFormat::Tsv => Box::new(TsvFormatter::new(BufWriter::new(std::io::stdout().lock()))),
        OutputFormat::Json => {
            Box::new(JsonFormatter::new(BufWriter::new(std::io::stdout().lock())))
        }
        OutputFormat::Text => Box::new(TextFormatter::new(BufferedStandardStream::stdout(
            color::choose(cli.color, cli.no_color),
        ))),
    };

    let search_start = Instant::now();
    let resolver = QueryResolver::new(&index, config.query_options());
    let text = queries.text();
    let mut info = TimingInfo::default();

    writer.write_header()?;
    for line in query_lines(&text) {
        let result = resolver.resolve(line);
        info.queries += 1;
        if !result.is_empty() {
            info.matched += 1;
        }
        writer.write_result(&result)?;
    }
    writer.finish()?;

    info.phases = PhaseTiming {
        load_ms,
        index_ms,
        search_ms: millis(search_start.elapsed()),
        total_ms: millis(total_start.elapsed()),
    };
    tracing::info!(
        queries = info.queries,
        matched = info.matched,
        load_ms,
        index_ms,
        search_ms = info.phases.search_ms,
        "Finished matching"
    );

    if cli.timing {
        eprintln!("{}", info.format_text());
    }

    Ok(())
}
