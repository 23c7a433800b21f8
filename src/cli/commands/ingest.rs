//! Build the corpus from a data tree

use std::path::{Path, PathBuf};

use anyhow::Context;

use manifesto_corpus::config::CorpusConfig;
use manifesto_corpus::ingest::Ingestor;
use manifesto_corpus::output::{IngestResult, OutputMode};

/// Scan `root`, build the corpus and print the report
///
/// Exits with status 1 when two files claim the same party's program, so
/// scripts notice that the data tree needs a manual fix.
pub fn ingest(
    root: &Path,
    config: Option<PathBuf>,
    no_extract: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => CorpusConfig::load(&path)?,
        None => CorpusConfig::load_or_default(&CorpusConfig::config_path())?,
    };

    let mut ingestor = Ingestor::new(config);
    if no_extract {
        ingestor = ingestor.without_extraction();
    }

    let ingestion = ingestor
        .ingest(root)
        .with_context(|| format!("cannot ingest {}", root.display()))?;

    let result = IngestResult::new(&ingestion.corpus, ingestion.report);
    result.render(mode);

    if !result.passed {
        std::process::exit(1);
    }

    Ok(())
}
