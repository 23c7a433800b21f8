//! Ingestion pipeline
//!
//! Runs the stages in order: scan the tree, decode each filename, resolve
//! programs into the corpus, then extract text. Problems with individual
//! files and directories land in the [`ScanReport`]; only an unusable root
//! or config aborts the run.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::adapters::{DirTextCache, PdfExtractSource};
use crate::config::CorpusConfig;
use crate::core::ports::{TextCache, TextSource};
use crate::core::services::decode_filename;
use crate::corpus::Corpus;
use crate::error::CorpusError;
use crate::extractor::Extractor;
use crate::report::ScanReport;
use crate::resolver::Resolver;
use crate::scanner::{ElectionScanner, ScanEvent};

/// Result of a completed run
#[derive(Debug)]
pub struct Ingestion {
    /// The corpus, read-only from here on
    pub corpus: Corpus,
    /// What happened to every file and directory
    pub report: ScanReport,
}

/// Configured ingestion pipeline
pub struct Ingestor {
    config: CorpusConfig,
    source: Arc<dyn TextSource>,
    cache: Option<Arc<dyn TextCache>>,
    timeout: Option<Duration>,
    extract: bool,
}

impl std::fmt::Debug for Ingestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ingestor")
            .field("config", &self.config)
            .field("timeout", &self.timeout)
            .field("extract", &self.extract)
            .finish_non_exhaustive()
    }
}

impl Ingestor {
    /// Pipeline reading PDFs with `pdf-extract`, caching text in
    /// `cache.dir` when one is configured
    #[must_use]
    pub fn new(config: CorpusConfig) -> Self {
        let cache = config.cache.dir.clone().map(|dir| -> Arc<dyn TextCache> {
            Arc::new(DirTextCache::new(dir))
        });
        Self {
            config,
            source: Arc::new(PdfExtractSource::new()),
            cache,
            timeout: None,
            extract: true,
        }
    }

    /// Replace the text source
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn TextSource>) -> Self {
        self.source = source;
        self
    }

    /// Replace the text cache
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn TextCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override the configured per-file timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the corpus without extracting any text
    #[must_use]
    pub const fn without_extraction(mut self) -> Self {
        self.extract = false;
        self
    }

    /// Run the pipeline over the tree at `root`
    pub fn ingest(&self, root: impl AsRef<Path>) -> Result<Ingestion, CorpusError> {
        self.config.validate().map_err(|e| CorpusError::Config(e.to_string()))?;
        let scanner = ElectionScanner::new(root)?;
        info!("Scanning {}", scanner.root().display());

        let mut report = ScanReport::new(scanner.root());
        let mut resolver = Resolver::new();

        for event in scanner.scan() {
            let (election, file) = match event {
                ScanEvent::Candidate { election, file } => (election, file),
                ScanEvent::Rejected(err) => {
                    report.record(err);
                    continue;
                },
            };
            report.files_seen += 1;

            let decoded = match decode_filename(&file) {
                Ok(decoded) => decoded,
                Err(err) => {
                    if err.is_skip() {
                        debug!("{err}");
                    } else {
                        warn!("{err}");
                    }
                    report.record(err);
                    continue;
                },
            };

            match resolver.resolve(election, file.clone(), decoded) {
                Ok(id) => report.admit(file, id),
                Err(err) => report.record(err),
            }
        }

        let mut corpus = resolver.into_corpus();
        report.programs = corpus.len();
        report.party_views = corpus.party_views().count();
        info!(
            "Admitted {} programs ({} party views), skipped {}, rejected {}",
            report.programs,
            report.party_views,
            report.skipped.len(),
            report.rejected.len()
        );

        if self.extract {
            report.extraction = Some(self.extractor().extract_all(&mut corpus));
        }

        Ok(Ingestion { corpus, report })
    }

    fn extractor(&self) -> Extractor {
        let mut extractor = Extractor::new(Arc::clone(&self.source), self.config.extraction);
        if let Some(cache) = &self.cache {
            extractor = extractor.with_cache(Arc::clone(cache), self.config.cache.force_reprocessing);
        }
        if let Some(timeout) = self.timeout {
            extractor = extractor.with_timeout(timeout);
        }
        extractor
    }
}
