//! Text extractor - fills in program text from the source PDFs
//!
//! Extraction is attempted for every pending program regardless of its
//! tags. Each attempt ends in one terminal status:
//!
//! - `Extracted`: non-empty text
//! - `EmptyExtraction`: the source produced only whitespace (typical for
//!   scans tagged `#NotExtractable`)
//! - `ExtractionFailed`: the source errored, panicked or timed out
//!
//! Failures are recorded on the program and never propagate.
//!
//! [`Extractor::extract_all`] runs the pending programs on a rayon pool of
//! `workers` threads. Each call into the [`TextSource`] gets its own thread
//! so a hung call can be abandoned after the configured timeout. Results are
//! collected first and written into the corpus by the calling thread only.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::config::ExtractionConfig;
use crate::core::models::{
    Extraction, ExtractionSource, ExtractionStatus, Program, ProgramId,
};
use crate::core::ports::{TextCache, TextSource};
use crate::core::services::{normalize_text, remove_repeating_slogans};
use crate::corpus::Corpus;
use crate::report::ExtractionCounts;

/// One pending program, detached from the corpus
struct Job {
    id: ProgramId,
    reference: String,
    path: PathBuf,
}

/// Text (if any) and how it was obtained
type Outcome = (Option<String>, Extraction);

/// Extracts and cleans program text
pub struct Extractor {
    source: Arc<dyn TextSource>,
    cache: Option<Arc<dyn TextCache>>,
    config: ExtractionConfig,
    timeout: Duration,
    force_reprocessing: bool,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("config", &self.config)
            .field("timeout", &self.timeout)
            .field("cached", &self.cache.is_some())
            .field("force_reprocessing", &self.force_reprocessing)
            .finish_non_exhaustive()
    }
}

impl Extractor {
    /// Create an extractor reading from `source`
    #[must_use]
    pub fn new(source: Arc<dyn TextSource>, config: ExtractionConfig) -> Self {
        let timeout = config.timeout();
        Self { source, cache: None, config, timeout, force_reprocessing: false }
    }

    /// Read and write processed text through `cache`
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn TextCache>, force_reprocessing: bool) -> Self {
        self.cache = Some(cache);
        self.force_reprocessing = force_reprocessing;
        self
    }

    /// Override the per-file timeout from the config
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Extract one program in place; programs that are not pending are left
    /// alone. Returns the program's status afterwards.
    pub fn extract(&self, program: &mut Program) -> ExtractionStatus {
        if program.status() == ExtractionStatus::Pending {
            let (text, extraction) = self.run(&program.reference("txt"), program.source());
            program.record_extraction(text, extraction);
        }
        program.status()
    }

    /// Extract every pending program of the corpus
    pub fn extract_all(&self, corpus: &mut Corpus) -> ExtractionCounts {
        let jobs: Vec<Job> = corpus
            .programs()
            .filter(|(_, p)| p.status() == ExtractionStatus::Pending)
            .map(|(id, p)| Job { id, reference: p.reference("txt"), path: p.source().to_path_buf() })
            .collect();

        let mut counts = ExtractionCounts::default();
        if jobs.is_empty() {
            return counts;
        }

        let workers = self.config.workers.clamp(1, jobs.len());
        info!("Extracting text for {} programs with {workers} workers", jobs.len());

        let outcomes = match ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("extract-{i}"))
            .build()
        {
            Ok(pool) => pool.install(|| self.run_jobs(&jobs)),
            Err(e) => {
                warn!("Cannot build extraction pool, using the global pool: {e}");
                self.run_jobs(&jobs)
            },
        };

        for (id, (text, extraction)) in outcomes {
            counts.record(&extraction);
            if let Some(program) = corpus.program_mut(id) {
                program.record_extraction(text, extraction);
            }
        }

        info!(
            "Extraction finished: {} extracted, {} empty, {} failed ({} from cache)",
            counts.extracted, counts.empty, counts.failed, counts.from_cache
        );
        counts
    }

    fn run_jobs(&self, jobs: &[Job]) -> Vec<(ProgramId, Outcome)> {
        jobs.par_iter().map(|job| (job.id, self.run(&job.reference, &job.path))).collect()
    }

    fn run(&self, reference: &str, path: &Path) -> Outcome {
        let started = Instant::now();

        if let Some(text) = self.cached(reference) {
            debug!("Using cached text for {}", path.display());
            return classify(text, ExtractionSource::Cache, started);
        }

        match self.extract_with_timeout(path) {
            Ok(raw) => {
                let text = self.clean(raw);
                let result = classify(text, ExtractionSource::Pdf, started);
                if result.1.status == ExtractionStatus::Extracted {
                    self.store(reference, result.0.as_deref().unwrap_or_default());
                }
                result
            },
            Err(message) => {
                warn!("Extraction failed for {}: {message}", path.display());
                let extraction = Extraction {
                    status: ExtractionStatus::ExtractionFailed,
                    source: None,
                    error: Some(message),
                    elapsed: Some(started.elapsed()),
                };
                (None, extraction)
            },
        }
    }

    fn extract_with_timeout(&self, path: &Path) -> Result<String, String> {
        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        let owned = path.to_path_buf();

        // Detached: if the source hangs, the thread is abandoned
        thread::Builder::new()
            .name("text-source".to_string())
            .spawn(move || {
                let _ = tx.send(source.extract_text(&owned));
            })
            .map_err(|e| format!("cannot start extraction thread: {e}"))?;

        match rx.recv_timeout(self.timeout) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(format!("{e:#}")),
            Err(RecvTimeoutError::Timeout) => {
                Err(format!("timed out after {:.1}s", self.timeout.as_secs_f64()))
            },
            Err(RecvTimeoutError::Disconnected) => Err("text source panicked".to_string()),
        }
    }

    fn clean(&self, text: String) -> String {
        let text = if self.config.remove_slogans { remove_repeating_slogans(&text) } else { text };
        if self.config.normalize { normalize_text(&text) } else { text }
    }

    fn cached(&self, reference: &str) -> Option<String> {
        if self.force_reprocessing {
            return None;
        }
        match self.cache.as_ref()?.load(reference) {
            Ok(text) => text,
            Err(e) => {
                warn!("Cannot read cached text {reference}: {e:#}");
                None
            },
        }
    }

    fn store(&self, reference: &str, text: &str) {
        if let Some(cache) = &self.cache
            && let Err(e) = cache.store(reference, text)
        {
            warn!("Cannot cache text {reference}: {e:#}");
        }
    }
}

fn classify(text: String, source: ExtractionSource, started: Instant) -> Outcome {
    let status = if text.trim().is_empty() {
        ExtractionStatus::EmptyExtraction
    } else {
        ExtractionStatus::Extracted
    };
    let extraction =
        Extraction { status, source: Some(source), error: None, elapsed: Some(started.elapsed()) };
    (Some(text), extraction)
}
