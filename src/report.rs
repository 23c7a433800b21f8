//! Outcome of an ingestion run
//!
//! Every file the scanner reports ends up in exactly one of `admitted`,
//! `skipped` or `rejected`. Nothing is dropped without a trace.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::models::{Extraction, ExtractionSource, ExtractionStatus, ProgramId};
use crate::error::IngestError;

/// A file that became a program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admitted {
    /// Source file
    pub file: PathBuf,
    /// Program created from it
    pub program: ProgramId,
}

/// Per-status extraction totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionCounts {
    /// Programs with non-empty text
    pub extracted: usize,
    /// Programs whose extraction produced only whitespace
    pub empty: usize,
    /// Programs whose extraction failed or timed out
    pub failed: usize,
    /// Programs whose text came from the cache
    pub from_cache: usize,
}

impl ExtractionCounts {
    /// Count one finished extraction
    pub fn record(&mut self, extraction: &Extraction) {
        match extraction.status {
            ExtractionStatus::Extracted => self.extracted += 1,
            ExtractionStatus::EmptyExtraction => self.empty += 1,
            ExtractionStatus::ExtractionFailed => self.failed += 1,
            ExtractionStatus::Pending => {},
        }
        if extraction.source == Some(ExtractionSource::Cache) {
            self.from_cache += 1;
        }
    }

    /// Total number of finished extractions
    #[must_use]
    pub const fn total(&self) -> usize {
        self.extracted + self.empty + self.failed
    }
}

/// Everything that happened during one ingestion run
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Root of the data tree
    pub root: PathBuf,
    /// Candidate files found in date directories
    pub files_seen: usize,
    /// Programs in the resulting corpus
    pub programs: usize,
    /// Party views in the resulting corpus
    pub party_views: usize,
    /// Files that became programs
    pub admitted: Vec<Admitted>,
    /// Files that are not manifestos
    pub skipped: Vec<IngestError>,
    /// Files and directories that were rejected, in discovery order
    pub rejected: Vec<IngestError>,
    /// Extraction totals, when extraction ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction: Option<ExtractionCounts>,
}

impl ScanReport {
    /// Start an empty report for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            started_at: Utc::now(),
            root: root.into(),
            files_seen: 0,
            programs: 0,
            party_views: 0,
            admitted: Vec::new(),
            skipped: Vec::new(),
            rejected: Vec::new(),
            extraction: None,
        }
    }

    /// Record an admitted file
    pub fn admit(&mut self, file: PathBuf, program: ProgramId) {
        self.admitted.push(Admitted { file, program });
    }

    /// Record a skip or a rejection
    pub fn record(&mut self, error: IngestError) {
        if error.is_skip() {
            self.skipped.push(error);
        } else {
            self.rejected.push(error);
        }
    }

    /// Rejections caused by two files claiming the same party's program
    pub fn collisions(&self) -> impl Iterator<Item = &IngestError> {
        self.rejected.iter().filter(|e| e.is_collision())
    }

    /// Whether any collision needs manual attention
    #[must_use]
    pub fn has_collisions(&self) -> bool {
        self.collisions().next().is_some()
    }

    /// Whether nothing was rejected
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}
