//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ExtractionStatus, ProgramId};
use crate::corpus::Corpus;
use crate::error::IngestError;
use crate::report::ScanReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an ingest operation
#[derive(Debug, Serialize)]
pub struct IngestResult {
    /// Whether no collision needs attention
    pub passed: bool,
    /// What happened to every file and directory
    pub report: ScanReport,
    /// Programs in the corpus, oldest election first
    pub programs: Vec<ProgramEntry>,
}

/// One program of the corpus
#[derive(Debug, Serialize)]
pub struct ProgramEntry {
    /// Corpus id
    pub id: ProgramId,
    /// Election label (e.g., "TK 2017-03")
    pub election: String,
    /// Contributing parties in filename order
    pub parties: Vec<String>,
    /// Tag names
    pub tags: Vec<String>,
    /// Source file
    pub file: PathBuf,
    /// Extraction status
    pub status: ExtractionStatus,
    /// Page estimate from the extracted text
    pub estimated_pages: usize,
}

impl IngestResult {
    /// Summarize a finished run
    #[must_use]
    pub fn new(corpus: &Corpus, report: ScanReport) -> Self {
        let mut ordered: Vec<_> = corpus.programs().collect();
        ordered.sort_by(|(_, a), (_, b)| a.election().cmp(b.election()));

        let programs = ordered
            .into_iter()
            .map(|(id, p)| ProgramEntry {
                id,
                election: p.election().to_string(),
                parties: p.parties().iter().map(ToString::to_string).collect(),
                tags: p.tags().iter().map(|t| t.to_string()).collect(),
                file: p.source().to_path_buf(),
                status: p.status(),
                estimated_pages: p.estimated_pages(),
            })
            .collect();

        Self { passed: !report.has_collisions(), report, programs }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let report = &self.report;
        println!("Scanned {} ({} files)", report.root.display(), report.files_seen);

        let mut current = None;
        for entry in &self.programs {
            if current != Some(&entry.election) {
                println!("\n{}", entry.election.bold());
                current = Some(&entry.election);
            }
            let mut line = format!("  {}", entry.parties.join("+"));
            for tag in &entry.tags {
                line.push_str(" #");
                line.push_str(tag);
            }
            if entry.status == ExtractionStatus::Pending {
                println!("{line}");
            } else {
                println!("{line} [{}]", status_label(entry.status));
            }
        }

        let rejected: Vec<&IngestError> =
            report.rejected.iter().filter(|e| !e.is_collision()).collect();
        if !rejected.is_empty() {
            println!("\n{}", "Rejected:".yellow().bold());
            for err in rejected {
                println!("  {err}");
            }
        }

        if !report.skipped.is_empty() {
            println!("\nSkipped {} non-manifest files", report.skipped.len());
        }

        if let Some(counts) = &report.extraction {
            println!(
                "\nExtraction: {} extracted, {} empty, {} failed ({} from cache)",
                counts.extracted, counts.empty, counts.failed, counts.from_cache
            );
        }

        println!("\n{} programs, {} party views", report.programs, report.party_views);

        if report.has_collisions() {
            println!("\n{}", "COLLISIONS - resolve manually:".red().bold());
            for err in report.collisions() {
                println!("  {}", err.to_string().red());
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn status_label(status: ExtractionStatus) -> String {
    let label = status.to_string();
    match status {
        ExtractionStatus::Extracted => label.green().to_string(),
        ExtractionStatus::EmptyExtraction => label.yellow().to_string(),
        ExtractionStatus::ExtractionFailed => label.red().to_string(),
        ExtractionStatus::Pending => label,
    }
}
