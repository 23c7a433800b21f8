//! Programs (physical manifesto documents) and per-party views onto them
//!
//! A [`Program`] is stored once in the corpus arena and addressed by
//! [`ProgramId`]. A joint program has one [`PartyView`] per contributing
//! party, all holding the same `ProgramId`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use super::{Election, PartyCode, Tag, TagSet};

/// Average number of characters on a printed page
pub const CHARACTERS_PER_PAGE: usize = 2200;

/// Index of a program in the corpus arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProgramId(pub(crate) usize);

impl ProgramId {
    /// Position in the arena
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of text extraction for one program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    /// Extraction has not run yet
    #[default]
    Pending,
    /// Non-empty text was obtained
    Extracted,
    /// Extraction succeeded but produced only whitespace
    EmptyExtraction,
    /// Extraction failed or timed out
    ExtractionFailed,
}

impl std::fmt::Display for ExtractionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Extracted => write!(f, "extracted"),
            Self::EmptyExtraction => write!(f, "empty"),
            Self::ExtractionFailed => write!(f, "failed"),
        }
    }
}

/// Where the extracted text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    /// Freshly extracted from the PDF
    Pdf,
    /// Read back from the processed-text cache
    Cache,
}

/// Extraction provenance recorded on a program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Final status
    pub status: ExtractionStatus,
    /// Origin of the text, if any attempt completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ExtractionSource>,
    /// Failure message for `ExtractionFailed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock time spent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<Duration>,
}

/// A manifesto document, possibly written by several parties
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    election: Election,
    parties: Vec<PartyCode>,
    tags: TagSet,
    source: PathBuf,
    #[serde(skip)]
    text: Option<String>,
    extraction: Extraction,
}

impl Program {
    /// Create a pending program. Parties keep their filename order.
    pub(crate) fn new(
        election: Election,
        parties: Vec<PartyCode>,
        tags: TagSet,
        source: PathBuf,
    ) -> Self {
        Self {
            election,
            parties,
            tags,
            source,
            text: None,
            extraction: Extraction::default(),
        }
    }

    /// The election this program was written for
    #[must_use]
    pub const fn election(&self) -> &Election {
        &self.election
    }

    /// Contributing parties, in filename order
    #[must_use]
    pub fn parties(&self) -> &[PartyCode] {
        &self.parties
    }

    /// Contributing parties, sorted (the program's identity within an election)
    #[must_use]
    pub fn sorted_parties(&self) -> Vec<PartyCode> {
        let mut parties = self.parties.clone();
        parties.sort();
        parties
    }

    /// Whether more than one party wrote this program
    #[must_use]
    pub fn is_joint(&self) -> bool {
        self.parties.len() > 1
    }

    /// Tags attached to the source file
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Check for a single tag
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Path of the source PDF
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Extracted text, once extraction has produced some
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Extraction provenance
    #[must_use]
    pub const fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    /// Shorthand for `extraction().status`
    #[must_use]
    pub const fn status(&self) -> ExtractionStatus {
        self.extraction.status
    }

    /// Rough page count based on [`CHARACTERS_PER_PAGE`]
    #[must_use]
    pub fn estimated_pages(&self) -> usize {
        self.text
            .as_deref()
            .map_or(0, |text| text.chars().count().div_ceil(CHARACTERS_PER_PAGE))
    }

    /// File name for derived artifacts, e.g. `TK-CDA+CU-2017-03#Con.txt`
    #[must_use]
    pub fn reference(&self, ext: &str) -> String {
        let mut name = format!(
            "{}-{}-{}",
            self.election.kind,
            join_parties(&self.parties),
            self.election.date
        );
        for tag in self.tags.iter() {
            name.push('#');
            name.push_str(tag.abbreviation());
        }
        format!("{name}.{ext}")
    }

    /// Store the result of extraction. Only a pending program accepts one;
    /// returns whether it was recorded.
    pub(crate) fn record_extraction(&mut self, text: Option<String>, extraction: Extraction) -> bool {
        if self.extraction.status != ExtractionStatus::Pending {
            return false;
        }
        self.text = text;
        self.extraction = extraction;
        true
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.election.kind,
            join_parties(&self.parties),
            self.election.date
        )?;
        for tag in self.tags.iter() {
            write!(f, " #{tag}")?;
        }
        Ok(())
    }
}

fn join_parties(parties: &[PartyCode]) -> String {
    parties.iter().map(PartyCode::as_str).collect::<Vec<_>>().join("+")
}

/// One party's handle onto a (possibly shared) program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyView {
    party: PartyCode,
    election: Election,
    program: ProgramId,
}

impl PartyView {
    pub(crate) const fn new(party: PartyCode, election: Election, program: ProgramId) -> Self {
        Self { party, election, program }
    }

    /// The party this view belongs to
    #[must_use]
    pub const fn party(&self) -> &PartyCode {
        &self.party
    }

    /// The election of the underlying program
    #[must_use]
    pub const fn election(&self) -> &Election {
        &self.election
    }

    /// Arena index of the underlying program
    #[must_use]
    pub const fn program(&self) -> ProgramId {
        self.program
    }
}
