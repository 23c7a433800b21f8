//! Ingestion error taxonomy
//!
//! Two layers of errors exist:
//!
//! - [`IngestError`]: per-file (or per-directory) problems. These never abort
//!   a run; the ingestion pipeline collects them into the
//!   [`ScanReport`](crate::report::ScanReport).
//! - [`CorpusError`]: problems with the run as a whole (the root directory
//!   is missing, or the configuration is unusable).

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::core::models::{Election, PartyCode};

/// A per-file ingestion failure or skip signal
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IngestError {
    /// The filename does not follow the `P1+P2 #Tag.pdf` convention
    #[error("malformed filename {file}: {reason}")]
    MalformedFilename {
        /// Offending file
        file: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// A `#Token` in the tag section is not a known tag
    #[error("unknown tag '#{tag}' in {file}")]
    UnknownTag {
        /// The token without its marker
        tag: String,
        /// Offending file
        file: PathBuf,
    },

    /// An election type directory has a blank name
    #[error("invalid election type directory '{value}' at {dir}")]
    InvalidElectionType {
        /// The directory that was skipped
        dir: PathBuf,
        /// The directory name as found
        value: String,
    },

    /// A date directory name is not `YYYY-MM`
    #[error("invalid election date directory '{value}' at {dir}")]
    InvalidElectionDate {
        /// The directory that was skipped
        dir: PathBuf,
        /// The directory name as found
        value: String,
    },

    /// The same party is listed twice in one joint program filename
    #[error("party {party} listed more than once in {file}")]
    DuplicatePartyInJointProgram {
        /// The repeated party code
        party: PartyCode,
        /// Offending file
        file: PathBuf,
    },

    /// Two files claim the same party's program in one election
    #[error(
        "party {party} already has a program in {election}: {existing} conflicts with {incoming}"
    )]
    PartyProgramCollision {
        /// Election both files belong to
        election: Election,
        /// Party claimed by both files
        party: PartyCode,
        /// File already admitted to the corpus
        existing: PathBuf,
        /// File that was rejected
        incoming: PathBuf,
    },

    /// Not a manifesto (wrong extension); a skip reason, not a failure
    #[error("not a manifesto: {file}")]
    NotAManifest {
        /// Skipped file
        file: PathBuf,
    },

    /// A directory entry could not be read while walking the tree
    #[error("unreadable entry {path}: {message}")]
    Unreadable {
        /// Path the walker failed on
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },
}

impl IngestError {
    /// Whether this is a skip signal rather than a failure
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::NotAManifest { .. })
    }

    /// Whether this needs manual attention from the operator
    #[must_use]
    pub const fn is_collision(&self) -> bool {
        matches!(self, Self::PartyProgramCollision { .. })
    }
}

/// Errors that abort a whole ingestion run
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Root path does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Configuration is unusable
    #[error("invalid configuration: {0}")]
    Config(String),
}
