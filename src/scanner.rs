//! Election scanner - discovers manifesto files in the data tree
//!
//! The tree is laid out as:
//!
//! ```text
//! <root>/<ElectionType>/<YYYY-MM>/<manifesto file>
//! ```
//!
//! Scanning is lazy: [`ElectionScanner::scan`] returns an iterator that
//! walks the tree as it is consumed. Entries are visited in file-name
//! order so repeated scans of the same tree produce the same sequence.
//!
//! # Examples
//!
//! ```no_run
//! use manifesto_corpus::scanner::{ElectionScanner, ScanEvent};
//!
//! let scanner = ElectionScanner::new("data/manifests").unwrap();
//! for event in scanner.scan() {
//!     if let ScanEvent::Candidate { election, file } = event {
//!         println!("{election}: {}", file.display());
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, FilterEntry, WalkDir};

use crate::core::models::{Election, ElectionDate, ElectionType};
use crate::error::{CorpusError, IngestError};

const TYPE_DEPTH: usize = 1;
const DATE_DEPTH: usize = 2;
const FILE_DEPTH: usize = 3;

/// Something the scanner found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A file directly inside a valid election date directory
    Candidate {
        /// Election derived from the two parent directories
        election: Election,
        /// Full path of the file
        file: PathBuf,
    },

    /// A directory that was skipped, or an entry that could not be read
    Rejected(IngestError),
}

/// Walks a manifesto data tree
#[derive(Debug, Clone)]
pub struct ElectionScanner {
    root: PathBuf,
}

impl ElectionScanner {
    /// Create a scanner rooted at `root`, which must be an existing directory
    pub fn new(root: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(CorpusError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory(root));
        }

        Ok(Self { root })
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh walk of the tree
    #[must_use]
    pub fn scan(&self) -> Scan {
        let visible: fn(&DirEntry) -> bool = is_visible;
        let walker = WalkDir::new(&self.root)
            .min_depth(TYPE_DEPTH)
            .max_depth(FILE_DEPTH)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(visible);

        Scan { walker, election_type: None, election: None }
    }
}

/// Lazy sequence of [`ScanEvent`]s; see [`ElectionScanner::scan`]
pub struct Scan {
    walker: FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>,
    election_type: Option<ElectionType>,
    election: Option<Election>,
}

impl std::fmt::Debug for Scan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scan")
            .field("election_type", &self.election_type)
            .field("election", &self.election)
            .finish_non_exhaustive()
    }
}

impl Scan {
    fn enter_type_dir(&mut self, entry: &DirEntry) -> Option<ScanEvent> {
        let name = entry.file_name().to_string_lossy().into_owned();
        self.election = None;
        match ElectionType::new(name.clone()) {
            Ok(kind) => {
                debug!("Election type directory: {kind}");
                self.election_type = Some(kind);
                None
            },
            Err(_) => {
                self.election_type = None;
                self.walker.skip_current_dir();
                warn!("Skipping election type directory {}", entry.path().display());
                Some(ScanEvent::Rejected(IngestError::InvalidElectionType {
                    dir: entry.path().to_path_buf(),
                    value: name,
                }))
            },
        }
    }

    fn enter_date_dir(&mut self, entry: &DirEntry) -> Option<ScanEvent> {
        let Some(kind) = self.election_type.clone() else {
            self.walker.skip_current_dir();
            return None;
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        match ElectionDate::parse(&name) {
            Ok(date) => {
                self.election = Some(Election::new(kind, date));
                None
            },
            Err(reason) => {
                self.election = None;
                self.walker.skip_current_dir();
                warn!("Skipping {}: {reason}", entry.path().display());
                Some(ScanEvent::Rejected(IngestError::InvalidElectionDate {
                    dir: entry.path().to_path_buf(),
                    value: name,
                }))
            },
        }
    }
}

impl Iterator for Scan {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    warn!("Cannot read {}: {e}", path.display());
                    return Some(ScanEvent::Rejected(IngestError::Unreadable {
                        path,
                        message: e.to_string(),
                    }));
                },
            };

            let is_dir = entry.file_type().is_dir();
            let event = match (entry.depth(), is_dir) {
                (TYPE_DEPTH, true) => self.enter_type_dir(&entry),
                (DATE_DEPTH, true) => self.enter_date_dir(&entry),
                (FILE_DEPTH, false) if entry.file_type().is_file() => {
                    self.election.clone().map(|election| ScanEvent::Candidate {
                        election,
                        file: entry.into_path(),
                    })
                },
                _ => {
                    debug!("Ignoring {}", entry.path().display());
                    None
                },
            };

            if event.is_some() {
                return event;
            }
        }
    }
}

/// Hidden entries (names starting with `.`) are never part of the corpus
fn is_visible(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
