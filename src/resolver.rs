//! Resolver - turns discovered files into programs and party views
//!
//! The resolver owns the corpus while it is being built and is the only
//! code path that inserts into it. Each call to [`Resolver::resolve`]
//! either admits one program (plus one view per party) or rejects the file
//! and leaves the corpus untouched.
//!
//! # Examples
//!
//! ```
//! use std::path::PathBuf;
//! use manifesto_corpus::core::models::{Election, ElectionDate, ElectionType};
//! use manifesto_corpus::core::services::decode_filename;
//! use manifesto_corpus::resolver::Resolver;
//!
//! let election = Election::new(
//!     ElectionType::new("TK").unwrap(),
//!     ElectionDate::parse("2017-03").unwrap(),
//! );
//! let file = PathBuf::from("TK/2017-03/CDA+CU.pdf");
//! let decoded = decode_filename(&file).unwrap();
//!
//! let mut resolver = Resolver::new();
//! let id = resolver.resolve(election, file, decoded).unwrap();
//! assert_eq!(resolver.corpus().views_for(id).len(), 2);
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use log::{debug, warn};

use crate::core::models::{Election, PartyCode, Program, ProgramId};
use crate::core::services::DecodedName;
use crate::corpus::Corpus;
use crate::error::IngestError;

/// Builds a [`Corpus`] one file at a time
#[derive(Debug, Default)]
pub struct Resolver {
    corpus: Corpus,
}

impl Resolver {
    /// Start with an empty corpus
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit one decoded file as a program
    ///
    /// Rejects the file when a party appears twice in its name, or when any
    /// of its parties already has a program in `election`.
    pub fn resolve(
        &mut self,
        election: Election,
        file: PathBuf,
        decoded: DecodedName,
    ) -> Result<ProgramId, IngestError> {
        if let Some(party) = first_duplicate(&decoded.parties) {
            warn!("{} lists {party} more than once", file.display());
            return Err(IngestError::DuplicatePartyInJointProgram { party, file });
        }

        let program = Program::new(election, decoded.parties, decoded.tags, file);
        debug!("Admitting {program}");
        self.corpus.add_program(program)
    }

    /// The corpus built so far
    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Finish building and hand over the corpus
    #[must_use]
    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }
}

fn first_duplicate(parties: &[PartyCode]) -> Option<PartyCode> {
    let mut seen = HashSet::with_capacity(parties.len());
    parties.iter().find(|party| !seen.insert(*party)).cloned()
}
