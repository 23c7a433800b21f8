//! The corpus: every program and party view across all elections
//!
//! Programs live in an arena (`Vec<Program>`) and are addressed by
//! [`ProgramId`]. Party views and the lookup indexes store ids, so a joint
//! program is stored once and reached from each of its parties.
//!
//! Only the [`Resolver`](crate::resolver::Resolver) adds programs and only
//! the [`Extractor`](crate::extractor::Extractor) fills in their text. Once
//! ingestion returns, the corpus is read-only and can be shared across
//! threads.
//!
//! # Examples
//!
//! ```no_run
//! use manifesto_corpus::config::CorpusConfig;
//! use manifesto_corpus::core::models::ElectionDate;
//! use manifesto_corpus::ingest::Ingestor;
//!
//! let ingestion = Ingestor::new(CorpusConfig::default()).ingest("data/manifests").unwrap();
//! let corpus = ingestion.corpus;
//! let date = ElectionDate::parse("2017-03").unwrap();
//! for program in corpus.programs_for_election("TK", date) {
//!     println!("{program}");
//! }
//! ```

use std::collections::BTreeMap;

use log::error;

use crate::core::models::{
    Election, ElectionDate, ElectionType, ExtractionStatus, PartyCode, PartyView, Program,
    ProgramId, Tag, TagSet,
};
use crate::error::IngestError;

/// All programs and party views of one ingestion run
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    programs: Vec<Program>,
    views: BTreeMap<(Election, PartyCode), PartyView>,
    by_election: BTreeMap<Election, Vec<ProgramId>>,
    by_party: BTreeMap<PartyCode, BTreeMap<Election, ProgramId>>,
}

impl Corpus {
    /// Create an empty corpus
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a program and one view per contributing party
    ///
    /// Fails with [`IngestError::PartyProgramCollision`] when any
    /// contributing party already has a program in the same election; the
    /// corpus is left unchanged in that case.
    pub(crate) fn add_program(&mut self, program: Program) -> Result<ProgramId, IngestError> {
        let election = program.election().clone();

        if let Some((party, existing)) = program
            .parties()
            .iter()
            .find_map(|party| self.views.get(&(election.clone(), party.clone())).map(|v| (party, v)))
        {
            let existing = &self.programs[existing.program().index()];
            let err = IngestError::PartyProgramCollision {
                election,
                party: party.clone(),
                existing: existing.source().to_path_buf(),
                incoming: program.source().to_path_buf(),
            };
            error!("{err}");
            return Err(err);
        }

        let id = ProgramId(self.programs.len());
        for party in program.parties() {
            self.views.insert(
                (election.clone(), party.clone()),
                PartyView::new(party.clone(), election.clone(), id),
            );
            self.by_party.entry(party.clone()).or_default().insert(election.clone(), id);
        }
        self.by_election.entry(election).or_default().push(id);
        self.programs.push(program);

        Ok(id)
    }

    pub(crate) fn program_mut(&mut self, id: ProgramId) -> Option<&mut Program> {
        self.programs.get_mut(id.index())
    }

    /// Number of programs
    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Check if the corpus holds no programs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Look up a program by id
    #[must_use]
    pub fn program(&self, id: ProgramId) -> Option<&Program> {
        self.programs.get(id.index())
    }

    /// All programs with their ids, in discovery order
    pub fn programs(&self) -> impl Iterator<Item = (ProgramId, &Program)> {
        self.programs.iter().enumerate().map(|(i, p)| (ProgramId(i), p))
    }

    /// All party views, ordered by election then party
    pub fn party_views(&self) -> impl Iterator<Item = &PartyView> {
        self.views.values()
    }

    /// Elections with at least one program, in chronological order
    pub fn elections(&self) -> impl Iterator<Item = &Election> {
        self.by_election.keys()
    }

    /// The views that point at one program (one per contributing party)
    #[must_use]
    pub fn views_for(&self, id: ProgramId) -> Vec<&PartyView> {
        self.program(id).map_or_else(Vec::new, |program| {
            program
                .parties()
                .iter()
                .filter_map(|party| self.views.get(&(program.election().clone(), party.clone())))
                .collect()
        })
    }

    /// A party's view for one election, if that party has a program there
    #[must_use]
    pub fn party_view(
        &self,
        election_type: &str,
        date: ElectionDate,
        party: &str,
    ) -> Option<&PartyView> {
        let election = Election::new(ElectionType::new(election_type).ok()?, date);
        let party = PartyCode::new(party).ok()?;
        self.views.get(&(election, party))
    }

    /// The program behind [`Corpus::party_view`]
    #[must_use]
    pub fn program_for(
        &self,
        election_type: &str,
        date: ElectionDate,
        party: &str,
    ) -> Option<&Program> {
        self.party_view(election_type, date, party).and_then(|view| self.program(view.program()))
    }

    /// Every program of one election, in discovery order
    #[must_use]
    pub fn programs_for_election(&self, election_type: &str, date: ElectionDate) -> Vec<&Program> {
        let Ok(kind) = ElectionType::new(election_type) else {
            return Vec::new();
        };
        self.by_election
            .get(&Election::new(kind, date))
            .map(|ids| self.resolve_ids(ids.iter().copied()))
            .unwrap_or_default()
    }

    /// Every program a party contributed to, oldest election first
    ///
    /// Joint programs are included for each of their parties.
    #[must_use]
    pub fn programs_for_party(&self, party: &str) -> Vec<&Program> {
        let Ok(party) = PartyCode::new(party) else {
            return Vec::new();
        };
        self.by_party
            .get(&party)
            .map(|elections| self.resolve_ids(elections.values().copied()))
            .unwrap_or_default()
    }

    /// Every program carrying `tag`, oldest election first
    #[must_use]
    pub fn programs_with_tag(&self, tag: Tag) -> Vec<&Program> {
        self.query(&ProgramQuery::new().tag(tag))
    }

    /// Programs whose text was extracted successfully
    #[must_use]
    pub fn extracted_programs(&self) -> Vec<&Program> {
        self.programs
            .iter()
            .filter(|p| p.status() == ExtractionStatus::Extracted)
            .collect()
    }

    /// Programs matching every criterion of `query`, oldest election first
    #[must_use]
    pub fn query(&self, query: &ProgramQuery) -> Vec<&Program> {
        let ids = self
            .by_election
            .iter()
            .filter(|(election, _)| query.matches_election(election))
            .flat_map(|(_, ids)| ids.iter().copied());
        self.resolve_ids(ids).into_iter().filter(|p| query.matches_program(p)).collect()
    }

    fn resolve_ids(&self, ids: impl Iterator<Item = ProgramId>) -> Vec<&Program> {
        ids.filter_map(|id| self.program(id)).collect()
    }
}

/// Combined filter over the corpus; unset fields match everything
///
/// ```
/// use manifesto_corpus::corpus::ProgramQuery;
/// use manifesto_corpus::core::models::Tag;
///
/// let query = ProgramQuery::new().election_type("TK").party("CDA").tag(Tag::Short);
/// assert!(!query.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramQuery {
    election_type: Option<String>,
    date: Option<ElectionDate>,
    party: Option<String>,
    tags: TagSet,
}

impl ProgramQuery {
    /// Query that matches every program
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one election type
    #[must_use]
    pub fn election_type(mut self, election_type: impl Into<String>) -> Self {
        self.election_type = Some(election_type.into());
        self
    }

    /// Restrict to one election date
    #[must_use]
    pub const fn date(mut self, date: ElectionDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Restrict to programs a party contributed to
    #[must_use]
    pub fn party(mut self, party: impl Into<String>) -> Self {
        self.party = Some(party.into());
        self
    }

    /// Require a tag (repeatable; all required tags must be present)
    #[must_use]
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Check if no criteria are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.election_type.is_none()
            && self.date.is_none()
            && self.party.is_none()
            && self.tags.is_empty()
    }

    fn matches_election(&self, election: &Election) -> bool {
        self.election_type.as_deref().is_none_or(|t| election.kind.as_str() == t)
            && self.date.is_none_or(|d| election.date == d)
    }

    fn matches_program(&self, program: &Program) -> bool {
        self.party
            .as_deref()
            .is_none_or(|party| program.parties().iter().any(|p| p.as_str() == party))
            && program.tags().contains_all(&self.tags)
    }
}
