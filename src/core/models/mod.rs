//! Domain models for the manifesto corpus
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Tag`] / [`TagSet`] - Quality and format qualifiers from filenames
//! - [`PartyCode`] - A contributing party
//! - [`Election`] - An election type at a year-month date
//! - [`Program`] - A manifesto document, possibly joint
//! - [`PartyView`] - One party's handle onto a program

mod election;
mod party;
mod program;
mod tag;

pub use election::{Election, ElectionDate, ElectionType};
pub use party::PartyCode;
pub use program::{
    CHARACTERS_PER_PAGE, Extraction, ExtractionSource, ExtractionStatus, PartyView, Program,
    ProgramId,
};
pub use tag::{Tag, TagSet};
