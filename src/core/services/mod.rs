//! Parsing and text services
//!
//! Pure logic that operates on strings and returns results; no I/O.
//!
//! - [`tags`] - Parse the `#Tag` section of a filename
//! - [`filename`] - Decode party codes and tags from a manifesto filename
//! - [`normalize`] - Clean extracted PDF text

pub mod filename;
pub mod normalize;
pub mod tags;

pub use filename::{DecodedName, decode_filename, has_manifesto_extension};
pub use normalize::{normalize_text, remove_repeating_slogans};
pub use tags::parse_tags;
