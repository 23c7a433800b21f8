//! Manifesto filename decoder
//!
//! # Format
//!
//! ```text
//! <PartyCode>[+<PartyCode>...][ #Tag [#Tag...]].pdf
//! ```
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use manifesto_corpus::core::services::decode_filename;
//!
//! let decoded = decode_filename(Path::new("TK/2017-03/CDA+CU #Concept.pdf")).unwrap();
//! assert_eq!(decoded.parties.len(), 2);
//! assert_eq!(decoded.encode(), "CDA+CU #Concept.pdf");
//! ```

use std::path::Path;

use super::tags::{TAG_MARKER, parse_tags};
use crate::core::models::{PartyCode, TagSet};
use crate::error::IngestError;

/// Separator between contributing parties
pub const PARTY_JOINER: char = '+';

/// Required file extension (matched case-insensitively)
pub const MANIFESTO_EXTENSION: &str = "pdf";

/// Structured contents of a manifesto filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    /// Contributing parties in filename order (may contain repeats; the
    /// resolver rejects those)
    pub parties: Vec<PartyCode>,
    /// Tags from the tag section
    pub tags: TagSet,
}

impl DecodedName {
    /// Render back into the canonical filename form
    #[must_use]
    pub fn encode(&self) -> String {
        let mut name =
            self.parties.iter().map(PartyCode::as_str).collect::<Vec<_>>().join("+");
        for tag in self.tags.iter() {
            name.push(' ');
            name.push(TAG_MARKER);
            name.push_str(tag.as_str());
        }
        name.push('.');
        name.push_str(MANIFESTO_EXTENSION);
        name
    }
}

/// Check whether a path has the manifesto extension
#[must_use]
pub fn has_manifesto_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MANIFESTO_EXTENSION))
}

/// Decode the file name component of `path`
///
/// Non-PDF files yield [`IngestError::NotAManifest`], which callers treat as
/// a skip rather than a failure.
pub fn decode_filename(path: &Path) -> Result<DecodedName, IngestError> {
    let malformed = |reason: String| IngestError::MalformedFilename {
        file: path.to_path_buf(),
        reason,
    };

    let Some(name) = path.file_name() else {
        return Err(malformed("path has no file name".to_string()));
    };
    let Some(name) = name.to_str() else {
        return Err(malformed("file name is not valid UTF-8".to_string()));
    };

    let stem = match name.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case(MANIFESTO_EXTENSION) => stem,
        _ => return Err(IngestError::NotAManifest { file: path.to_path_buf() }),
    };

    // The tag section starts at the first " #"
    let (party_section, tag_section) = stem
        .find(" #")
        .map_or((stem, ""), |pos| (&stem[..pos], &stem[pos + 1..]));
    let party_section = party_section.trim_end();

    if party_section.is_empty() {
        return Err(malformed("no party codes".to_string()));
    }

    let parties = party_section
        .split(PARTY_JOINER)
        .map(|code| PartyCode::new(code).map_err(&malformed))
        .collect::<Result<Vec<_>, _>>()?;

    let tags = parse_tags(tag_section, path)?;

    Ok(DecodedName { parties, tags })
}
