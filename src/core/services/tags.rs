//! Tag section parser
//!
//! The tag section is the tail of a manifesto filename: whitespace-separated
//! tokens, each starting with `#`. Matching is case-sensitive against the
//! closed [`Tag`] set; repeated tags collapse.

use std::path::Path;

use crate::core::models::{Tag, TagSet};
use crate::error::IngestError;

/// Marker character that introduces a tag
pub const TAG_MARKER: char = '#';

/// Parse a tag section such as `#Concept #NotExtractable`
///
/// `file` is only used to label errors.
pub fn parse_tags(section: &str, file: &Path) -> Result<TagSet, IngestError> {
    let mut tags = TagSet::new();

    for token in section.split_whitespace() {
        let Some(name) = token.strip_prefix(TAG_MARKER) else {
            return Err(IngestError::MalformedFilename {
                file: file.to_path_buf(),
                reason: format!("tag token '{token}' does not start with '{TAG_MARKER}'"),
            });
        };

        if name.is_empty() {
            return Err(IngestError::MalformedFilename {
                file: file.to_path_buf(),
                reason: format!("empty tag after '{TAG_MARKER}'"),
            });
        }

        let tag = name.parse::<Tag>().map_err(|_| IngestError::UnknownTag {
            tag: name.to_string(),
            file: file.to_path_buf(),
        })?;
        tags.insert(tag);
    }

    Ok(tags)
}
