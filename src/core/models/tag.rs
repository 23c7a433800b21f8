//! Program quality/format tags
//!
//! Tags are the `#Token` qualifiers at the end of a manifesto filename.
//! The set of tags is closed; parsing lives in
//! [`services::tags`](crate::core::services::tags).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A qualifier describing a program's format or quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Concept (draft) version of the program
    Concept,
    /// Scanned or otherwise without selectable text
    NotExtractable,
    /// Contains material beyond the program itself (covers, appendices)
    Untrimmed,
    /// Abridged version of the program
    Short,
    /// Plain-language version of the program
    Simple,
}

impl Tag {
    /// Every tag, in canonical order
    pub const ALL: [Self; 5] =
        [Self::Concept, Self::NotExtractable, Self::Untrimmed, Self::Short, Self::Simple];

    /// Name as written in filenames (without the `#` marker)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concept => "Concept",
            Self::NotExtractable => "NotExtractable",
            Self::Untrimmed => "Untrimmed",
            Self::Short => "Short",
            Self::Simple => "Simple",
        }
    }

    /// Three-letter abbreviation used in cache file names
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        &self.as_str()[..3]
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    /// Case-sensitive: `#concept` is not `#Concept`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("Unknown tag: {s}"))
    }
}

/// An ordered set of tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    /// Create an empty tag set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a tag; adding an existing tag is a no-op
    pub fn insert(&mut self, tag: Tag) {
        self.0.insert(tag);
    }

    /// Check membership
    #[must_use]
    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    /// Check that every tag in `other` is present
    #[must_use]
    pub fn contains_all(&self, other: &Self) -> bool {
        other.0.is_subset(&self.0)
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }

    /// Number of tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
