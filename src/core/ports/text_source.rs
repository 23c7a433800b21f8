//! Text source port
//!
//! Defines the PDF-to-text capability the extractor depends on.

use std::path::Path;

/// Turns a document on disk into plain text
///
/// Implementations may be slow or hang on damaged input; the extractor
/// runs them on worker threads with a timeout. An `Err` means the document
/// could not be read at all. Empty text is a valid `Ok` result.
pub trait TextSource: Send + Sync {
    /// Extract the full text of the document at `path`
    fn extract_text(&self, path: &Path) -> anyhow::Result<String>;
}
