//! PDF text source backed by the `pdf-extract` crate

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use anyhow::{Context, anyhow};

use crate::core::ports::TextSource;

/// Extracts text with `pdf_extract::extract_text`
///
/// `pdf-extract` panics on some malformed documents; panics are turned
/// into errors so one bad file only fails its own program.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractSource;

impl PdfExtractSource {
    /// Create a new source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TextSource for PdfExtractSource {
    fn extract_text(&self, path: &Path) -> anyhow::Result<String> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path)))
            .map_err(|_| anyhow!("pdf parser panicked on {}", path.display()))?;
        result.with_context(|| format!("cannot extract text from {}", path.display()))
    }
}
