//! Directory-backed cache of extracted text
//!
//! One UTF-8 `.txt` file per program, named by `Program::reference("txt")`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::ports::TextCache;

/// Text cache stored as plain files in one directory
#[derive(Debug, Clone)]
pub struct DirTextCache {
    dir: PathBuf,
}

impl DirTextCache {
    /// Use `dir` as the cache directory (created on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The cache directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TextCache for DirTextCache {
    fn load(&self, reference: &str) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(self.dir.join(reference)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, reference: &str, text: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(reference), text)?;
        Ok(())
    }
}
