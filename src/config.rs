//! Corpus configuration
//!
//! Settings for text extraction and the processed-text cache, stored as
//! TOML. Every field has a default, so an empty or missing file is valid.
//!
//! ```toml
//! [extraction]
//! workers = 4
//! timeout_secs = 120
//! normalize = true
//! remove_slogans = true
//!
//! [cache]
//! dir = "processed/text"
//! force_reprocessing = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Text extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Processed-text cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Text extraction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of extraction worker threads
    pub workers: usize,
    /// Per-file timeout in seconds; a hung extraction is abandoned
    pub timeout_secs: u64,
    /// Clean layout debris from extracted text
    pub normalize: bool,
    /// Strip snippets repeated on nearly every page
    pub remove_slogans: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            timeout_secs: 120,
            normalize: true,
            remove_slogans: true,
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get).min(8)
}

impl ExtractionConfig {
    /// Timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Processed-text cache settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory; no caching when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Ignore cached text and extract again
    pub force_reprocessing: bool,
}

impl CorpusConfig {
    /// Default config file location
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, or use defaults when it does not exist
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.extraction.workers == 0 {
            bail!("extraction.workers must be at least 1");
        }
        if self.extraction.timeout_secs == 0 {
            bail!("extraction.timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Save config to disk
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
