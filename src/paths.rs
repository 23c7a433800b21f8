//! Centralized path definitions
//!
//! ```text
//! ~/.config/manifesto-corpus/
//! └── config.toml               # Extraction and cache settings
//! ```
//!
//! `MANIFESTO_CORPUS_CONFIG` overrides the config file location.

use std::path::PathBuf;

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "MANIFESTO_CORPUS_CONFIG";

/// Application directory name under the user config dir
const APP_DIR: &str = "manifesto-corpus";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the user-level config directory.
///
/// Returns `<config_dir>/manifesto-corpus/`, falling back to
/// `./.manifesto-corpus/` when the platform has no config dir.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map_or_else(|| PathBuf::from(format!(".{APP_DIR}")), |dir| dir.join(APP_DIR))
}

/// Get the config file path, honoring [`CONFIG_ENV`].
#[must_use]
pub fn config_file() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map_or_else(|| config_dir().join(CONFIG_FILE), PathBuf::from)
}
