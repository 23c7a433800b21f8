//! Tests for configuration loading

use std::fs;
use std::path::PathBuf;

use manifesto_corpus::config::CorpusConfig;
use manifesto_corpus::paths::CONFIG_ENV;
use serial_test::serial;
use tempfile::TempDir;

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = CorpusConfig::load_or_default(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, CorpusConfig::default());
}

#[test]
fn test_load_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[extraction]
workers = 3
timeout_secs = 30
normalize = false
remove_slogans = false

[cache]
dir = "processed/text"
force_reprocessing = true
"#,
    )
    .unwrap();

    let config = CorpusConfig::load(&path).unwrap();
    assert_eq!(config.extraction.workers, 3);
    assert_eq!(config.extraction.timeout_secs, 30);
    assert!(!config.extraction.normalize);
    assert!(!config.extraction.remove_slogans);
    assert_eq!(config.cache.dir, Some(PathBuf::from("processed/text")));
    assert!(config.cache.force_reprocessing);
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "[extraction]\ntimeout_secs = 0\n").unwrap();
    let err = CorpusConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));

    fs::write(&path, "[extraction]\nworkers = \"many\"\n").unwrap();
    let err = CorpusConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("invalid config"));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/config.toml");

    let mut config = CorpusConfig::default();
    config.extraction.workers = 2;
    config.cache.dir = Some(PathBuf::from("/var/cache/manifestos"));
    config.save(&path).unwrap();

    assert_eq!(CorpusConfig::load(&path).unwrap(), config);
}

// =============================================================================
// LOCATION
// =============================================================================

#[test]
#[serial(env)]
fn test_env_var_overrides_config_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    // SAFETY: serialized with every other test touching the environment
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    assert_eq!(CorpusConfig::config_path(), path);
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert!(CorpusConfig::config_path().ends_with("manifesto-corpus/config.toml"));
}
