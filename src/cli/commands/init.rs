//! Write a default config file

use std::path::PathBuf;

use manifesto_corpus::config::CorpusConfig;
use manifesto_corpus::output::OutputMode;

/// Write the default config to `path` (or the user config location)
pub fn init(path: Option<PathBuf>, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(CorpusConfig::config_path);

    if path.exists() && !force {
        if mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "written": false, "path": path }));
        } else {
            println!("Config already exists at {}.", path.display());
            println!("Use --force to overwrite.");
        }
        return Ok(());
    }

    CorpusConfig::default().save(&path)?;

    if mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "written": true, "path": path }));
    } else {
        println!("Wrote default config to {}", path.display());
    }
    Ok(())
}
