use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# racemerge configuration

[event]
# Defaults for `racemerge merge --date/--name/--location`
# date = "2024-01-01"
# name = "Winter series"
# location = "Kasterlee"

[output]
default_format = "json"
# indent = 4
# top = 3
"#;

pub fn init_config(force: bool) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    init_config_in(&cwd, force)
}

/// Write the default config into `dir`, returning its path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Created {}", config_path.display());

    Ok(config_path)
}
