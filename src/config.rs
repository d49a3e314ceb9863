use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub settings: SettingsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Location of the settings document and its backups.
#[derive(Debug, Deserialize, Clone)]
pub struct SettingsConfig {
    /// Canonical settings file (JSON object).
    pub path: PathBuf,
    /// Directory receiving timestamped copies before each mutation.
    /// Created on first use.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from("./settings_backups")
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.settings.path.as_os_str().is_empty() {
        anyhow::bail!("settings.path must not be empty");
    }

    if config.settings.backup_dir.as_os_str().is_empty() {
        anyhow::bail!("settings.backup_dir must not be empty");
    }

    if config.server.bind.is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    Ok(config)
}
