//! Configuration management for the Gridswarm CLI.

use anyhow::{Context, Result};
use gridswarm::prelude::{EvolutionConfig, SwarmConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project config file.
pub const CONFIG_FILE: &str = "gridswarm.toml";

/// Gridswarm project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SwarmConfig,
    #[serde(default)]
    pub evolution: EvolutionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_genome_file")]
    pub genome_file: String,
}

fn default_genome_file() -> String {
    "best_genome.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            genome_file: default_genome_file(),
        }
    }
}

impl Config {
    /// Load config from gridswarm.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load_from(&path)
            }
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Where the best genome lives. Relative paths resolve against the
    /// directory holding gridswarm.toml, or the current directory.
    pub fn genome_path(&self) -> PathBuf {
        let file = PathBuf::from(&self.storage.genome_file);
        if file.is_absolute() {
            return file;
        }
        match find_config_file().as_deref().and_then(Path::parent) {
            Some(dir) => dir.join(file),
            None => file,
        }
    }
}

/// Find gridswarm.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
