//! Engine configuration.
//!
//! Loaded from `.natdedrc` (TOML) in:
//! - the path named by `NATDED_CONFIG`
//! - the current directory
//! - the user's home directory

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::LoggingConfig;

pub const CONFIG_ENV_VAR: &str = "NATDED_CONFIG";
pub const CONFIG_FILE_NAME: &str = ".natdedrc";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Logic selected for new proofs by hosts that do not pick one.
    pub default_logic: Option<String>,

    /// Joins the goals in the goal header line.
    pub goal_separator: String,

    /// Stamped onto the line that proves the last goal.
    pub complete_comment: String,

    /// Stamped onto a line that proves a goal while others remain.
    pub partial_comment: String,

    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_logic: None,
            goal_separator: ", ".to_string(),
            complete_comment: "COMPLETE".to_string(),
            partial_comment: "PARTIAL COMPLETION".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Find and load the configuration, falling back to defaults.
    ///
    /// Files that exist but fail to load are skipped with a warning.
    pub fn load_default() -> Self {
        Self::candidate_paths()
            .into_iter()
            .filter(|path| path.exists())
            .find_map(|path| match Self::load(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "Loaded engine configuration");
                    Some(config)
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "Ignoring configuration file");
                    None
                }
            })
            .unwrap_or_default()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            paths.push(PathBuf::from(path));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
        }
        paths
    }
}
