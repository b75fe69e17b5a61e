//! Configuration schema (colguard.toml)
//!
//! The config file supplies rule defaults so CI invocations don't have to
//! repeat `--pattern`/`--dtype` on every hook entry; command-line values
//! always win.

use serde::{Deserialize, Serialize};

/// Default rule values from the `[rule]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleDefaults {
    /// Regex pattern to match column names
    #[serde(default)]
    pub pattern: Option<String>,

    /// Expected data type pattern for the matching columns
    #[serde(default)]
    pub dtype: Option<String>,

    /// Disable the "every column of this type follows the pattern" direction
    #[serde(default)]
    pub skip_check_every_column_for_dtype: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rule defaults, overridden by command-line flags
    #[serde(default)]
    pub rule: RuleDefaults,

    /// Project root path (for resolving relative paths)
    #[serde(skip)]
    pub project_root: std::path::PathBuf,
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let mut config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Set project root to parent of config file
        if let Some(parent) = path.parent() {
            config.project_root = parent.to_path_buf();
        }

        Ok(config)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
