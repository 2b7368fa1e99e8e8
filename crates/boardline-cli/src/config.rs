//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use boardline_domain::{BoundsRule, PlacementRules};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Layout file used when `--layout` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Print the title banner before a text run
    #[serde(default = "default_true")]
    pub banner: bool,

    /// Bounds check applied to every board
    #[serde(default)]
    pub bounds: BoundsSetting,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board grids as text
    Text,
    /// JSON format
    Json,
    /// Quiet (failures only) format
    Quiet,
}

/// Bounds check as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsSetting {
    /// Historical check: column extent measured with the part's height
    #[default]
    Literal,
    /// Whole part must lie on the board
    Exact,
}

impl From<BoundsSetting> for BoundsRule {
    fn from(setting: BoundsSetting) -> Self {
        match setting {
            BoundsSetting::Literal => BoundsRule::Literal,
            BoundsSetting::Exact => BoundsRule::Exact,
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".boardline").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is tried
    /// and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => match Self::path() {
                Ok(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Placement rules described by the settings.
    pub fn placement_rules(&self) -> PlacementRules {
        PlacementRules {
            bounds: self.settings.bounds.into(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            banner: true,
            bounds: BoundsSetting::Literal,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}
