use std::path::Path;

use crate::error::ConfigError;

/// How the engine picks a column once neither side can win immediately.
///
/// Exactly one policy is active per engine; they are never combined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Highest line-potential score, ties to the earliest column in scan order
    #[default]
    PotentialLines,
    /// First open column from a fixed center-first list
    CenterPreference,
}

impl FallbackPolicy {
    pub fn name(self) -> &'static str {
        match self {
            FallbackPolicy::PotentialLines => "potential_lines",
            FallbackPolicy::CenterPreference => "center_preference",
        }
    }
}

/// Engine configuration, loadable from TOML.
///
/// ```toml
/// fallback = "center_preference"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fallback: FallbackPolicy,
}

impl EngineConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
