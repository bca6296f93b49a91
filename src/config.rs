// Game configuration loading
//
// Everything has an in-code default; a JSON file may override any part of it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::input::{Action, ActionParseError, InputConfig};
use crate::game::characters::CharacterStats;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidStat { field: &'static str, value: f32 },

    #[error("Invalid binding '{name}': {source}")]
    InvalidBinding {
        name: String,
        #[source]
        source: ActionParseError,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Stats used for every spawned character
    pub stats: CharacterStats,

    /// Extra binding names mapped to action names, e.g. `"Attack": "LightAttack"`.
    /// Applied on top of the canonical action names.
    pub bindings: BTreeMap<String, String>,
}

impl GameConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Self::from_json(&text)
    }

    /// Check stats and binding names
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.stats.validate()?;
        self.input_config().map(|_| ())
    }

    /// Build the binding table: canonical names plus configured aliases
    pub fn input_config(&self) -> Result<InputConfig, ConfigError> {
        let mut config = InputConfig::default();
        for (name, action_name) in &self.bindings {
            let action: Action = action_name
                .parse()
                .map_err(|source| ConfigError::InvalidBinding {
                    name: name.clone(),
                    source,
                })?;
            config.bind(name.as_str(), action);
        }
        Ok(config)
    }
}
