//! Simulator configuration from TOML files and environment variables

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Presentation and reproducibility settings for a simulator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Title shown in the welcome and goodbye banners
    #[serde(default = "default_title")]
    pub title: String,
    /// Fixed seed for a reproducible battle (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Colour narration lines by tone
    #[serde(default = "default_color")]
    pub color: bool,
    /// Print a JSON summary of the result after the narration
    #[serde(default)]
    pub json_summary: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            title: default_title(),
            seed: None,
            color: default_color(),
            json_summary: false,
        }
    }
}

fn default_title() -> String {
    "BATTLE SIMULATOR".to_string()
}
fn default_color() -> bool {
    true
}

/// Longest title that still fits the banner
const MAX_TITLE_LENGTH: usize = 60;

impl SimulatorConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SIM_CONFIG` - TOML file loaded first (optional)
    /// - `BATTLE_SIM_SEED` - Seed for a reproducible battle
    /// - `BATTLE_SIM_COLOR` - Colour narration (`true`/`false`)
    /// - `BATTLE_SIM_JSON` - Print a JSON summary (`true`/`false`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("BATTLE_SIM_CONFIG") {
            Some(path) => load_toml::<SimulatorConfig>(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(seed) = parse_var::<u64>(&lookup, "BATTLE_SIM_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(color) = parse_var::<bool>(&lookup, "BATTLE_SIM_COLOR")? {
            config.color = color;
        }
        if let Some(json) = parse_var::<bool>(&lookup, "BATTLE_SIM_JSON")? {
            config.json_summary = json;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let length = self.title.trim().chars().count();
        if length == 0 {
            return Err(ConfigError::ValidationError("title must not be empty".to_string()));
        }
        if length > MAX_TITLE_LENGTH {
            return Err(ConfigError::ValidationError(format!(
                "title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            ConfigError::ValidationError(format!("{} has an invalid value: {:?}", key, raw))
        }),
        None => Ok(None),
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert_eq!(config.title, "BATTLE SIMULATOR");
        assert_eq!(config.seed, None);
        assert!(config.color);
        assert!(!config.json_summary);
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let config: SimulatorConfig = parse_toml("seed = 42\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.title, "BATTLE SIMULATOR");
        assert!(config.color);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
title = "ARENA NIGHT"
seed = 7
color = false
json_summary = true
"#;
        let config: SimulatorConfig = parse_toml(toml).unwrap();
        assert_eq!(config.title, "ARENA NIGHT");
        assert!(!config.color);
        assert!(config.json_summary);
    }

    #[test]
    fn test_env_overrides() {
        let config = SimulatorConfig::from_lookup(lookup_from(&[
            ("BATTLE_SIM_SEED", "99"),
            ("BATTLE_SIM_COLOR", "false"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(99));
        assert!(!config.color);
        assert!(!config.json_summary);
    }

    #[test]
    fn test_invalid_env_value() {
        let err = SimulatorConfig::from_lookup(lookup_from(&[("BATTLE_SIM_SEED", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let err = SimulatorConfig::from_lookup(lookup_from(&[(
            "BATTLE_SIM_CONFIG",
            "/nonexistent/battle_sim.toml",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_empty_title_rejected() {
        let config = SimulatorConfig {
            title: "   ".to_string(),
            ..SimulatorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = parse_toml::<SimulatorConfig>("seed = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
