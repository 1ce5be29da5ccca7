//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Role preselected when a registration session starts; parsed and
    /// rejected at startup if unknown
    pub default_role: Option<String>,
    /// Show the keyboard hint line
    pub show_hints: Option<bool>,
    /// Platform name shown in the welcome header
    pub platform_name: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "petmatch", "petmatch-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints.unwrap_or(true)
    }

    pub fn platform_name(&self) -> &str {
        self.platform_name.as_deref().unwrap_or("PetMatch")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.default_role.is_none());
        assert!(config.show_hints.is_none());
        assert!(config.platform_name.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = TuiConfig::default();
        assert!(config.show_hints());
        assert_eq!(config.platform_name(), "PetMatch");
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            default_role: Some("shelter".to_string()),
            show_hints: Some(false),
            platform_name: Some("PawPort".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.default_role, Some("shelter".to_string()));
        assert_eq!(parsed.show_hints, Some(false));
        assert_eq!(parsed.platform_name, Some("PawPort".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.default_role.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"default_role": "adopter", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.default_role, Some("adopter".to_string()));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
