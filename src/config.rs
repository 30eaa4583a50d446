//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default base URL of the listings backend
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the listings backend
    pub api_url: Option<String>,
    /// Show property descriptions in the results list
    pub show_descriptions: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("bg", "labyrinth", "labyrinth-tui")
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

    /// Resolve the backend base URL: env override, then config, then default
    pub fn resolved_api_url(&self) -> String {
        std::env::var("LABYRINTH_API_URL")
            .ok()
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_url.is_none());
        assert!(config.show_descriptions.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_url: Some("http://localhost:9000".to_string()),
            show_descriptions: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_url, Some("http://localhost:9000".to_string()));
        assert_eq!(parsed.show_descriptions, Some(true));
    }

    #[test]
    fn test_partial_serialization() {
        let config = TuiConfig {
            api_url: Some("http://localhost:9000".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_url, Some("http://localhost:9000".to_string()));
        assert!(parsed.show_descriptions.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.api_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_url": "http://localhost:9000", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_url, Some("http://localhost:9000".to_string()));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_resolved_api_url_falls_back_to_default() {
        let config = TuiConfig::default();
        if std::env::var("LABYRINTH_API_URL").is_err() {
            assert_eq!(config.resolved_api_url(), DEFAULT_API_URL);
        }
    }
}
