// Configuration module for reading Snake.toml
// Appearance, move response extras and debug logging are all static for the
// lifetime of the server; the move decision itself takes no parameters.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub moves: MovesConfig,
    pub debug: DebugConfig,
}

/// Metadata returned from `GET /` and `POST /start`
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    pub version: String,
}

/// Extras attached to every move response
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MovesConfig {
    pub shout: Option<String>,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the values in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            appearance: AppearanceConfig {
                apiversion: "1".to_string(),
                author: "sawtooth".to_string(),
                color: "#600AAA".to_string(),
                head: "fang".to_string(),
                tail: "sharp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            moves: MovesConfig { shout: None },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.appearance.color, "#600AAA");
        assert!(config.moves.shout.is_none());
        assert!(!config.debug.enabled);
    }

    #[test]
    fn test_snake_toml_can_be_parsed() {
        // This test ensures Snake.toml is valid and can be parsed
        let result = Config::from_file("Snake.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Snake.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Snake.toml").expect("Snake.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(
            file_config.appearance.apiversion,
            hardcoded_config.appearance.apiversion
        );
        assert_eq!(file_config.appearance.author, hardcoded_config.appearance.author);
        assert_eq!(file_config.appearance.color, hardcoded_config.appearance.color);
        assert_eq!(file_config.appearance.head, hardcoded_config.appearance.head);
        assert_eq!(file_config.appearance.tail, hardcoded_config.appearance.tail);
        assert_eq!(file_config.moves.shout, hardcoded_config.moves.shout);
        assert_eq!(file_config.debug.enabled, hardcoded_config.debug.enabled);
        assert_eq!(
            file_config.debug.log_file_path,
            hardcoded_config.debug.log_file_path
        );
    }

    #[test]
    fn test_moves_section_is_optional() {
        let config = Config::from_toml_str(
            r##"
            [appearance]
            apiversion = "1"
            author = "someone"
            color = "#123456"
            head = "default"
            tail = "default"
            version = "0.1.0"

            [debug]
            enabled = true
            log_file_path = "decisions.jsonl"
            "##,
        )
        .expect("config without [moves] should parse");

        assert!(config.moves.shout.is_none());
        assert!(config.debug.enabled);
        assert_eq!(config.debug.log_file_path, "decisions.jsonl");
    }

    #[test]
    fn test_shout_is_read() {
        let config = Config::from_toml_str(
            r##"
            [appearance]
            apiversion = "1"
            author = "someone"
            color = "#123456"
            head = "default"
            tail = "default"
            version = "0.1.0"

            [moves]
            shout = "round and round"

            [debug]
            enabled = false
            log_file_path = "x.jsonl"
            "##,
        )
        .unwrap();

        assert_eq!(config.moves.shout.as_deref(), Some("round and round"));
    }

    #[test]
    fn test_load_or_default_works() {
        let config = Config::load_or_default();
        assert_eq!(config.appearance.head, "fang");
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        assert!(Config::from_file("nonexistent.toml").is_err());
        assert!(Config::from_toml_str("[appearance]\ncolor = 5").is_err());
    }
}
