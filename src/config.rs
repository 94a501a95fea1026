//! Configuration management for stcat.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::output::SanitizerOptions;

/// Default log filter when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sanitizer whitespace allow-list.
    pub sanitizer: SanitizerOptions,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Logging configuration section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace) or a full filter directive.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup (for testing).
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(allow) = lookup("STCAT_ALLOW_TAB").as_deref().and_then(parse_bool) {
            self.sanitizer.allow_tab = allow;
        }

        if let Some(allow) = lookup("STCAT_ALLOW_CR").as_deref().and_then(parse_bool) {
            self.sanitizer.allow_carriage_return = allow;
        }

        if let Some(level) = lookup("STCAT_LOG_LEVEL") {
            self.logging.level = level;
        } else if let Some(level) = lookup("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Apply CLI argument overrides.
    ///
    /// Flags can only switch an allowance on; absence leaves the lower
    /// layers untouched.
    pub fn apply_args(&mut self, args: &Args) {
        if args.allow_tab {
            self.sanitizer.allow_tab = true;
        }

        if args.allow_cr {
            self.sanitizer.allow_carriage_return = true;
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Config::default();

        // Load from config file if specified
        if let Some(ref path) = args.config {
            config = Config::from_file(path)?;
        }

        // Apply environment variable overrides
        config.apply_env();

        // Apply CLI argument overrides (highest priority)
        config.apply_args(args);

        Ok(config)
    }

    /// Sanitizer options to run with.
    pub fn sanitizer_options(&self) -> SanitizerOptions {
        self.sanitizer
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> &str {
        &self.logging.level
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.sanitizer.allow_tab);
        assert!(!config.sanitizer.allow_carriage_return);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "sanitizer": {
                "allow_tab": true,
                "allow_carriage_return": true
            },
            "logging": {
                "level": "debug"
            }
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.sanitizer.allow_tab);
        assert!(config.sanitizer.allow_carriage_return);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{ "sanitizer": { "allow_tab": true } }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.sanitizer.allow_tab);
        assert!(!config.sanitizer.allow_carriage_return); // Default
        assert_eq!(config.logging.level, "warn"); // Default
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/stcat.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
        assert!(result.unwrap_err().to_string().contains("failed to read"));
    }

    #[test]
    fn test_apply_env() {
        let mut config = Config::default();
        config.apply_env_from(env(&[
            ("STCAT_ALLOW_TAB", "yes"),
            ("STCAT_ALLOW_CR", "garbage"),
            ("STCAT_LOG_LEVEL", "trace"),
            ("RUST_LOG", "error"),
        ]));

        assert!(config.sanitizer.allow_tab);
        assert!(!config.sanitizer.allow_carriage_return);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_env_can_disable_file_setting() {
        let mut config = Config::default();
        config.sanitizer.allow_tab = true;
        config.apply_env_from(env(&[("STCAT_ALLOW_TAB", "0")]));
        assert!(!config.sanitizer.allow_tab);
    }

    #[test]
    fn test_rust_log_fallback() {
        let mut config = Config::default();
        config.apply_env_from(env(&[("RUST_LOG", "stcat=debug")]));
        assert_eq!(config.logging.level, "stcat=debug");
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        let args = Args {
            allow_tab: true,
            log_level: Some("info".to_string()),
            ..Args::default()
        };

        config.apply_args(&args);

        assert!(config.sanitizer.allow_tab);
        assert!(!config.sanitizer.allow_carriage_return);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_args_do_not_clear_file_settings() {
        let mut config = Config::default();
        config.sanitizer.allow_carriage_return = true;

        config.apply_args(&Args::default());
        assert!(config.sanitizer_options().allow_carriage_return);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"allow_tab\""));
        assert!(json.contains("\"level\""));
    }
}
