//! Configuration management for verishot
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/verishot/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{Result, VerishotError};

/// Main configuration for verishot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target application configuration
    pub target: TargetConfig,
    /// Browser configuration
    pub browser: BrowserConfig,
    /// Screenshot output configuration
    pub output: OutputConfig,
    /// Optional verification steps
    #[serde(default)]
    pub checks: CheckConfig,
}

/// The web application under verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Root URL of the running application (default: http://localhost:5173)
    pub base_url: String,
    /// Password submitted on the login screen
    pub password: String,
}

/// Browser session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether to run without a visible window
    pub headless: bool,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Upper bound for element-visibility waits in ms
    pub wait_timeout_ms: u64,
    /// Pause after each screen transition so animations settle, in ms
    pub settle_ms: u64,
}

/// Screenshot output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory screenshots are written to (created if absent)
    pub dir: PathBuf,
}

/// Optional verification steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Open the first order's edit modal and capture it, when any orders exist
    pub edit_modal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: TargetConfig::default(),
            browser: BrowserConfig::default(),
            output: OutputConfig::default(),
            checks: CheckConfig::default(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("VERISHOT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            password: env::var("VERISHOT_PASSWORD").unwrap_or_else(|_| "بادي الضلع؟".to_string()),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: env::var("VERISHOT_HEADED")
                .map(|v| !(v == "true" || v == "1"))
                .unwrap_or(true),
            width: 1280,
            height: 720,
            wait_timeout_ms: 10_000,
            settle_ms: 1_000,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: env::var("VERISHOT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("verification")),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { edit_modal: true }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("verishot")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(VerishotError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| VerishotError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| VerishotError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file and return the path
    pub fn save(&self) -> Result<PathBuf> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| VerishotError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| VerishotError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| VerishotError::config(format!("Failed to write config: {}", e)))?;

        Ok(config_path)
    }

    /// Validate that the target base URL is a usable http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.target.base_url)
            .map_err(|e| VerishotError::config(format!("Invalid base URL: {}", e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(VerishotError::config(format!(
                "Unsupported URL scheme '{}' (expected http or https)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.browser.headless);
        assert_eq!(config.browser.wait_timeout_ms, 10_000);
        assert_eq!(config.browser.settle_ms, 1_000);
        assert!(config.checks.edit_modal);
        assert_eq!(config.output.dir, PathBuf::from("verification"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("edit_modal"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.target.base_url, config.target.base_url);
        assert_eq!(parsed.browser.width, config.browser.width);
    }

    #[test]
    fn test_checks_section_is_optional() {
        let toml_str = r#"
            [target]
            base_url = "http://localhost:5173"
            password = "secret"

            [browser]
            headless = true
            width = 1280
            height = 720
            wait_timeout_ms = 5000
            settle_ms = 500

            [output]
            dir = "shots"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.checks.edit_modal);
        assert_eq!(config.browser.wait_timeout_ms, 5_000);
    }

    #[test]
    fn test_validate_accepts_http() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut config = Config::default();
        config.target.base_url = "ftp://localhost".to_string();
        assert!(config.validate().is_err());

        config.target.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("verishot"));
    }
}
