//! Configuration management for milvus-shell
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/milvus-shell/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, ShellError};

/// Main configuration for milvus-shell
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Milvus server configuration
    #[serde(default)]
    pub milvus: MilvusConfig,
    /// Interactive shell configuration
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Milvus server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilvusConfig {
    /// Address to connect to on startup (host:port, optionally user:password@host:port)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_address: Option<String>,
    /// URL scheme used by the HTTP client
    pub scheme: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Interactive shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt shown at the start of a statement
    pub prompt: String,
    /// Prompt shown while a statement spans several lines
    pub continuation_prompt: String,
    /// Whether to log debug output
    pub debug: bool,
}

impl Default for MilvusConfig {
    fn default() -> Self {
        Self {
            default_address: env::var("MILVUS_ADDRESS").ok().filter(|a| !a.is_empty()),
            scheme: "http".to_string(),
            timeout_secs: env::var("MILVUS_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "milvus> ".to_string(),
            continuation_prompt: "   ...> ".to_string(),
            debug: env::var("MILVUS_SHELL_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("milvus-shell")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > config file > env vars > defaults
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();

        match Self::load_from_file(&Self::config_file()) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from the given file only
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShellError::config("Config file not found"));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ShellError::config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ShellError::config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to the given file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    ShellError::config(format!("Failed to create config dir: {}", e))
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ShellError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| ShellError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file();
        self.save_to(&path)?;
        Ok(path)
    }

    /// Base URL of the server reachable at `host_port`
    pub fn base_url_for(&self, host_port: &str) -> String {
        format!("{}://{}", self.milvus.scheme, host_port)
    }
}
