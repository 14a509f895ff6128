//! Configuration for uiforge.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (UIFORGE_API_KEY / GEMINI_API_KEY,
//!    UIFORGE_MODEL, UIFORGE_BIND, UIFORGE_TIMEOUT_SECONDS)
//! 2. Config file (.uiforge/config.yaml)
//! 3. Defaults
//!
//! Config file discovery searches the current directory and its parents,
//! then falls back to ~/.uiforge/config.yaml.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_BIND: &str = "127.0.0.1:9000";
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub bind_address: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key
    pub api_key: String,
    /// Model identifier passed to the generateContent endpoint
    pub model: String,
    /// Transport timeout for one generation call
    pub timeout: Duration,
    /// HTTP bind address for `uiforge serve`
    pub bind_address: String,
}

/// Find config file by searching current directory and parents,
/// then the home directory
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let candidate = current.join(".uiforge").join("config.yaml");
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                break;
            }
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".uiforge").join("config.yaml"))
        .filter(|p| p.exists())
}

fn load_config_file() -> Result<ConfigFile> {
    let Some(path) = find_config_file() else {
        return Ok(ConfigFile::default());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Resolve configuration from env, config file and defaults
    pub fn load() -> Result<Self> {
        let file = load_config_file()?;

        let api_key = env_var("UIFORGE_API_KEY")
            .or_else(|| env_var("GEMINI_API_KEY"))
            .or(file.api_key)
            .context(
                "No API key configured; set UIFORGE_API_KEY or add api_key to .uiforge/config.yaml",
            )?;

        let model = env_var("UIFORGE_MODEL")
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_seconds = env_var("UIFORGE_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .or(file.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        let bind_address = env_var("UIFORGE_BIND")
            .or(file.bind_address)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(Self {
            api_key,
            model,
            timeout: Duration::from_secs(timeout_seconds),
            bind_address,
        })
    }
}
