//! Configuration loading and API endpoint resolution

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Compiled default backend URL (local development stack)
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend URL
pub const API_URL_ENV: &str = "TRISENSE_API_URL";

/// Environment variable overriding the bearer token
pub const TOKEN_ENV: &str = "TRISENSE_TOKEN";

/// On-disk config file contents (`~/.config/trisense/config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    /// Bearer token persisted by `login`
    pub token: Option<String>,
}

/// Resolved settings used to construct the API client
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub token: Option<String>,
}

/// Default configuration file path for the platform
pub fn config_file_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("trisense").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
}

/// Load the config file, treating a missing file as empty
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

/// Resolve settings following the priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. Compiled default (URL only; token has no default)
pub fn resolve_settings(cli_url: Option<&str>, cli_token: Option<&str>) -> Result<Settings> {
    let file = match config_file_path() {
        Ok(path) => load_config_file(&path)?,
        Err(_) => ConfigFile::default(),
    };
    Ok(resolve_from(
        cli_url,
        cli_token,
        std::env::var(API_URL_ENV).ok(),
        std::env::var(TOKEN_ENV).ok(),
        &file,
    ))
}

/// Pure resolution step, separated from env/fs access for testability
pub fn resolve_from(
    cli_url: Option<&str>,
    cli_token: Option<&str>,
    env_url: Option<String>,
    env_token: Option<String>,
    file: &ConfigFile,
) -> Settings {
    let api_url = cli_url
        .map(str::to_string)
        .or(env_url)
        .or_else(|| file.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let token = cli_token
        .map(str::to_string)
        .or(env_token)
        .or_else(|| file.token.clone());

    Settings { api_url, token }
}

/// Persist the bearer token into the config file, preserving other keys
pub fn save_token(path: &Path, token: &str) -> Result<()> {
    let mut file = load_config_file(path)?;
    file.token = Some(token.to_string());

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(&file)
        .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "Saved credentials to config file");
    Ok(())
}
