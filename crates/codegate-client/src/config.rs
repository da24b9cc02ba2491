use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CODEGATE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.codegate (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: CODEGATE_PATH environment variable
    if let Ok(env_path) = std::env::var("CODEGATE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("codegate"));
    }

    // Priority 4: Fallback to ~/.codegate (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".codegate"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_page_size() -> u32 {
    10
}

fn default_accounts_page_size() -> u32 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the activation-code backend, e.g. "https://codes.internal:8080"
    pub server_url: String,

    /// Rows requested per page of the primary code list
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Accounts shown per page inside a code's detail view
    #[serde(default = "default_accounts_page_size")]
    pub accounts_page_size: u32,
}

impl Config {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            page_size: default_page_size(),
            accounts_page_size: default_accounts_page_size(),
        }
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "no configuration at {}: run 'codegate init --server-url <URL>' first",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path(data_dir: &std::path::Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}
