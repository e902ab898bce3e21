use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tokens: Tokens,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tokens {
    /// Falls back to `GH_TOKEN` / `GITHUB_TOKEN` when unset
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Maximum number of project items fetched per load
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

fn default_api_url() -> String {
    "https://api.github.com/graphql".to_string()
}

fn default_page_limit() -> u32 {
    100
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_limit: default_page_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_border_color")]
    pub border_color: String,
}

fn default_border_color() -> String {
    "62".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            border_color: default_border_color(),
        }
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "workboard")
        .context("Could not determine config directory")?
        .config_dir()
        .to_path_buf();
    Ok(dir)
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Log file location, under the platform cache directory
pub fn log_path() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "workboard")
        .context("Could not determine cache directory")?
        .cache_dir()
        .to_path_buf();
    Ok(dir.join("workboard.log"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, a missing default file means
/// "use defaults" since every setting has one.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                tracing::debug!("No config at {}, using defaults", p.display());
                return Ok(Config::default());
            }
            p
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
}
