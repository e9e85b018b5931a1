//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.reel/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub grid: GridConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GridConfig {
    pub scroll_threshold: Option<u32>,
    pub tile_width: Option<u16>,
    pub tile_height: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Rows of slack below the viewport that still count as "near the bottom".
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 3;
pub const DEFAULT_TILE_WIDTH: u16 = 24;
pub const DEFAULT_TILE_HEIGHT: u16 = 9;

const MIN_TILE_WIDTH: u16 = 8;
const MIN_TILE_HEIGHT: u16 = 4;

pub const BASE_URL_ENV: &str = "REEL_BASE_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub scroll_threshold: u32,
    pub tile_width: u16,
    pub tile_height: u16,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingBaseUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::MissingBaseUrl => write!(
                f,
                "no catalog base URL: pass --base-url, set {BASE_URL_ENV}, or set catalog.base_url in the config file"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.reel/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".reel").join("config.toml"))
}

/// Load config from `~/.reel/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ReelConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ReelConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ReelConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ReelConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<ReelConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ReelConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Reel Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [catalog]
# base_url = "http://localhost:3000"   # Or set REEL_BASE_URL env var

# [grid]
# scroll_threshold = 3                 # Rows below the viewport that count as "near the bottom"
# tile_width = 24
# tile_height = 9
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &ReelConfig, cli_base_url: Option<&str>) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli_base_url, std::env::var(BASE_URL_ENV).ok())
}

fn resolve_with_env(
    config: &ReelConfig,
    cli_base_url: Option<&str>,
    env_base_url: Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Base URL: CLI → env → config
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or(env_base_url)
        .or_else(|| config.catalog.base_url.clone())
        .map(|url| normalize_base_url(&url))
        .filter(|url| !url.is_empty())
        .ok_or(ConfigError::MissingBaseUrl)?;

    Ok(ResolvedConfig {
        base_url,
        scroll_threshold: config
            .grid
            .scroll_threshold
            .unwrap_or(DEFAULT_SCROLL_THRESHOLD),
        tile_width: config
            .grid
            .tile_width
            .unwrap_or(DEFAULT_TILE_WIDTH)
            .max(MIN_TILE_WIDTH),
        tile_height: config
            .grid
            .tile_height
            .unwrap_or(DEFAULT_TILE_HEIGHT)
            .max(MIN_TILE_HEIGHT),
    })
}

/// Trims whitespace and trailing slashes so paths can be appended with `/`.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
