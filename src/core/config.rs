//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shelf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_query: Option<String>,
    pub splash_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://www.googleapis.com/books/v1";
pub const DEFAULT_QUERY: &str = "Android";
pub const DEFAULT_SPLASH_MS: u64 = 2000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_query: String,
    pub splash: Duration,
    pub catalog_base_url: String,
    pub catalog_api_key: Option<String>,
    pub store_dir: PathBuf,
}

/// CLI overrides. `None` = flag not given.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub store_dir: Option<PathBuf>,
    pub default_query: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.shelf`.
pub fn shelf_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shelf"))
}

/// Returns the path to `~/.shelf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    shelf_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.shelf/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShelfConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ShelfConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShelfConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ShelfConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ShelfConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Shelf Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_query = "Android"          # First search when the search screen opens
# splash_ms = 2000                   # How long the splash screen stays up

# [catalog]
# base_url = "https://www.googleapis.com/books/v1"   # Or set SHELF_CATALOG_URL
# api_key = "AIza..."                # Or set GOOGLE_BOOKS_API_KEY

# [store]
# path = "/home/me/.shelf/store"     # Or set SHELF_STORE_DIR
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
pub fn resolve(config: &ShelfConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve`, with environment lookups injected so tests don't touch the process env.
fn resolve_with_env(
    config: &ShelfConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Default query: CLI → config → default
    let default_query = cli
        .default_query
        .clone()
        .or_else(|| config.general.default_query.clone())
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    // Catalog URL: env → config → default
    let catalog_base_url = env("SHELF_CATALOG_URL")
        .or_else(|| config.catalog.base_url.clone())
        .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string());

    // Catalog API key: env → config
    let catalog_api_key = env("GOOGLE_BOOKS_API_KEY").or_else(|| config.catalog.api_key.clone());

    // Store directory: CLI → env → config → ~/.shelf/store
    let store_dir = cli
        .store_dir
        .clone()
        .or_else(|| env("SHELF_STORE_DIR").map(PathBuf::from))
        .or_else(|| config.store.path.as_ref().map(PathBuf::from))
        .or_else(|| shelf_dir().map(|d| d.join("store")))
        .unwrap_or_else(|| PathBuf::from(".shelf-store"));

    ResolvedConfig {
        default_query,
        splash: Duration::from_millis(config.general.splash_ms.unwrap_or(DEFAULT_SPLASH_MS)),
        catalog_base_url,
        catalog_api_key,
        store_dir,
    }
}
