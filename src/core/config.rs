//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sellflow/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::draft::Location;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SellflowConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub collaborator_latency_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LocationConfig {
    pub permission: Option<bool>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MediaConfig {
    pub camera_permission: Option<bool>,
    pub gallery_permission: Option<bool>,
    pub gallery: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListingConfig {
    pub default_business: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "sellflow.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_COLLABORATOR_LATENCY_MS: u64 = 400;

/// Sample library offered by the stub gallery. Longer than the photo limit so
/// the picker's slot cap is visible.
const DEFAULT_GALLERY: [&str; 12] = [
    "gallery/front.jpg",
    "gallery/back.jpg",
    "gallery/left.jpg",
    "gallery/right.jpg",
    "gallery/top.jpg",
    "gallery/bottom.jpg",
    "gallery/detail-1.jpg",
    "gallery/detail-2.jpg",
    "gallery/label.jpg",
    "gallery/box.jpg",
    "gallery/receipt.jpg",
    "gallery/accessories.jpg",
];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub collaborator_latency: Duration,
    pub camera_permission: bool,
    pub gallery_permission: bool,
    pub gallery: Vec<String>,
    pub location_permission: bool,
    /// What the stub locator reports. `None` makes it fail, leaving manual entry.
    pub location_fix: Option<Location>,
    pub default_business: bool,
}

/// Values given on the command line. `None` / `false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub business: bool,
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

/// Returns the path to `~/.sellflow/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sellflow").join("config.toml"))
}

/// Load config from `~/.sellflow/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SellflowConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SellflowConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SellflowConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SellflowConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<SellflowConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Sellflow Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "sellflow.log"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# collaborator_latency_ms = 400      # simulated camera/gallery/GPS delay

# [location]
# permission = true
# city = "Seattle"                   # Or set SELLFLOW_CITY
# state = "WA"                       # Or set SELLFLOW_STATE
# zip_code = "98101"                 # Or set SELLFLOW_ZIP

# [media]
# camera_permission = true
# gallery_permission = true
# gallery = ["gallery/front.jpg", "gallery/back.jpg"]

# [listing]
# default_business = false
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SellflowConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var("SELLFLOW_LOG_FILE").ok())
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("SELLFLOW_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .map(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Location fix: env → config; needs both city and state to count
    let city = std::env::var("SELLFLOW_CITY")
        .ok()
        .or_else(|| config.location.city.clone());
    let state = std::env::var("SELLFLOW_STATE")
        .ok()
        .or_else(|| config.location.state.clone());
    let zip_code = std::env::var("SELLFLOW_ZIP")
        .ok()
        .or_else(|| config.location.zip_code.clone())
        .unwrap_or_default();
    let location_fix = match (city, state) {
        (Some(city), Some(state)) if !city.is_empty() && !state.is_empty() => Some(Location {
            city,
            state,
            zip_code,
        }),
        _ => None,
    };

    ResolvedConfig {
        log_file: PathBuf::from(log_file),
        log_level,
        collaborator_latency: Duration::from_millis(
            config
                .general
                .collaborator_latency_ms
                .unwrap_or(DEFAULT_COLLABORATOR_LATENCY_MS),
        ),
        camera_permission: config.media.camera_permission.unwrap_or(true),
        gallery_permission: config.media.gallery_permission.unwrap_or(true),
        gallery: config
            .media
            .gallery
            .clone()
            .unwrap_or_else(|| DEFAULT_GALLERY.iter().map(|s| s.to_string()).collect()),
        location_permission: config.location.permission.unwrap_or(true),
        location_fix,
        default_business: cli.business || config.listing.default_business.unwrap_or(false),
    }
}

fn parse_level(raw: &str) -> LevelFilter {
    raw.parse().unwrap_or_else(|_| {
        warn!("Unknown log level {:?}, using {}", raw, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}
