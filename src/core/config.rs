//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.horsempdc/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The same directory holds the log file.

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
pub struct HorseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub mopidy: MopidyConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub intro: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MopidyConfig {
    pub host: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub notice_ms: Option<u64>,
    pub frame_ms: Option<u64>,
    pub highlight_color: Option<String>,
    pub header_color: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_NOTICE_MS: u64 = 1000;
pub const DEFAULT_FRAME_MS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub host: String,
    pub timeout: Duration,
    pub debug: bool,
    pub intro: bool,
    pub notice: Duration,
    pub frame_delay: Duration,
    pub highlight_color: Option<String>,
    pub header_color: Option<String>,
}

/// Overrides given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub debug: bool,
    pub no_intro: bool,
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

/// Returns `~/.horsempdc`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".horsempdc"))
}

/// Returns `~/.horsempdc`, creating it if needed.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no home directory")
    })?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load config from `~/.horsempdc/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HorseConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HorseConfig, ConfigError> {
    let path = match config_dir() {
        Some(dir) => dir.join("config.toml"),
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HorseConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<HorseConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(HorseConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HorseConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# HorseMPDC Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [general]
# log_level = "info"          # "info" or "debug"
# intro = true                # gallop across the screen at startup

# [mopidy]
# host = "localhost:6680"     # Or set HORSEMPDC_HOST env var, or --host
# timeout_secs = 5

# [ui]
# notice_ms = 1000            # how long error notices stay on screen
# frame_ms = 30               # delay between animation frames
# highlight_color = "cyan"
# header_color = "yellow"
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
pub fn resolve(config: &HorseConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Host: CLI → env → config → default
    let host = cli
        .host
        .clone()
        .or_else(|| std::env::var("HORSEMPDC_HOST").ok())
        .or_else(|| config.mopidy.host.clone())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    let debug = cli.debug
        || config
            .general
            .log_level
            .as_deref()
            .is_some_and(|level| level.eq_ignore_ascii_case("debug"));

    ResolvedConfig {
        host,
        timeout: Duration::from_secs(
            config.mopidy.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        debug,
        intro: !cli.no_intro && config.general.intro.unwrap_or(true),
        notice: Duration::from_millis(config.ui.notice_ms.unwrap_or(DEFAULT_NOTICE_MS)),
        frame_delay: Duration::from_millis(config.ui.frame_ms.unwrap_or(DEFAULT_FRAME_MS)),
        highlight_color: config.ui.highlight_color.clone(),
        header_color: config.ui.header_color.clone(),
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&HorseConfig::default(), &CliOverrides::default())
    }
}
