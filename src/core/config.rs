//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jotter/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::storage::{self, NOTES_FILE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JotterConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub notes_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub card_width: Option<u16>,
    pub card_text_lines: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "jotter.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_CARD_WIDTH: u16 = 30;
pub const DEFAULT_CARD_TEXT_LINES: u16 = 4;

/// Narrower cards cannot fit both toolbar buttons.
pub const MIN_CARD_WIDTH: u16 = 16;
pub const MAX_CARD_WIDTH: u16 = 120;
pub const MAX_CARD_TEXT_LINES: u16 = 40;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub notes_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
    pub card_width: u16,
    pub card_text_lines: u16,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub notes_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.jotter/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    storage::data_dir().ok().map(|d| d.join("config.toml"))
}

/// Load config from `~/.jotter/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JotterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<JotterConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JotterConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<JotterConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(JotterConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: JotterConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Jotter Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# notes_file = "~/.jotter/notes.json"   # Or set JOTTER_NOTES_FILE
# log_file = "~/.jotter/jotter.log"     # Or set JOTTER_LOG_FILE
# log_level = "info"                    # "error", "warn", "info", "debug", "trace"

# [display]
# card_width = 30                       # Columns per note card (16 to 120)
# card_text_lines = 4                   # Lines of note text shown on a card (1 to 40)
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
pub fn resolve(config: &JotterConfig, cli: &CliOverrides) -> ResolvedConfig {
    let data_dir = storage::data_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Notes file: CLI → env → config → default
    let notes_file = cli
        .notes_file
        .clone()
        .or_else(|| std::env::var("JOTTER_NOTES_FILE").ok().map(|s| expand_home(&s)))
        .or_else(|| config.general.notes_file.as_deref().map(expand_home))
        .unwrap_or_else(|| data_dir.join(NOTES_FILE));

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var("JOTTER_LOG_FILE").ok().map(|s| expand_home(&s)))
        .or_else(|| config.general.log_file.as_deref().map(expand_home))
        .unwrap_or_else(|| data_dir.join(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("JOTTER_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        notes_file,
        log_file,
        log_level,
        card_width: config
            .display
            .card_width
            .unwrap_or(DEFAULT_CARD_WIDTH)
            .clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH),
        card_text_lines: config
            .display
            .card_text_lines
            .unwrap_or(DEFAULT_CARD_TEXT_LINES)
            .clamp(1, MAX_CARD_TEXT_LINES),
    }
}

/// Create (truncate) the log file, making its directory first.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
