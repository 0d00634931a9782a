// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - UI language
//! - `[server]` - Backend base URL and the session identity
//! - `[popup]` - Hide delays for the user-card popup
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_FEED_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "pt-BR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Backend connection and session identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the SocialFeed server.
    #[serde(default = "default_server_url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Id of the logged-in user; their avatar triggers the uploader
    /// instead of the popup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Display name of the logged-in user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            user_id: None,
            username: None,
        }
    }
}

/// User-card popup timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopupConfig {
    /// Hide delay after the pointer leaves an avatar (milliseconds).
    #[serde(
        default = "default_hover_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_hide_delay_ms: Option<u64>,

    /// Hide delay after a touch release (milliseconds).
    #[serde(
        default = "default_touch_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub touch_hide_delay_ms: Option<u64>,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            hover_hide_delay_ms: default_hover_hide_delay_ms(),
            touch_hide_delay_ms: default_touch_hide_delay_ms(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Backend connection settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Popup timing settings.
    #[serde(default)]
    pub popup: PopupConfig,
}

fn default_server_url() -> Option<String> {
    Some(DEFAULT_SERVER_URL.to_string())
}

fn default_hover_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_HOVER_HIDE_DELAY_MS)
}

fn default_touch_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_TOUCH_HIDE_DELAY_MS)
}

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a notification key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str::<Config>(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return Err(crate::error::Error::Config(
            "could not determine config directory".to_string(),
        ));
    };
    save_to_path(config, &path)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
