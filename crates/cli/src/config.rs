// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is optional and stored in `<config_dir>/waypush/config.toml`
//! (or wherever `WAYPUSH_CONFIG` points):
//! - `adb`: bridge executable, a bare name is looked up on `PATH`
//! - `serial`: device serial, for hosts with several devices attached
//! - `waypoint_root`: device directory holding the mission folders
//! - `backup_dir`: where overwritten archives are saved
//! - `command_timeout_secs`: limit for each bridge command
//!
//! Environment variables take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wp_core::WaypointLayout;

use crate::bridge::{Adb, COMMAND_TIMEOUT};
use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "waypush";
const CONFIG_FILE_NAME: &str = "config.toml";
const BACKUP_DIR_NAME: &str = "backups";
const DEFAULT_ADB: &str = "adb";

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adb: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_timeout_secs: Option<u64>,
}

/// Values read from the environment that override the config file.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub adb: Option<PathBuf>,
    pub serial: Option<String>,
    pub backup_dir: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        EnvOverrides {
            adb: env::adb_binary(),
            serial: env::serial(),
            backup_dir: env::backup_dir(),
        }
    }
}

/// Fully resolved settings used by the commands.
#[derive(Debug, Clone)]
pub struct Settings {
    pub adb: PathBuf,
    pub serial: Option<String>,
    pub layout: WaypointLayout,
    pub backup_dir: PathBuf,
    pub command_timeout: Duration,
}

impl Settings {
    /// Loads the config file and applies environment overrides.
    pub fn load() -> Result<Settings> {
        let config = Config::load()?;
        Ok(config.resolve(&EnvOverrides::from_env()))
    }

    /// The bridge described by these settings.
    pub fn bridge(&self) -> Adb {
        Adb::new(self.adb.clone())
            .with_serial(self.serial.clone())
            .with_timeout(self.command_timeout)
    }
}

impl Config {
    /// Loads the config from `WAYPUSH_CONFIG` or the default location.
    ///
    /// A missing file at the default location is an empty config; a file
    /// named explicitly by `WAYPUSH_CONFIG` must exist.
    pub fn load() -> Result<Config> {
        if let Some(path) = env::config_path() {
            return Config::load_from(&path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Config::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Loads and parses the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Config::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parses config TOML.
    pub fn parse(content: &str) -> std::result::Result<Config, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        if config.command_timeout_secs == Some(0) {
            return Err("command_timeout_secs must be greater than 0".to_string());
        }
        if let Some(root) = &config.waypoint_root {
            if !root.starts_with('/') {
                return Err(format!("waypoint_root must be an absolute device path: '{}'", root));
            }
        }
        Ok(config)
    }

    /// Applies `overrides` and fills in defaults.
    pub fn resolve(&self, overrides: &EnvOverrides) -> Settings {
        Settings {
            adb: overrides
                .adb
                .clone()
                .or_else(|| self.adb.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ADB)),
            serial: overrides.serial.clone().or_else(|| self.serial.clone()),
            layout: self
                .waypoint_root
                .as_deref()
                .map(WaypointLayout::new)
                .unwrap_or_default(),
            backup_dir: overrides
                .backup_dir
                .clone()
                .or_else(|| self.backup_dir.clone())
                .unwrap_or_else(default_backup_dir),
            command_timeout: self
                .command_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(COMMAND_TIMEOUT),
        }
    }
}

/// `<config_dir>/waypush/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// `<data_dir>/waypush/backups`, falling back to `./backups`.
pub fn default_backup_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(BACKUP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(BACKUP_DIR_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
