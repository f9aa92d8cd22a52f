// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by waypush are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `WAYPUSH_TIMINGS` is set (any value).
pub fn timings() -> bool {
    std::env::var(vars::WAYPUSH_TIMINGS).is_ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the value of `WAYPUSH_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    non_empty(vars::WAYPUSH_CONFIG).map(PathBuf::from)
}

/// Returns the value of `WAYPUSH_ADB` if set.
pub fn adb_binary() -> Option<PathBuf> {
    non_empty(vars::WAYPUSH_ADB).map(PathBuf::from)
}

/// Returns `WAYPUSH_SERIAL`, falling back to adb's own `ANDROID_SERIAL`.
pub fn serial() -> Option<String> {
    non_empty(vars::WAYPUSH_SERIAL).or_else(|| non_empty(vars::ANDROID_SERIAL))
}

/// Returns the value of `WAYPUSH_BACKUP_DIR` if set.
pub fn backup_dir() -> Option<PathBuf> {
    non_empty(vars::WAYPUSH_BACKUP_DIR).map(PathBuf::from)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
