// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Device bridge transport.
//!
//! All device filesystem and shell access goes through the [`Bridge`]
//! trait. [`Adb`] drives the external `adb` executable; tests substitute
//! an in-memory device.
//!
//! Device paths are POSIX strings. Local paths are `Path`s and may be
//! rewritten for the bridge executable (see [`wsl`]).

mod adb;
#[cfg(test)]
pub(crate) mod fake;
mod process;
pub mod wsl;

pub use adb::Adb;
pub use process::CommandOutput;

use std::path::Path;
use std::time::Duration;

use thiserror::Error;

/// Timeout for generic bridge commands.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for path-translation helper calls.
pub const HELPER_TIMEOUT: Duration = Duration::from_secs(5);

/// Failures talking to the device through the bridge.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{program} not found on PATH\n  hint: install Android platform-tools or set WAYPUSH_ADB")]
    NotFound { program: String },

    #[error("{program} command timed out after {}s: {command}", .timeout.as_secs())]
    Timeout {
        program: String,
        command: String,
        timeout: Duration,
    },

    #[error("{program} failed (rc={status}): {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Operations the sync workflow needs from a connected device.
pub trait Bridge {
    /// Runs `command` in the device shell and returns trimmed stdout.
    ///
    /// With `check = false` a non-zero exit is tolerated and whatever the
    /// command printed (usually nothing) is returned.
    fn shell(&self, command: &str, check: bool) -> Result<String, TransportError>;

    /// Copies a device file to `local_path`.
    fn pull(&self, device_path: &str, local_path: &Path) -> Result<(), TransportError>;

    /// Copies `local_path` to the device, replacing any existing file.
    fn push(&self, local_path: &Path, device_path: &str) -> Result<(), TransportError>;

    /// Size of a device file in bytes, or -1 if it does not exist or the
    /// size cannot be read.
    fn stat_size(&self, device_path: &str) -> Result<i64, TransportError> {
        let output = self.shell(
            &format!("stat -c %s \"{}\" 2>/dev/null", device_path),
            false,
        )?;
        Ok(parse_size(&output))
    }

    /// Lowercase hex SHA-256 of a device file, or `None` if the device has
    /// no `sha256sum` or the file is missing.
    fn sha256(&self, device_path: &str) -> Result<Option<String>, TransportError> {
        let output = self.shell(
            &format!("sha256sum \"{}\" 2>/dev/null", device_path),
            false,
        )?;
        Ok(parse_sha256(&output))
    }
}

/// Parses `stat -c %s` output, -1 on anything but a single integer.
pub fn parse_size(output: &str) -> i64 {
    output.trim().parse().unwrap_or(-1)
}

/// Extracts the digest from `sha256sum` output (`<hex>  <path>`).
pub fn parse_sha256(output: &str) -> Option<String> {
    let digest = output.split_whitespace().next()?;
    if digest.len() == 64 && digest.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(digest.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
