// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local path translation for a Windows `adb.exe` driven from WSL.
//!
//! Under WSL the bridge is usually the Windows binary, which cannot open
//! `/home/...` paths. Local arguments to push/pull are rewritten with
//! `wslpath -w`; device paths are never touched.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::process::run_with_timeout;
use super::HELPER_TIMEOUT;

/// True when running under Windows Subsystem for Linux.
pub fn detect() -> bool {
    std::fs::read_to_string("/proc/version")
        .map(|version| is_wsl_kernel(&version))
        .unwrap_or(false)
}

/// True for a `/proc/version` string from a WSL kernel.
pub fn is_wsl_kernel(version: &str) -> bool {
    version.to_lowercase().contains("microsoft")
}

/// Windows form of `path`, or `path` unchanged if translation fails.
pub fn to_windows_path(path: &Path) -> PathBuf {
    let mut cmd = Command::new("wslpath");
    cmd.arg("-w").arg(path);
    match run_with_timeout(&mut cmd, HELPER_TIMEOUT) {
        Ok(Some(output)) if output.success() && !output.stdout.trim().is_empty() => {
            PathBuf::from(output.stdout.trim())
        }
        Ok(Some(output)) => {
            tracing::debug!(
                "wslpath failed for {} (rc={}), using it as-is",
                path.display(),
                output.status_text()
            );
            path.to_path_buf()
        }
        Ok(None) => {
            tracing::debug!("wslpath timed out for {}", path.display());
            path.to_path_buf()
        }
        Err(e) => {
            tracing::debug!("wslpath unavailable: {}", e);
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
#[path = "wsl_tests.rs"]
mod tests;
