// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local copies of archives about to be overwritten.
//!
//! Backups are never pruned.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;
use wp_core::{backup_file_name, MissionId};

use crate::bridge::Bridge;
use crate::error::Result;

/// `<dir>/<id>_<YYYYMMDD_HHMMSS>.kmz`
pub fn backup_path(dir: &Path, id: &MissionId, taken_at: &NaiveDateTime) -> PathBuf {
    dir.join(backup_file_name(id, taken_at))
}

/// Pulls `device_path` to `dest`, creating the backup directory on demand.
/// Returns the size of the local copy.
pub fn pull_backup<B: Bridge + ?Sized>(bridge: &B, device_path: &str, dest: &Path) -> Result<u64> {
    if let Some(dir) = dest.parent() {
        fs::create_dir_all(dir)?;
    }
    bridge.pull(device_path, dest)?;
    let size = fs::metadata(dest)?.len();
    info!(backup = %dest.display(), bytes = size, "backed up device archive");
    Ok(size)
}

#[cfg(test)]
#[path = "backup_tests.rs"]
mod tests;
