// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where missions live on the device and how local backups are named.
//!
//! Device paths are always POSIX strings; they are never run through the
//! local `Path` machinery.

use chrono::NaiveDateTime;

use crate::mission::MissionId;

/// Waypoint root used by the DJI Fly / GoFly app.
pub const DEFAULT_WAYPOINT_ROOT: &str = "/sdcard/Android/data/dji.go.v5/files/waypoint";

/// Extension of mission archives, without the dot.
pub const ARCHIVE_EXT: &str = "kmz";

/// Folder under the root that the on-device app imports from.
const STAGING_DIR: &str = "kmzTemp";

/// Device-side path layout rooted at a waypoint directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointLayout {
    root: String,
}

impl Default for WaypointLayout {
    fn default() -> Self {
        WaypointLayout::new(DEFAULT_WAYPOINT_ROOT)
    }
}

impl WaypointLayout {
    pub fn new(root: &str) -> Self {
        let trimmed = root.trim_end_matches('/');
        WaypointLayout {
            root: if trimmed.is_empty() { "/" } else { trimmed }.to_string(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// `<root>/<id>`
    pub fn mission_dir(&self, id: &MissionId) -> String {
        self.join(id.as_str())
    }

    /// `<root>/<id>/<id>.kmz`
    pub fn primary_archive(&self, id: &MissionId) -> String {
        format!("{}/{}", self.mission_dir(id), archive_file_name(id))
    }

    /// `<root>/kmzTemp/<id>.kmz`
    pub fn staging_archive(&self, id: &MissionId) -> String {
        format!("{}/{}", self.join(STAGING_DIR), archive_file_name(id))
    }

    fn join(&self, name: &str) -> String {
        if self.root == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", self.root, name)
        }
    }
}

/// `<id>.kmz`, the name an archive must carry to be picked up for `id`.
pub fn archive_file_name(id: &MissionId) -> String {
    format!("{}.{}", id, ARCHIVE_EXT)
}

/// `<id>_<YYYYMMDD_HHMMSS>.kmz`
pub fn backup_file_name(id: &MissionId, taken_at: &NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        id,
        taken_at.format("%Y%m%d_%H%M%S"),
        ARCHIVE_EXT
    )
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
