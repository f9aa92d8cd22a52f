// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mission identifiers and the records built around them.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

// Hard-coded pattern, verified by the tests below.
static MISSION_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Identifier of a waypoint mission: 8-4-4-4-12 hex groups.
///
/// The same string names the mission's folder on the device and the base
/// name of its archive. Matching is case-insensitive; the original casing
/// is kept because the device filesystem is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MissionId(String);

impl MissionId {
    /// Parses `s`, rejecting anything that is not exactly an identifier.
    pub fn parse(s: &str) -> Result<Self> {
        if Self::is_valid(s) {
            Ok(MissionId(s.to_string()))
        } else {
            Err(Error::InvalidMissionId(s.to_string()))
        }
    }

    /// Returns true if `s` fully matches the identifier pattern.
    pub fn is_valid(s: &str) -> bool {
        MISSION_ID_RE.is_match(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MissionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MissionId::parse(s)
    }
}

impl AsRef<str> for MissionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Descriptive fields read out of a mission archive.
///
/// Advisory only: every field falls back to its empty value when the
/// archive cannot be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveMetadata {
    pub author: String,
    /// `YYYY-MM-DD HH:MM UTC`, or the raw value if it was not a timestamp.
    pub create_time: String,
    pub waypoint_count: usize,
}

/// A mission folder found on the device during a discovery scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceMission {
    pub id: MissionId,
    /// Size of the primary archive in bytes, -1 when unknown or absent.
    pub archive_size: i64,
    pub metadata: ArchiveMetadata,
}

impl DeviceMission {
    /// A mission with unknown size and empty metadata.
    pub fn new(id: MissionId) -> Self {
        DeviceMission {
            id,
            archive_size: -1,
            metadata: ArchiveMetadata::default(),
        }
    }

    /// True when the device reported a non-empty primary archive.
    pub fn has_archive(&self) -> bool {
        self.archive_size > 0
    }
}

#[cfg(test)]
#[path = "mission_tests.rs"]
mod tests;
