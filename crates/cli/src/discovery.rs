// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mission discovery on the device.
//!
//! Missions are the identifier-shaped folders under the waypoint root.
//! Each one is enriched with its archive size and, by pulling a scratch
//! copy, the archive metadata. Enrichment is best effort: a mission whose
//! archive cannot be read is still listed, with unknown size and empty
//! metadata.

use std::io::ErrorKind;
use std::path::Path;

use tempfile::TempDir;
use tracing::debug;
use wp_core::{archive_file_name, parse_metadata, DeviceMission, MissionId, WaypointLayout};

use crate::bridge::Bridge;
use crate::error::Result;
use crate::interrupt;

/// Mission ids in a directory listing, in listing order.
pub fn mission_ids(listing: &str) -> Vec<MissionId> {
    listing
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| MissionId::parse(name).ok())
        .collect()
}

/// Lists the missions on the device with size and metadata filled in.
///
/// A missing or unreadable root yields an empty list. Failing to run the
/// bridge at all is an error.
pub fn list_missions<B: Bridge + ?Sized>(
    bridge: &B,
    layout: &WaypointLayout,
) -> Result<Vec<DeviceMission>> {
    let listing = bridge.shell(&format!("ls {}", layout.root()), false)?;
    let ids = mission_ids(&listing);
    debug!(root = layout.root(), count = ids.len(), "scanned waypoint root");

    let scratch = TempDir::new()?;
    let mut missions = Vec::with_capacity(ids.len());
    for id in ids {
        interrupt::check()?;
        missions.push(enrich(bridge, layout, id, scratch.path()));
    }
    Ok(missions)
}

fn enrich<B: Bridge + ?Sized>(
    bridge: &B,
    layout: &WaypointLayout,
    id: MissionId,
    scratch: &Path,
) -> DeviceMission {
    let mut mission = DeviceMission::new(id);
    let device_path = layout.primary_archive(&mission.id);

    match bridge.stat_size(&device_path) {
        Ok(size) => mission.archive_size = size,
        Err(e) => debug!(mission = %mission.id, error = %e, "size lookup failed"),
    }

    let local = scratch.join(archive_file_name(&mission.id));
    match bridge.pull(&device_path, &local) {
        Ok(()) => mission.metadata = parse_metadata(&local),
        Err(e) => debug!(mission = %mission.id, error = %e, "metadata pull failed"),
    }
    if let Err(e) = std::fs::remove_file(&local) {
        if e.kind() != ErrorKind::NotFound {
            debug!(mission = %mission.id, error = %e, "scratch copy not removed");
        }
    }
    mission
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
