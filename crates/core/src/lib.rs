// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wp-core: mission identifiers, device layout, and KMZ archive inspection.
//!
//! Everything in this crate is pure local logic. Talking to the device
//! lives in the `waypush` crate, which builds on the types here.

pub mod archive;
pub mod error;
pub mod layout;
pub mod mission;
mod xml;

pub use archive::{format_create_time, parse_metadata, validate, REQUIRED_ENTRIES};
pub use error::{ArchiveError, Error, Result};
pub use layout::{
    archive_file_name, backup_file_name, WaypointLayout, ARCHIVE_EXT, DEFAULT_WAYPOINT_ROOT,
};
pub use mission::{ArchiveMetadata, DeviceMission, MissionId};
