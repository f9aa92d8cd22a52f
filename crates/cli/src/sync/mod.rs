// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Push workflow: replace a mission archive on the device.
//!
//! # Stages
//!
//! ```text
//! validate local ─► discover ─► select target ─► backup ─► stage & push ─► verify
//! ```
//!
//! Every stage before the push is a hard gate: a failure stops the run
//! before the device is modified. A dry run stops after describing the
//! push. Verification problems are reported as warnings and never roll
//! anything back.

mod backup;
mod select;
mod verify;

pub use backup::{backup_path, pull_backup};
pub use select::{select_target, PROMPT};
pub use verify::{sha256_file, verify, Destination, Finding, Verification};

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::TempDir;
use tracing::{debug, info};
use wp_core::{archive_file_name, parse_metadata, validate, MissionId, WaypointLayout};

use crate::bridge::Bridge;
use crate::colors;
use crate::discovery;
use crate::display::format_count;
use crate::error::{Error, Result};
use crate::interrupt;
use crate::time_phase;

/// What `waypush push` was asked to do.
#[derive(Debug, Clone, Default)]
pub struct PushOptions {
    /// Local archive to upload.
    pub archive: PathBuf,
    /// Mission id to overwrite, skipping the picker.
    pub target: Option<String>,
    pub dry_run: bool,
    pub no_backup: bool,
    /// Also compare SHA-256 digests after the push.
    pub checksum: bool,
}

/// How a push run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// Archive pushed; `verified` is false when any check warned.
    Pushed { id: MissionId, verified: bool },
    /// Dry run completed without touching the device.
    DryRun { id: MissionId },
    /// Operator quit at the picker.
    Cancelled,
}

/// Where the workflow finds the device and keeps backups.
pub struct Target<'a, B: Bridge + ?Sized> {
    pub bridge: &'a B,
    pub layout: &'a WaypointLayout,
    pub backup_dir: &'a Path,
}

/// Runs the push workflow, reading picker answers from `input` and
/// writing progress to `out`.
pub fn run<B, R, W>(
    target: &Target<'_, B>,
    options: &PushOptions,
    input: &mut R,
    out: &mut W,
) -> Result<PushOutcome>
where
    B: Bridge + ?Sized,
    R: BufRead,
    W: Write,
{
    let Target {
        bridge,
        layout,
        backup_dir,
    } = *target;
    let name = file_name(&options.archive);

    writeln!(out, "Validating {}...", name)?;
    validate(&options.archive)?;
    let local = parse_metadata(&options.archive);
    writeln!(
        out,
        "  {} {} waypoints, author: {}\n",
        colors::ok("OK"),
        local.waypoint_count,
        or_unknown(&local.author)
    )?;

    let requested = options
        .target
        .as_deref()
        .map(MissionId::parse)
        .transpose()?;
    interrupt::check()?;

    writeln!(out, "Scanning device for waypoint missions...\n")?;
    let missions = time_phase!("discovery::scan", discovery::list_missions(bridge, layout))?;
    if missions.is_empty() {
        return Err(Error::NoMissions);
    }

    interrupt::check()?;

    let Some(mission) = select_target(&missions, requested.as_ref(), input, out)? else {
        return Ok(PushOutcome::Cancelled);
    };
    let id = mission.id.clone();
    writeln!(out, "Target: {}\n", id)?;

    let primary = layout.primary_archive(&id);
    let staging = layout.staging_archive(&id);

    if options.no_backup {
        debug!("backup skipped on request");
    } else if mission.has_archive() {
        let dest = backup_path(backup_dir, &id, &Local::now().naive_local());
        if options.dry_run {
            writeln!(out, "[DRY RUN] Would back up existing KMZ to {}", dest.display())?;
        } else {
            writeln!(out, "Backing up existing KMZ to {}...", dest.display())?;
            let size = pull_backup(bridge, &primary, &dest)?;
            writeln!(out, "  Backed up ({} bytes)\n", format_count(size))?;
        }
    }

    interrupt::check()?;
    let scratch = TempDir::new()?;
    let staged = scratch.path().join(archive_file_name(&id));
    fs::copy(&options.archive, &staged)?;
    let local_size = fs::metadata(&staged)?.len();

    if options.dry_run {
        writeln!(
            out,
            "[DRY RUN] Would push {} ({} bytes) as:",
            name,
            format_count(local_size)
        )?;
        writeln!(out, "  -> {}", primary)?;
        writeln!(out, "  -> {}", staging)?;
        writeln!(out, "\nNo changes made to device.")?;
        return Ok(PushOutcome::DryRun { id });
    }

    let digest = if options.checksum {
        Some(sha256_file(&staged)?)
    } else {
        None
    };

    time_phase!("sync::transfer", {
        for device_path in [&primary, &staging] {
            writeln!(out, "Pushing to {}...", device_path)?;
            bridge.push(&staged, device_path)?;
        }
    });
    drop(scratch);
    info!(mission = %id, bytes = local_size, "archive pushed");

    writeln!(out, "\nVerifying...")?;
    let report = verify(
        bridge,
        &[
            (Destination::Primary, primary.as_str()),
            (Destination::Staging, staging.as_str()),
        ],
        local_size,
        digest.as_deref(),
    );
    for finding in &report.findings {
        writeln!(out, "  {}", finding)?;
    }

    let verified = report.is_ok();
    if verified {
        writeln!(out, "\n{} Pushed {} -> {}", colors::ok("Success!"), name, id)?;
        writeln!(
            out,
            "\nNext step: open DJI Fly, go to Waypoint and select the mission. It should"
        )?;
        writeln!(
            out,
            "now contain the new waypoints. If it shows the old mission, restart the app."
        )?;
    } else {
        writeln!(
            out,
            "\n{}",
            colors::warning("Push completed with warnings. Check the mission in DJI Fly.")
        )?;
    }
    Ok(PushOutcome::Pushed { id, verified })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "unknown"
    } else {
        value
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
