// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use serde::Serialize;
use wp_core::{DeviceMission, WaypointLayout};

use crate::bridge::Bridge;
use crate::cli::OutputFormat;
use crate::discovery::list_missions;
use crate::display::mission_details;
use crate::error::Result;
use crate::time_phase;

use super::open_device;

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson<'a> {
    root: &'a str,
    missions: &'a [DeviceMission],
}

pub fn run(format: OutputFormat) -> Result<()> {
    let (bridge, settings) = open_device()?;
    let stdout = io::stdout();
    run_impl(&bridge, &settings.layout, format, &mut stdout.lock())
}

/// Internal implementation that accepts the bridge for testing.
pub(crate) fn run_impl<B: Bridge + ?Sized, W: Write>(
    bridge: &B,
    layout: &WaypointLayout,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Scanning device for waypoint missions...\n")?;
            let missions = time_phase!("discovery::scan", list_missions(bridge, layout))?;
            if missions.is_empty() {
                writeln!(out, "No missions found on device.")?;
                return Ok(());
            }
            for (i, mission) in missions.iter().enumerate() {
                writeln!(out, "{}", mission_details(i + 1, mission))?;
            }
        }
        OutputFormat::Json => {
            let missions = time_phase!("discovery::scan", list_missions(bridge, layout))?;
            let output = ListOutputJson {
                root: layout.root(),
                missions: &missions,
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
