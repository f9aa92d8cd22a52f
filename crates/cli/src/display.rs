// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of missions and sizes.

use wp_core::DeviceMission;

/// Formats a byte count with thousands separators (`48,213`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `48,213 bytes`, or `fallback` when the size is unknown.
pub fn size_or(size: i64, fallback: &str) -> String {
    match u64::try_from(size) {
        Ok(n) => format!("{} bytes", format_count(n)),
        Err(_) => fallback.to_string(),
    }
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Multi-line block used by `waypush list`.
pub fn mission_details(number: usize, mission: &DeviceMission) -> String {
    let meta = &mission.metadata;
    let waypoints = match meta.waypoint_count {
        0 => "unknown".to_string(),
        n => n.to_string(),
    };
    format!(
        "  [{number}] {id}\n      Author: {author}\n      Created: {created}\n      Waypoints: {waypoints}\n      Size: {size}\n",
        id = mission.id,
        author = or(&meta.author, "unknown"),
        created = or(&meta.create_time, "unknown"),
        size = size_or(mission.archive_size, "unknown size"),
    )
}

/// Compact two-line entry used by the target picker.
pub fn mission_choice(number: usize, mission: &DeviceMission) -> String {
    let meta = &mission.metadata;
    let waypoints = match meta.waypoint_count {
        0 => "?".to_string(),
        n => n.to_string(),
    };
    format!(
        "  [{number}] {id}\n      {author} | {created} | {waypoints} wpts | {size}\n",
        id = mission.id,
        author = or(&meta.author, "?"),
        created = or(&meta.create_time, "?"),
        size = size_or(mission.archive_size, "?"),
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
