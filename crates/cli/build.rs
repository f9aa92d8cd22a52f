// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    let vars = [
        ("WAYPUSH_TIMINGS", "WAYPUSH_TIMINGS"),
        ("NO_COLOR", "NO_COLOR"),
        ("COLOR", "COLOR"),
        ("WAYPUSH_CONFIG", "WAYPUSH_CONFIG"),
        ("WAYPUSH_ADB", "WAYPUSH_ADB"),
        ("WAYPUSH_SERIAL", "WAYPUSH_SERIAL"),
        ("ANDROID_SERIAL", "ANDROID_SERIAL"),
        ("WAYPUSH_BACKUP_DIR", "WAYPUSH_BACKUP_DIR"),
    ];

    for (const_name, env_name) in &vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";")?;
    }

    Ok(())
}
