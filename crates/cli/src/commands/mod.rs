// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod list;
pub mod push;

use crate::bridge::Adb;
use crate::config::Settings;
use crate::error::Result;

/// Helper to resolve settings and the device bridge for this invocation.
pub fn open_device() -> Result<(Adb, Settings)> {
    let settings = Settings::load()?;
    let bridge = settings.bridge();
    Ok((bridge, settings))
}
