// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io;

use tracing::debug;

use crate::error::Result;
use crate::sync::{self, PushOptions, Target};

use super::open_device;

/// Runs the push workflow against the configured device, prompting on
/// stdin when a target has to be picked.
pub fn run(options: PushOptions) -> Result<()> {
    let (bridge, settings) = open_device()?;
    let target = Target {
        bridge: &bridge,
        layout: &settings.layout,
        backup_dir: &settings.backup_dir,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = sync::run(&target, &options, &mut stdin.lock(), &mut stdout.lock())?;
    debug!(?outcome, "push finished");
    Ok(())
}
