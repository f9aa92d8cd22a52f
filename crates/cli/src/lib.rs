// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! waypush - replace waypoint missions on a DJI controller over adb.
//!
//! This crate provides the `waypush` CLI. The controller refuses to import
//! missions it did not create, so instead of importing, waypush overwrites
//! the archive of an existing mission in place.
//!
//! # Main Components
//!
//! - [`bridge`] - the [`Bridge`] trait and the `adb` implementation
//! - [`discovery`] - mission folders on the device, with size and metadata
//! - [`sync`] - the validate, select, backup, push and verify workflow
//! - [`config`] - optional TOML settings and environment overrides
//! - [`interrupt`] - Ctrl-C handling for the prompt and workflow stages
//! - [`Error`] - error type for every command
//!
//! # Pushing programmatically
//!
//! ```rust,ignore
//! use wpush::config::Settings;
//! use wpush::sync::{self, PushOptions, Target};
//!
//! let settings = Settings::load()?;
//! let bridge = settings.bridge();
//! let target = Target {
//!     bridge: &bridge,
//!     layout: &settings.layout,
//!     backup_dir: &settings.backup_dir,
//! };
//! let options = PushOptions {
//!     archive: "survey.kmz".into(),
//!     dry_run: true,
//!     ..PushOptions::default()
//! };
//! sync::run(&target, &options, &mut std::io::stdin().lock(), &mut std::io::stdout())?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
pub mod logging;
pub mod timings;

pub mod bridge;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod interrupt;
pub mod sync;


pub use bridge::{Adb, Bridge, TransportError};
pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use sync::PushOptions;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    let result = match command {
        Command::List { output } => commands::list::run(output),
        Command::Push {
            archive,
            uuid,
            dry_run,
            no_backup,
            checksum,
        } => commands::push::run(PushOptions {
            archive,
            target: uuid,
            dry_run,
            no_backup,
            checksum,
        }),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "waypush", &mut std::io::stdout());
            Ok(())
        }
    };
    // adb shares our process group, so the same Ctrl-C kills it and
    // surfaces here as a transport failure.
    result.map_err(|e| if interrupt::requested() { Error::Interrupted } else { e })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
