// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "waypush")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Push waypoint mission archives to a DJI controller over adb")]
#[command(
    long_about = "Push waypoint mission archives to a DJI controller over adb.\n\n\
    The controller only imports missions it created itself, so waypush overwrites the\n\
    archive of an existing mission, backing up the old one first."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print version
    #[arg(short = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List waypoint missions on the connected device
    #[command(after_help = colors::examples("\
Examples:
  waypush list            Show missions with author, date and size
  waypush list -o json    Machine-readable listing"))]
    List {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Push an archive to replace an existing mission
    #[command(after_help = colors::examples("\
Examples:
  waypush push survey.kmz                   Pick the target interactively
  waypush push survey.kmz --dry-run         Preview without modifying the device
  waypush push survey.kmz --uuid <id>       Replace a specific mission
  waypush push survey.kmz --checksum        Also verify SHA-256 on the device"))]
    Push {
        /// Path to the local archive (.kmz)
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,

        /// Target mission id (skips the interactive picker)
        #[arg(long, value_name = "ID")]
        uuid: Option<String>,

        /// Preview without modifying the device
        #[arg(long)]
        dry_run: bool,

        /// Skip backing up the archive being replaced
        #[arg(long)]
        no_backup: bool,

        /// Compare SHA-256 digests after pushing
        #[arg(long)]
        checksum: bool,
    },

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  waypush completion bash > ~/.local/share/bash-completion/completions/waypush
  waypush completion zsh > ~/.zfunc/_waypush
  waypush completion fish > ~/.config/fish/completions/waypush.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
