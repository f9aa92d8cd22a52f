// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_missions}
  {list}        List waypoint missions on the device
  {push}        Replace a mission with a local archive

{header_setup}
  {completion}  Generate shell completions
",
        header_missions = colors::header("Missions:"),
        header_setup = colors::header("Setup:"),
        list = colors::literal("list"),
        push = colors::literal("push"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  waypush list                     Find the mission to replace
  waypush push new.kmz --dry-run   Preview the push
  waypush push new.kmz             Back up and replace the mission

Environment:
  WAYPUSH_ADB         adb executable (default: adb on PATH)
  WAYPUSH_SERIAL      device serial when several are attached
  WAYPUSH_BACKUP_DIR  where replaced archives are saved
  WAYPUSH_CONFIG      config file path
  RUST_LOG            log filter, overrides -v",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
