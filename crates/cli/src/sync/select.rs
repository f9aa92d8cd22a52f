// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Choosing which device mission to overwrite.

use std::io::{self, BufRead, Write};

use wp_core::{DeviceMission, MissionId};

use crate::display::mission_choice;
use crate::error::{Error, Result};
use crate::interrupt;

pub const PROMPT: &str = "Enter number (or 'q' to quit): ";

/// Picks the mission to overwrite.
///
/// `requested` must equal a discovered id exactly. Without it a lone
/// mission is taken as is; otherwise the operator picks from a numbered
/// list until they give a valid number. Returns `None` when the operator
/// quits with `q` or closes the input.
pub fn select_target<'m, R: BufRead, W: Write>(
    missions: &'m [DeviceMission],
    requested: Option<&MissionId>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<&'m DeviceMission>> {
    if let Some(requested) = requested {
        return missions
            .iter()
            .find(|m| &m.id == requested)
            .map(Some)
            .ok_or_else(|| Error::MissionNotFound(requested.to_string()));
    }

    if let [only] = missions {
        writeln!(out, "Only one mission found, using: {}\n", only.id)?;
        return Ok(Some(only));
    }

    writeln!(out, "Select target mission to replace:\n")?;
    for (i, mission) in missions.iter().enumerate() {
        writeln!(out, "{}", mission_choice(i + 1, mission))?;
    }
    prompt(missions, input, out)
}

fn prompt<'m, R: BufRead, W: Write>(
    missions: &'m [DeviceMission],
    input: &mut R,
    out: &mut W,
) -> Result<Option<&'m DeviceMission>> {
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        interrupt::check()?;
        line.clear();
        if read_answer(input, &mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match parse_choice(answer, missions.len()) {
            Some(index) => return Ok(missions.get(index)),
            None => writeln!(out, "Please enter 1-{}", missions.len())?,
        }
    }
}

/// Reads one line like [`BufRead::read_line`], except that `EINTR`
/// ends the read with [`Error::Interrupted`] instead of being retried.
fn read_answer<R: BufRead>(input: &mut R, line: &mut String) -> Result<usize> {
    let mut bytes = Vec::new();
    loop {
        let (done, used) = {
            let available = match input.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    return Err(Error::Interrupted)
                }
                Err(e) => return Err(e.into()),
            };
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    bytes.extend_from_slice(&available[..=i]);
                    (true, i + 1)
                }
                None => {
                    bytes.extend_from_slice(available);
                    (available.is_empty(), available.len())
                }
            }
        };
        input.consume(used);
        if done {
            break;
        }
    }
    line.push_str(&String::from_utf8_lossy(&bytes));
    Ok(bytes.len())
}

/// Zero-based index for a 1-based answer within `1..=count`.
pub(super) fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    let n: usize = answer.parse().ok()?;
    n.checked_sub(1).filter(|&index| index < count)
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
