// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution with a wall-clock limit.
//!
//! Output is captured into anonymous temp files rather than pipes so a
//! chatty child can never block on a full pipe while we poll for exit.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of a finished bridge command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code for messages; signals have no code.
    pub fn status_text(&self) -> String {
        match self.status.code() {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        }
    }
}

/// Runs `cmd` to completion, or kills it once `timeout` has elapsed.
///
/// Returns `Ok(None)` on timeout. Spawn failures (including a missing
/// executable) are returned as the underlying `io::Error`.
pub(crate) fn run_with_timeout(
    cmd: &mut Command,
    timeout: Duration,
) -> io::Result<Option<CommandOutput>> {
    let stdout = tempfile::tempfile()?;
    let stderr = tempfile::tempfile()?;

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout.try_clone()?))
        .stderr(Stdio::from(stderr.try_clone()?))
        .spawn()?;

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL);
    };

    Ok(Some(CommandOutput {
        stdout: read_back(stdout)?,
        stderr: read_back(stderr)?,
        status,
    }))
}

fn read_back(mut file: File) -> io::Result<String> {
    file.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
