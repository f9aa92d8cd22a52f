// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use super::process::{run_with_timeout, CommandOutput};
use super::{wsl, Bridge, TransportError, COMMAND_TIMEOUT};

/// Bridge backed by the `adb` executable.
#[derive(Debug, Clone)]
pub struct Adb {
    program: PathBuf,
    serial: Option<String>,
    timeout: Duration,
    translate_paths: bool,
}

impl Adb {
    /// An `adb` bridge using `program`, resolved through `PATH` when it is
    /// a bare name. WSL path translation is detected here, once.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Adb {
            program: program.into(),
            serial: None,
            timeout: COMMAND_TIMEOUT,
            translate_paths: wsl::detect(),
        }
    }

    /// Targets a specific device (`adb -s <serial>`).
    pub fn with_serial(mut self, serial: Option<String>) -> Self {
        self.serial = serial;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Forces local path translation on or off.
    #[cfg(test)]
    pub(crate) fn with_path_translation(mut self, enabled: bool) -> Self {
        self.translate_paths = enabled;
        self
    }

    /// Runs `adb <args>` and captures its output.
    ///
    /// With `check` set, a non-zero exit becomes [`TransportError::Failed`].
    pub fn run<S: AsRef<OsStr>>(
        &self,
        args: &[S],
        check: bool,
    ) -> Result<CommandOutput, TransportError> {
        let mut cmd = Command::new(&self.program);
        if let Some(serial) = &self.serial {
            cmd.arg("-s").arg(serial);
        }
        cmd.args(args);

        let command = describe(args);
        tracing::debug!("{} {}", self.program_name(), command);

        let output = match run_with_timeout(&mut cmd, self.timeout) {
            Ok(Some(output)) => output,
            Ok(None) => {
                return Err(TransportError::Timeout {
                    program: self.program_name(),
                    command,
                    timeout: self.timeout,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TransportError::NotFound {
                    program: self.program_name(),
                })
            }
            Err(source) => {
                return Err(TransportError::Spawn {
                    program: self.program_name(),
                    source,
                })
            }
        };

        if check && !output.success() {
            return Err(TransportError::Failed {
                program: self.program_name(),
                status: output.status_text(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output)
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn local_arg(&self, path: &Path) -> PathBuf {
        if self.translate_paths {
            wsl::to_windows_path(path)
        } else {
            path.to_path_buf()
        }
    }
}

impl Bridge for Adb {
    fn shell(&self, command: &str, check: bool) -> Result<String, TransportError> {
        let output = self.run(&["shell", command], check)?;
        Ok(output.stdout.trim().to_string())
    }

    fn pull(&self, device_path: &str, local_path: &Path) -> Result<(), TransportError> {
        let local = self.local_arg(local_path);
        self.run(&[OsStr::new("pull"), OsStr::new(device_path), local.as_os_str()], true)?;
        Ok(())
    }

    fn push(&self, local_path: &Path, device_path: &str) -> Result<(), TransportError> {
        let local = self.local_arg(local_path);
        self.run(&[OsStr::new("push"), local.as_os_str(), OsStr::new(device_path)], true)?;
        tracing::info!("pushed {} -> {}", local_path.display(), device_path);
        Ok(())
    }
}

fn describe<S: AsRef<OsStr>>(args: &[S]) -> String {
    args.iter()
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "adb_tests.rs"]
mod tests;
