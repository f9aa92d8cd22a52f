// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory device for workflow tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::{Bridge, TransportError};

/// One call made against the fake device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Shell(String),
    Pull { device: String, local: PathBuf },
    Push { local: PathBuf, device: String },
    Stat(String),
    Sha256(String),
}

/// A device whose filesystem is a map of absolute path to file bytes.
#[derive(Default)]
pub(crate) struct FakeBridge {
    files: RefCell<BTreeMap<String, Vec<u8>>>,
    listing: RefCell<Option<String>>,
    calls: RefCell<Vec<Call>>,
    /// Drop this many bytes from every pushed file.
    pub truncate_pushes: Cell<usize>,
    /// Behave like a device without `sha256sum`.
    pub no_sha256: Cell<bool>,
    /// Fail every pull with a transport error.
    pub fail_pulls: Cell<bool>,
}

impl FakeBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: &str, bytes: &[u8]) {
        self.files
            .borrow_mut()
            .insert(path.to_string(), bytes.to_vec());
    }

    /// Overrides what `ls` prints instead of deriving it from the files.
    pub fn set_listing(&self, listing: &str) {
        *self.listing.borrow_mut() = Some(listing.to_string());
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn pushes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Push { device, .. } => Some(device),
                _ => None,
            })
            .collect()
    }

    /// Pulls whose local destination is inside `dir`.
    pub fn pulls_into(&self, dir: &Path) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Pull { device, local } if local.starts_with(dir) => Some(device),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn list_dir(&self, dir: &str) -> String {
        if let Some(listing) = self.listing.borrow().as_ref() {
            return listing.clone();
        }
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let mut names: Vec<String> = self
            .files
            .borrow()
            .keys()
            .filter_map(|path| path.strip_prefix(&prefix))
            .filter_map(|rest| rest.split('/').next())
            .map(str::to_string)
            .collect();
        names.dedup();
        names.join("\n")
    }
}

impl Bridge for FakeBridge {
    fn shell(&self, command: &str, _check: bool) -> Result<String, TransportError> {
        self.record(Call::Shell(command.to_string()));
        match command.strip_prefix("ls ") {
            Some(dir) => Ok(self.list_dir(dir.trim())),
            None => Ok(String::new()),
        }
    }

    fn pull(&self, device_path: &str, local_path: &Path) -> Result<(), TransportError> {
        self.record(Call::Pull {
            device: device_path.to_string(),
            local: local_path.to_path_buf(),
        });
        let bytes = match self.file(device_path) {
            Some(bytes) if !self.fail_pulls.get() => bytes,
            _ => {
                return Err(TransportError::Failed {
                    program: "adb".to_string(),
                    status: "1".to_string(),
                    stderr: format!("adb: error: failed to stat remote object '{}'", device_path),
                })
            }
        };
        std::fs::write(local_path, bytes).map_err(|source| TransportError::Spawn {
            program: "adb".to_string(),
            source,
        })
    }

    fn push(&self, local_path: &Path, device_path: &str) -> Result<(), TransportError> {
        self.record(Call::Push {
            local: local_path.to_path_buf(),
            device: device_path.to_string(),
        });
        let mut bytes = std::fs::read(local_path).map_err(|source| TransportError::Spawn {
            program: "adb".to_string(),
            source,
        })?;
        let keep = bytes.len().saturating_sub(self.truncate_pushes.get());
        bytes.truncate(keep);
        self.add_file(device_path, &bytes);
        Ok(())
    }

    fn stat_size(&self, device_path: &str) -> Result<i64, TransportError> {
        self.record(Call::Stat(device_path.to_string()));
        Ok(self
            .file(device_path)
            .map(|bytes| bytes.len() as i64)
            .unwrap_or(-1))
    }

    fn sha256(&self, device_path: &str) -> Result<Option<String>, TransportError> {
        self.record(Call::Sha256(device_path.to_string()));
        if self.no_sha256.get() {
            return Ok(None);
        }
        Ok(self
            .file(device_path)
            .map(|bytes| hex::encode(Sha256::digest(&bytes))))
    }
}
