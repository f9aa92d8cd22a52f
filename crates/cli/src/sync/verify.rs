// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Post-push checks.
//!
//! The size of each destination must equal the staged size. When a local
//! digest is supplied the device SHA-256 is compared too; devices without
//! `sha256sum` skip that check. Nothing here fails the push: problems are
//! findings the caller reports.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::bridge::Bridge;
use crate::colors;
use crate::display::format_count;

/// The two device copies written by a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Primary,
    Staging,
}

impl Destination {
    pub fn label(self) -> &'static str {
        match self {
            Destination::Primary => "Primary",
            Destination::Staging => "kmzTemp",
        }
    }
}

/// Result of one check against one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    SizeOk {
        dest: Destination,
        size: u64,
    },
    SizeMismatch {
        dest: Destination,
        expected: u64,
        actual: i64,
    },
    ChecksumOk {
        dest: Destination,
    },
    ChecksumMismatch {
        dest: Destination,
        expected: String,
        actual: String,
    },
    ChecksumUnavailable {
        dest: Destination,
    },
}

impl Finding {
    /// True for findings that should make the operator look again.
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            Finding::SizeMismatch { .. } | Finding::ChecksumMismatch { .. }
        )
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::SizeOk { dest, size } => write!(
                f,
                "{}:  {} bytes {}",
                dest.label(),
                format_count(*size),
                colors::ok("OK")
            ),
            Finding::SizeMismatch {
                dest,
                expected,
                actual,
            } => write!(
                f,
                "{} {} size mismatch: expected {}, got {}",
                colors::warning("WARNING:"),
                dest.label(),
                expected,
                actual
            ),
            Finding::ChecksumOk { dest } => {
                write!(f, "{}:  sha256 {}", dest.label(), colors::ok("OK"))
            }
            Finding::ChecksumMismatch {
                dest,
                expected,
                actual,
            } => write!(
                f,
                "{} {} checksum mismatch: expected {}, got {}",
                colors::warning("WARNING:"),
                dest.label(),
                expected,
                actual
            ),
            Finding::ChecksumUnavailable { dest } => write!(
                f,
                "{}:  sha256 unavailable on device, skipped",
                dest.label()
            ),
        }
    }
}

/// All findings of a verification pass, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    pub findings: Vec<Finding>,
}

impl Verification {
    pub fn is_ok(&self) -> bool {
        !self.findings.iter().any(Finding::is_problem)
    }
}

/// Checks every destination against the staged size and, when given, the
/// local digest. Sizes are checked for all destinations before digests.
pub fn verify<B: Bridge + ?Sized>(
    bridge: &B,
    destinations: &[(Destination, &str)],
    expected_size: u64,
    expected_digest: Option<&str>,
) -> Verification {
    let mut findings = Vec::new();

    for &(dest, device_path) in destinations {
        let actual = bridge.stat_size(device_path).unwrap_or_else(|e| {
            debug!(path = device_path, error = %e, "size check failed");
            -1
        });
        if u64::try_from(actual) == Ok(expected_size) {
            findings.push(Finding::SizeOk {
                dest,
                size: expected_size,
            });
        } else {
            warn!(
                path = device_path,
                expected = expected_size,
                actual,
                "size mismatch after push"
            );
            findings.push(Finding::SizeMismatch {
                dest,
                expected: expected_size,
                actual,
            });
        }
    }

    let Some(expected) = expected_digest else {
        return Verification { findings };
    };
    for &(dest, device_path) in destinations {
        let actual = bridge.sha256(device_path).unwrap_or_else(|e| {
            debug!(path = device_path, error = %e, "checksum failed");
            None
        });
        findings.push(match actual {
            None => Finding::ChecksumUnavailable { dest },
            Some(actual) if actual.eq_ignore_ascii_case(expected) => Finding::ChecksumOk { dest },
            Some(actual) => {
                warn!(path = device_path, "checksum mismatch after push");
                Finding::ChecksumMismatch {
                    dest,
                    expected: expected.to_string(),
                    actual,
                }
            }
        });
    }
    Verification { findings }
}

/// Lowercase hex SHA-256 of a local file.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
