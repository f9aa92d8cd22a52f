// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for wp-core operations.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a local mission archive is rejected before any push.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a valid zip/KMZ file: {}\n  hint: {reason}", .path.display())]
    InvalidZip { path: PathBuf, reason: String },

    #[error("missing required entry '{entry}' in {file}\n  hint: a mission archive needs both wpmz/template.kml and wpmz/waylines.wpml")]
    MissingEntry { entry: &'static str, file: String },

    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// All possible errors that can occur in wp-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid mission id: '{0}'\n  hint: expected the form xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx (hex)")]
    InvalidMissionId(String),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// A specialized Result type for wp-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
