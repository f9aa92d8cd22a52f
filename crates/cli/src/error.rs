// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::bridge::TransportError;
use wp_core::ArchiveError;

/// All possible errors that can occur in waypush commands.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("invalid mission id: '{0}'\n  hint: expected the form xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx (hex)")]
    InvalidMissionId(String),

    #[error("no missions found on device\n  hint: create a dummy mission in DJI Fly first, then push over it")]
    NoMissions,

    #[error("mission not found on device: {0}\n  hint: run 'waypush list' to see the missions on the device")]
    MissionNotFound(String),

    #[error("aborted")]
    Interrupted,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Interrupted => 130,
            _ => 1,
        }
    }
}

/// A specialized Result type for waypush operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<wp_core::Error> for Error {
    fn from(e: wp_core::Error) -> Self {
        match e {
            wp_core::Error::InvalidMissionId(s) => Error::InvalidMissionId(s),
            wp_core::Error::Archive(e) => Error::Archive(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
