// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! KMZ mission archive validation and metadata extraction.
//!
//! A KMZ is a zip container. Only two entries matter here:
//! - `wpmz/template.kml` carries the author and creation time
//! - `wpmz/waylines.wpml` carries the ordered waypoints
//!
//! [`validate`] is strict and gates every push. [`parse_metadata`] is
//! advisory and never fails.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;
use zip::ZipArchive;

use crate::error::ArchiveError;
use crate::mission::ArchiveMetadata;
use crate::xml;

const TEMPLATE_ENTRY: &str = "wpmz/template.kml";
const WAYLINES_ENTRY: &str = "wpmz/waylines.wpml";

/// Entries every mission archive must contain.
pub const REQUIRED_ENTRIES: [&str; 2] = [TEMPLATE_ENTRY, WAYLINES_ENTRY];

/// Checks that `path` is a zip containing every [`REQUIRED_ENTRIES`] entry.
pub fn validate(path: &Path) -> Result<(), ArchiveError> {
    if !path.is_file() {
        return Err(ArchiveError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let archive = ZipArchive::new(file).map_err(|e| ArchiveError::InvalidZip {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    for entry in REQUIRED_ENTRIES {
        if !archive.file_names().any(|name| name == entry) {
            return Err(ArchiveError::MissingEntry {
                entry,
                file: display_name(path),
            });
        }
    }
    Ok(())
}

/// Reads author, creation time and waypoint count from the archive.
///
/// Fields that cannot be read keep their default; whatever was read
/// before a failure is kept.
pub fn parse_metadata(path: &Path) -> ArchiveMetadata {
    let mut meta = ArchiveMetadata::default();
    if let Err(e) = read_metadata(path, &mut meta) {
        tracing::debug!("metadata unavailable for {}: {}", path.display(), e);
    }
    meta
}

/// Renders epoch milliseconds as `YYYY-MM-DD HH:MM UTC`.
///
/// Anything that is not an in-range integer is returned unchanged.
pub fn format_create_time(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|millis| DateTime::<Utc>::from_timestamp(millis.div_euclid(1000), 0))
        .filter(|dt| (1..=9999).contains(&dt.year()))
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Debug, Error)]
enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error("{entry}: {source}")]
    Xml {
        entry: &'static str,
        source: roxmltree::Error,
    },
}

fn read_metadata(path: &Path, meta: &mut ArchiveMetadata) -> Result<(), ReadError> {
    let mut archive = ZipArchive::new(File::open(path)?)?;

    if let Some(text) = read_entry(&mut archive, TEMPLATE_ENTRY)? {
        let doc = parse_xml(TEMPLATE_ENTRY, &text)?;
        let root = doc.root_element();
        if let Some(author) = xml::first_text(root, "author") {
            meta.author = author;
        }
        if let Some(raw) = xml::first_text(root, "createTime") {
            meta.create_time = format_create_time(&raw);
        }
    }

    if let Some(text) = read_entry(&mut archive, WAYLINES_ENTRY)? {
        let doc = parse_xml(WAYLINES_ENTRY, &text)?;
        meta.waypoint_count = count_waypoints(doc.root_element());
    }
    Ok(())
}

/// `index` elements first; planners that omit them still emit one
/// KML `Placemark` per waypoint.
fn count_waypoints(root: roxmltree::Node<'_, '_>) -> usize {
    match xml::count_all(root, "index") {
        0 => xml::count_in(root, xml::KML_NS, "Placemark"),
        n => n,
    }
}

fn read_entry(
    archive: &mut ZipArchive<File>,
    name: &str,
) -> Result<Option<String>, ReadError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut text = String::new();
    entry.read_to_string(&mut text)?;
    Ok(Some(text))
}

fn parse_xml<'input>(
    entry: &'static str,
    text: &'input str,
) -> Result<roxmltree::Document<'input>, ReadError> {
    roxmltree::Document::parse(text).map_err(|source| ReadError::Xml { entry, source })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
