// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for the CLI specs.
//!
//! [`Device`] is a temp directory standing in for the controller's
//! storage, plus a fake `adb` script that maps `/sdcard` into it. The
//! script understands `shell`, `pull` and `push`, which is everything
//! waypush uses.

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::io::{Cursor, Read, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Child, ExitStatus};
use std::time::{Duration, Instant};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const MISSION_A: &str = "11111111-1111-1111-1111-111111111111";
pub const MISSION_B: &str = "22222222-2222-2222-2222-222222222222";

const WAYPOINT_ROOT: &str = "sdcard/Android/data/dji.go.v5/files/waypoint";

const FAKE_ADB: &str = r#"#!/bin/sh
DEVICE="__DEVICE__"
if [ "$1" = "-s" ]; then
    shift 2
fi
cmd="$1"
shift
case "$cmd" in
    shell)
        sh -c "$(printf '%s' "$1" | sed "s#/sdcard#$DEVICE/sdcard#g")"
        ;;
    pull)
        cp "$DEVICE$1" "$2"
        ;;
    push)
        mkdir -p "$(dirname "$DEVICE$2")" && cp "$1" "$DEVICE$2"
        ;;
    *)
        echo "unsupported: $cmd" >&2
        exit 1
        ;;
esac
"#;

/// A fake controller backed by a temp directory.
pub struct Device {
    temp: TempDir,
}

impl Device {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let device = temp.path().join("device");
        std::fs::create_dir_all(&device).unwrap();

        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let adb = bin.join("adb");
        let script = FAKE_ADB.replace("__DEVICE__", &device.display().to_string());
        std::fs::write(&adb, script).unwrap();
        std::fs::set_permissions(&adb, std::fs::Permissions::from_mode(0o755)).unwrap();

        Device { temp }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn adb(&self) -> PathBuf {
        self.path().join("bin").join("adb")
    }

    /// Host directory mirroring the device waypoint root.
    pub fn root(&self) -> PathBuf {
        self.path().join("device").join(WAYPOINT_ROOT)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.path().join("backups")
    }

    /// Creates `<root>/<id>/<id>.kmz` holding `archive`.
    pub fn add_mission(&self, id: &str, archive: &[u8]) {
        let dir = self.root().join(id);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{id}.kmz")), archive).unwrap();
    }

    /// Creates an arbitrary folder under the waypoint root.
    pub fn add_folder(&self, name: &str) {
        std::fs::create_dir_all(self.root().join(name)).unwrap();
    }

    pub fn primary(&self, id: &str) -> Option<Vec<u8>> {
        std::fs::read(self.root().join(id).join(format!("{id}.kmz"))).ok()
    }

    pub fn staging(&self, id: &str) -> Option<Vec<u8>> {
        std::fs::read(self.root().join("kmzTemp").join(format!("{id}.kmz"))).ok()
    }

    pub fn backups(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(self.backup_dir()) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Writes a local file next to the device and returns its path.
    pub fn local(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    /// `waypush` wired to this device with an isolated environment.
    pub fn cmd(&self) -> Command {
        Command::from_std(self.process())
    }

    /// [`Device::cmd`] as a plain process, for tests that signal it.
    pub fn process(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_waypush"));
        cmd.env("WAYPUSH_ADB", self.adb())
            .env("WAYPUSH_BACKUP_DIR", self.backup_dir())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("NO_COLOR", "1")
            .env_remove("WAYPUSH_CONFIG")
            .env_remove("WAYPUSH_SERIAL")
            .env_remove("ANDROID_SERIAL")
            .env_remove("RUST_LOG")
            .env_remove("COLOR");
        cmd
    }
}

/// Waits for `child` to exit, killing it after `timeout`.
pub fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        if start.elapsed() > timeout {
            let _ = child.kill();
            let _ = child.wait();
            return None;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
}

/// Reads `reader` until `needle` has appeared in it.
pub fn read_until_contains(reader: &mut impl Read, needle: &str) -> String {
    let mut seen = Vec::new();
    let mut buf = [0u8; 1024];
    while !String::from_utf8_lossy(&seen).contains(needle) {
        let n = reader.read(&mut buf).unwrap();
        assert!(n > 0, "output ended before {needle:?}: {}", String::from_utf8_lossy(&seen));
        seen.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&seen).into_owned()
}

/// A well-formed mission archive with `waypoints` indexed placemarks,
/// created 2023-11-14 22:13 UTC.
pub fn kmz(author: &str, waypoints: usize) -> Vec<u8> {
    let template = format!(
        r#"<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:wpml="http://www.dji.com/wpmz/1.0.6"><Document><wpml:author>{author}</wpml:author><wpml:createTime>1700000000000</wpml:createTime></Document></kml>"#
    );
    let placemarks: String = (0..waypoints)
        .map(|i| format!("<Placemark><wpml:index>{i}</wpml:index></Placemark>"))
        .collect();
    let waylines = format!(
        r#"<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:wpml="http://www.dji.com/wpmz/1.0.6"><Document><Folder>{placemarks}</Folder></Document></kml>"#
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in [("wpmz/template.kml", template), ("wpmz/waylines.wpml", waylines)] {
        zip.start_file(name, SimpleFileOptions::default()).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}
