// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `waypush push` command.

#![cfg(unix)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use std::io::Read;
use std::process::Stdio;
use std::time::Duration;

use common::*;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use predicates::prelude::*;

#[test]
fn push_replaces_only_mission() {
    let device = Device::new();
    let old = kmz("Old", 3);
    let new = kmz("Jane", 12);
    device.add_mission(MISSION_A, &old);
    let archive = device.local("survey.kmz", &new);

    device
        .cmd()
        .arg("push")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("12 waypoints, author: Jane"))
        .stdout(predicate::str::contains(format!(
            "Only one mission found, using: {MISSION_A}"
        )))
        .stdout(predicate::str::contains("Success!"));

    assert_eq!(device.primary(MISSION_A).unwrap(), new);
    assert_eq!(device.staging(MISSION_A).unwrap(), new);

    let backups = device.backups();
    assert_eq!(backups.len(), 1);
    assert_eq!(std::fs::read(&backups[0]).unwrap(), old);
}

#[test]
fn push_no_backup() {
    let device = Device::new();
    device.add_mission(MISSION_A, &kmz("Old", 3));
    let archive = device.local("survey.kmz", &kmz("Jane", 12));

    device
        .cmd()
        .args(["push", "--no-backup"])
        .arg(&archive)
        .assert()
        .success();

    assert!(device.backups().is_empty());
}

#[test]
fn push_dry_run_changes_nothing() {
    let device = Device::new();
    let old = kmz("Old", 3);
    device.add_mission(MISSION_A, &old);
    let archive = device.local("survey.kmz", &kmz("Jane", 12));

    device
        .cmd()
        .args(["push", "--dry-run"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN] Would push survey.kmz"))
        .stdout(predicate::str::contains("No changes made to device."));

    assert_eq!(device.primary(MISSION_A).unwrap(), old);
    assert!(device.staging(MISSION_A).is_none());
    assert!(!device.backup_dir().exists());
}

#[test]
fn push_unknown_uuid_fails() {
    let device = Device::new();
    let old = kmz("Old", 3);
    device.add_mission(MISSION_A, &old);
    let archive = device.local("survey.kmz", &kmz("Jane", 12));

    device
        .cmd()
        .arg("push")
        .arg(&archive)
        .args(["--uuid", MISSION_B])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("mission not found on device"));

    assert_eq!(device.primary(MISSION_A).unwrap(), old);
    assert!(device.staging(MISSION_A).is_none());
}

#[test]
fn push_malformed_uuid_fails() {
    let device = Device::new();
    let old = kmz("Old", 3);
    device.add_mission(MISSION_A, &old);
    let archive = device.local("survey.kmz", &kmz("Jane", 12));

    device
        .cmd()
        .arg("push")
        .arg(&archive)
        .args(["--uuid", "not-a-mission"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid mission id: 'not-a-mission'"))
        .stdout(predicate::str::contains("Scanning").not());

    assert_eq!(device.primary(MISSION_A).unwrap(), old);
}

#[test]
fn push_explicit_uuid_skips_picker() {
    let device = Device::new();
    device.add_mission(MISSION_A, &kmz("Ann", 3));
    device.add_mission(MISSION_B, &kmz("Bob", 4));
    let new = kmz("Jane", 12);
    let archive = device.local("survey.kmz", &new);

    device
        .cmd()
        .arg("push")
        .arg(&archive)
        .args(["--uuid", MISSION_B, "--no-backup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter number").not());

    assert_eq!(device.primary(MISSION_B).unwrap(), new);
    assert_ne!(device.primary(MISSION_A).unwrap(), new);
}

#[test]
fn push_picker_choice() {
    let device = Device::new();
    device.add_mission(MISSION_A, &kmz("Ann", 3));
    device.add_mission(MISSION_B, &kmz("Bob", 4));
    let new = kmz("Jane", 12);
    let archive = device.local("survey.kmz", &new);

    device
        .cmd()
        .arg("push")
        .arg(&archive)
        .write_stdin("9\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter 1-2"))
        .stdout(predicate::str::contains(format!("Target: {MISSION_B}")));

    assert_eq!(device.primary(MISSION_B).unwrap(), new);
}

#[test]
fn push_picker_quit_exits_cleanly() {
    let device = Device::new();
    let old = kmz("Ann", 3);
    device.add_mission(MISSION_A, &old);
    device.add_mission(MISSION_B, &kmz("Bob", 4));
    let archive = device.local("survey.kmz", &kmz("Jane", 12));

    device
        .cmd()
        .arg("push")
        .arg(&archive)
        .write_stdin("q\n")
        .assert()
        .success();

    assert_eq!(device.primary(MISSION_A).unwrap(), old);
    assert!(device.backups().is_empty());
}

#[test]
fn push_invalid_archive_fails_before_device() {
    let device = Device::new();
    let old = kmz("Old", 3);
    device.add_mission(MISSION_A, &old);
    let archive = device.local("broken.kmz", b"this is not a zip");

    device
        .cmd()
        .arg("push")
        .arg(&archive)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a valid zip/KMZ file"))
        .stdout(predicate::str::contains("Scanning").not());

    assert_eq!(device.primary(MISSION_A).unwrap(), old);
}

#[test]
fn push_missing_archive_fails() {
    let device = Device::new();
    device.add_mission(MISSION_A, &kmz("Old", 3));

    device
        .cmd()
        .args(["push", "does-not-exist.kmz"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn push_empty_device_fails() {
    let device = Device::new();
    let archive = device.local("survey.kmz", &kmz("Jane", 12));

    device
        .cmd()
        .arg("push")
        .arg(&archive)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no missions found on device"));
}

#[test]
fn push_with_checksum() {
    let device = Device::new();
    device.add_mission(MISSION_A, &kmz("Old", 3));
    let archive = device.local("survey.kmz", &kmz("Jane", 12));

    device
        .cmd()
        .args(["push", "--checksum", "--no-backup"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Primary:  sha256 OK"))
        .stdout(predicate::str::contains("kmzTemp:  sha256 OK"));
}

#[test]
fn push_ctrl_c_at_picker_aborts_with_130() {
    let device = Device::new();
    let old = kmz("Ann", 3);
    device.add_mission(MISSION_A, &old);
    device.add_mission(MISSION_B, &kmz("Bob", 4));
    let archive = device.local("survey.kmz", &kmz("Jane", 12));
    let scratch = device.path().join("tmp");
    std::fs::create_dir_all(&scratch).unwrap();

    let mut child = device
        .process()
        .arg("push")
        .arg(&archive)
        .env("TMPDIR", &scratch)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Held open so the prompt blocks on a read.
    let _stdin = child.stdin.take();
    let mut stdout = child.stdout.take().unwrap();
    read_until_contains(&mut stdout, "Enter number");
    std::thread::sleep(Duration::from_millis(200));

    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).unwrap();

    let status = wait_with_timeout(&mut child, Duration::from_secs(5))
        .expect("waypush should exit after Ctrl-C");
    assert_eq!(status.code(), Some(130));

    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();
    assert!(stderr.contains("Aborted."), "stderr: {stderr}");

    assert_eq!(device.primary(MISSION_A).unwrap(), old);
    assert!(device.backups().is_empty());
    assert_eq!(std::fs::read_dir(&scratch).unwrap().count(), 0);
}
