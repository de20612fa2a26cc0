//! Runs the binary against a shell-script stand-in for adb.
//!
//! Everything lives in one test so no other thread forks while a script
//! is open for writing (which would make exec fail with ETXTBSY).

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn write_fake_adb(dir: &Path, name: &str, devices: &str) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
case "$1" in
  version)
    echo "Android Debug Bridge version 1.0.41"
    exit 0 ;;
  devices)
    printf '{devices}'
    exit 0 ;;
  -s)
    if [ "$3" = "shell" ] && [ "$4" = "getprop" ] && [ "$5" = "ro.product.model" ]; then
      echo "Model of $2"
      exit 0
    fi ;;
esac
echo "unsupported: $*" >&2
exit 1
"#
    );

    let path = dir.join(name);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn run_with(adb: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_adb-verify"))
        .env("ADB_VERIFY_ADB", adb)
        .env_remove("ADB_VERIFY_PROPERTY")
        .output()
        .expect("failed to run adb-verify")
}

#[test]
fn reports_devices_or_guidance() {
    let dir = tempfile::tempdir().unwrap();

    let with_devices = write_fake_adb(
        dir.path(),
        "adb-two",
        r"List of devices attached\nemulator-5554\tdevice\nR5CT\tunauthorized\nHT7A1B\tdevice\n\n",
    );
    let empty = write_fake_adb(dir.path(), "adb-none", r"List of devices attached\n\n");

    let output = run_with(&with_devices);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("Found 2 connected device(s):"));
    assert!(stdout.contains("Device: emulator-5554\n  ro.product.model: Model of emulator-5554"));
    assert!(stdout.contains("Device: HT7A1B\n  ro.product.model: Model of HT7A1B"));
    assert!(stdout.contains("Skipping R5CT (state: unauthorized)"));

    let output = run_with(&empty);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.contains("No connected devices found."));
    assert!(stdout.contains("Developer options are enabled"));
}
