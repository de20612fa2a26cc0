use std::process::Command;

#[test]
fn exits_one_when_adb_is_missing() {
    let output = Command::new(env!("CARGO_BIN_EXE_adb-verify"))
        .env("ADB_VERIFY_ADB", "/nonexistent/adb-verify-test/adb")
        .output()
        .expect("failed to run adb-verify");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("platform-tools"), "stdout: {}", stdout);
    assert!(
        stderr.contains("device bridge tool not found"),
        "stderr: {}",
        stderr
    );
}
