//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_vctui"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version '{}', but got: {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}

#[test]
fn binary_rejects_missing_file_before_touching_the_terminal() {
    let output = Command::new(env!("CARGO_BIN_EXE_vctui"))
        .arg("/definitely/not/here.txt")
        .env("VCTUI_CONFIG", std::env::temp_dir().join("vctui-no-such-config.toml"))
        .env("XDG_STATE_HOME", std::env::temp_dir())
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("here.txt"), "unexpected stderr: {stderr}");
}
