#![cfg(feature = "cli")]
//! End-to-end check of the demonstration binary.

use std::process::Command;

#[test]
fn test_prints_both_identities() {
    let output = Command::new(env!("CARGO_BIN_EXE_monoid-traits"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0 0\n");
}

#[test]
fn test_arguments_are_ignored() {
    let output = Command::new(env!("CARGO_BIN_EXE_monoid-traits"))
        .args(["--verbose", "extra"])
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    // Diagnostics go to stderr only.
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0 0\n");
}
