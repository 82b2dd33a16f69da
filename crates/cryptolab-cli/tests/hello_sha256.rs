//! End-to-end tests for the `hello-sha256` binary.

use std::process::Command;

const EXPECTED_LINE: &str =
    "SHA-256 (Rust): dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f\n";

fn hello_sha256() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hello-sha256"))
}

#[test]
fn prints_single_digest_line_and_exits_zero() {
    let output = hello_sha256().output().expect("binary should run");
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_LINE);
}

#[test]
fn stdout_hex_is_lowercase_and_64_chars() {
    let output = hello_sha256().output().expect("binary should run");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let (label, hex) = stdout.trim_end_matches('\n').split_once(": ").unwrap();
    assert_eq!(label, "SHA-256 (Rust)");
    assert_eq!(hex.len(), 64);
    assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

#[test]
fn verbose_logging_leaves_stdout_untouched() {
    let output = hello_sha256().arg("-vv").output().expect("binary should run");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_LINE);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("computed digest"), "stderr: {stderr}");
}

#[test]
fn rejects_unexpected_arguments() {
    let output = hello_sha256().arg("--algorithm").output().expect("binary should run");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
