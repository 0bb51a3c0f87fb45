//! Runs the built driver against small source files.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

fn source_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("beec-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn beec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_beec"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_the_tree() {
    let path = source_file("tree.bee", "x :: 1 + 2\n");
    let output = beec(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Scope_Expr"));
    assert!(stdout.contains("Binary_Expr"));
}

#[test]
fn frames_follow_the_tree() {
    let path = source_file("frames.bee", "f :: (a: s32) { }\n");
    let output = beec(&[path.to_str().unwrap(), "--frames"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Frame 0 (main)"));
    assert!(stdout.contains("'a' -> Var 'a'"));
}

#[test]
fn quiet_reports_success_only() {
    let path = source_file("quiet.bee", "y := 2\n");
    let output = beec(&[path.to_str().unwrap(), "--quiet"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with(": ok\n"));
    assert!(!stdout.contains("Scope_Expr"));
}

#[test]
fn first_error_goes_to_stderr() {
    let path = source_file("error.bee", "x :: 1\nx :: 2\n");
    let output = beec(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("redefinition of identifier 'x'"));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_fails() {
    let output = beec(&["/nonexistent/missing.bee"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot read"));
}
