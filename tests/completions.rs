#![allow(deprecated)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_dynamic_completion_with_complete_env() {
    // When COMPLETE env is set, the program should handle completion and exit
    // successfully instead of parsing arguments
    Command::cargo_bin("quickmark")
        .unwrap()
        .env("COMPLETE", "bash")
        .assert()
        .success();
}

#[test]
fn test_completion_bash() {
    Command::cargo_bin("quickmark")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPLETE=bash"))
        .stdout(predicate::str::contains("source"));
}

#[test]
fn test_completion_zsh() {
    Command::cargo_bin("quickmark")
        .unwrap()
        .args(["completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPLETE=zsh"));
}

#[test]
fn test_completion_fish() {
    Command::cargo_bin("quickmark")
        .unwrap()
        .args(["completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPLETE=fish"))
        .stdout(predicate::str::contains("psub"));
}

#[test]
fn test_completion_invalid_shell() {
    Command::cargo_bin("quickmark")
        .unwrap()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid shell"));
}
