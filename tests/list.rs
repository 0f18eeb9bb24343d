#![allow(deprecated)]

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_list_empty_store() {
    let home = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("quickmark")
        .unwrap()
        .arg("list")
        .env("HOME", home.path())
        .assert()
        .success()
        .stdout("No bookmarks found.\n");

    home.close().unwrap();
}

#[test]
fn test_list_shows_sorted_entries() {
    let home = assert_fs::TempDir::new().unwrap();
    let target = home.child("projects");
    target.create_dir_all().unwrap();

    // Insert out of order; listing must come back sorted by name
    for name in ["zebra", "alpha"] {
        Command::cargo_bin("quickmark")
            .unwrap()
            .args(["add", name])
            .arg(target.path())
            .env("HOME", home.path())
            .assert()
            .success();
    }

    let output = Command::cargo_bin("quickmark")
        .unwrap()
        .args(["--color=never", "list"])
        .env("HOME", home.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("Bookmarks:\n"));
    let alpha_pos = stdout.find("alpha").unwrap();
    let zebra_pos = stdout.find("zebra").unwrap();
    assert!(alpha_pos < zebra_pos, "entries should be sorted by name");

    home.close().unwrap();
}

#[test]
fn test_list_aligns_names() {
    let home = assert_fs::TempDir::new().unwrap();
    let target = home.child("projects");
    target.create_dir_all().unwrap();

    for name in ["a", "longer-name"] {
        Command::cargo_bin("quickmark")
            .unwrap()
            .args(["add", name])
            .arg(target.path())
            .env("HOME", home.path())
            .assert()
            .success();
    }

    let output = Command::cargo_bin("quickmark")
        .unwrap()
        .args(["--color=never", "list"])
        .env("HOME", home.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let arrow_columns: Vec<usize> = stdout
        .lines()
        .filter(|line| line.contains(" -> "))
        .map(|line| line.find(" -> ").unwrap())
        .collect();

    assert_eq!(arrow_columns.len(), 2);
    assert_eq!(
        arrow_columns[0], arrow_columns[1],
        "arrows should line up across rows"
    );

    home.close().unwrap();
}

#[test]
fn test_list_with_color_never_has_no_ansi() {
    let home = assert_fs::TempDir::new().unwrap();
    let target = home.child("projects");
    target.create_dir_all().unwrap();

    Command::cargo_bin("quickmark")
        .unwrap()
        .args(["add", "proj"])
        .arg(target.path())
        .env("HOME", home.path())
        .assert()
        .success();

    Command::cargo_bin("quickmark")
        .unwrap()
        .args(["--color=never", "list"])
        .env("HOME", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b").not());

    home.close().unwrap();
}

#[test]
fn test_list_with_color_always_emits_ansi() {
    let home = assert_fs::TempDir::new().unwrap();
    let target = home.child("projects");
    target.create_dir_all().unwrap();

    Command::cargo_bin("quickmark")
        .unwrap()
        .args(["add", "proj"])
        .arg(target.path())
        .env("HOME", home.path())
        .assert()
        .success();

    Command::cargo_bin("quickmark")
        .unwrap()
        .args(["--color=always", "list"])
        .env("HOME", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));

    home.close().unwrap();
}
