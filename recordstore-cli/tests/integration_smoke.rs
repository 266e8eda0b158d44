//! Smoke tests to verify command wiring without a database.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("recordstore").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("album catalog"));
}

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("recordstore").unwrap();
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Artist name to match"));
}

#[test]
fn test_get_help() {
    let mut cmd = Command::cargo_bin("recordstore").unwrap();
    cmd.arg("get").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Album id"));
}

#[test]
fn test_add_requires_price() {
    let mut cmd = Command::cargo_bin("recordstore").unwrap();
    cmd.arg("add").arg("Blue Train").arg("John Coltrane");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("PRICE"));
}

#[test]
fn test_missing_credentials_is_fatal() {
    let mut cmd = Command::cargo_bin("recordstore").unwrap();
    cmd.arg("get")
        .arg("2")
        .env_remove("DBUSER")
        .env_remove("DBPASS")
        // Keep a stray .env in the working tree from supplying credentials.
        .current_dir(std::env::temp_dir());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DBUSER not set"));
}
