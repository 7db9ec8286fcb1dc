use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".bot-admin").join("config.json")
}

const BINARY_NAME: &str = "bot-admin";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Subscription admin dashboard"));
}

#[test]
/// set-backend should persist the origin under $HOME.
fn set_backend_writes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-backend", "--url", "https://bot.example.com/"])
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Backend set to https://bot.example.com"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("https://bot.example.com"));
}

#[test]
fn set_backend_rejects_non_http_values() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-backend", "--url", "ftp://bot.example.com"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid backend URL"));

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"backend_url": "local"}"#).unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Clearing saved configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
fn stats_without_backend_explains_how_to_configure() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("stats")
        .env("HOME", tmp.path())
        .env_remove("BACKEND_URL")
        .assert()
        .failure()
        .stderr(contains("No backend configured"));
}

#[test]
/// Empty fields are rejected before any request is made.
fn add_subscriber_with_empty_username_fails_validation() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args([
        "add-subscriber",
        "--username",
        "",
        "--email",
        "a@x.com",
    ])
    .env("HOME", tmp.path())
    .env_remove("BACKEND_URL")
    .assert()
    .failure()
    .stderr(contains("Please fill in all fields"))
    .stderr(contains("Validation").not());
}

#[test]
/// A failed fetch is reported once, without a trailing debug dump.
fn failed_stats_fetch_reports_error_once() {
    let tmp = temp_home_dir();

    let output = Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["stats", "--backend-url", "http://127.0.0.1:9"])
        .env("HOME", tmp.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Error fetching stats").count(), 1);
    assert!(!stderr.contains("Error: "));
}

#[test]
/// RUST_LOG turns on request diagnostics for one-shot commands.
fn rust_log_enables_request_diagnostics() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["stats", "--backend-url", "http://127.0.0.1:9"])
        .env("HOME", tmp.path())
        .env("RUST_LOG", "bot_admin=debug")
        .assert()
        .failure()
        .stderr(contains("GET http://127.0.0.1:9/api/admin/stats"));
}
