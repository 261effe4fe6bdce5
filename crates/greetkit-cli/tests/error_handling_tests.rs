//! Tests for error handling, exit codes and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn greetkit(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("greetkit").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_negative_factorial_is_user_error() {
    let home = TempDir::new().unwrap();
    greetkit(&home)
        .args(["factorial", "-1"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Factorial is not defined for negative numbers",
        ))
        .stderr(predicate::str::contains("non-negative integer"));
}

#[test]
fn test_factorial_overflow_is_user_error() {
    let home = TempDir::new().unwrap();
    greetkit(&home)
        .args(["factorial", "35"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("overflows"));
}

#[test]
fn test_missing_config_file_exits_four() {
    let home = TempDir::new().unwrap();
    greetkit(&home)
        .args(["--config", "does-not-exist.toml", "demo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    let home = TempDir::new().unwrap();
    greetkit(&home)
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_non_numeric_operand_is_usage_error() {
    let home = TempDir::new().unwrap();
    greetkit(&home)
        .args(["add", "two", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_verbose_shows_cause_chain() {
    let home = TempDir::new().unwrap();
    greetkit(&home)
        .args(["-v", "--config", "does-not-exist.toml", "demo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Use -v").not());
}
