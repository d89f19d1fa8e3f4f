use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("meulog").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: meulog <COMMAND>"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("Options:"))
        .stdout(predicate::str::contains("--help"))
        .stdout(predicate::str::contains("--version"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("meulog").unwrap();
    cmd.arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: meulog serve"))
        .stdout(predicate::str::contains("--port <PORT>"))
        .stdout(predicate::str::contains("--data <DATA>"))
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_cli_chat_help() {
    let mut cmd = Command::cargo_bin("meulog").unwrap();
    cmd.arg("chat")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: meulog chat"))
        .stdout(predicate::str::contains("--data <DATA>"));
}

#[test]
fn test_cli_no_command() {
    // Running without a command should show help/usage
    let mut cmd = Command::cargo_bin("meulog").unwrap();
    cmd.assert()
        .failure() // clap exits with non-zero status when no command is given
        .stderr(predicate::str::contains("Usage: meulog <COMMAND>"));
}

#[test]
fn test_serve_with_missing_data_file_fails_at_startup() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("no_such_data.csv");

    let mut cmd = Command::cargo_bin("meulog").unwrap();
    cmd.arg("serve")
        .arg("--data")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load logistics dataset"));
}
