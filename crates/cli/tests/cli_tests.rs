use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn perfcons(db_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("perfcons").unwrap();
    cmd.env("DATABASE_URL", db_dir.path().join("cli.db")).env_remove("API_TOKEN");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("perfcons").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("per-conversation facts and budgets"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("perfcons").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_serve_requires_api_token() {
    let dir = TempDir::new().unwrap();
    perfcons(&dir)
        .args(["serve", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API_TOKEN"));
}

#[test]
fn test_list_empty_table() {
    let dir = TempDir::new().unwrap();
    perfcons(&dir).args(["list", "facts"]).assert().success().stdout(predicate::str::contains("[]"));
}

#[test]
fn test_get_missing_record() {
    let dir = TempDir::new().unwrap();
    perfcons(&dir)
        .args(["get", "budgets", "conv-404"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget not found"));
}

#[test]
fn test_unknown_resource_kind_rejected() {
    let dir = TempDir::new().unwrap();
    perfcons(&dir).args(["list", "notes"]).assert().failure();
}

#[test]
fn test_unsupported_database_scheme_rejected() {
    let mut cmd = Command::cargo_bin("perfcons").unwrap();
    cmd.env("DATABASE_URL", "mysql://user:pw@db/perfcons")
        .args(["list", "facts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported database url scheme"));
}
