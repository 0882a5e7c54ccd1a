//! Binary-level smoke tests for the non-interactive commands.

use assert_cmd::Command;
use predicates::prelude::*;

fn stackgen() -> Command {
    let mut cmd = Command::cargo_bin("stackgen").expect("binary builds");
    cmd.env("STACKGEN_NO_UPDATE_CHECK", "1");
    cmd
}

#[test]
fn support_lists_every_axis_value() {
    stackgen()
        .arg("support")
        .assert()
        .success()
        .stdout(predicate::str::contains("JavaScript"))
        .stdout(predicate::str::contains("TypeScript"))
        .stdout(predicate::str::contains("FastAPI"))
        .stdout(predicate::str::contains("Fiber"))
        .stdout(predicate::str::contains("PostgreSQL"))
        .stdout(predicate::str::contains("MongoDB"))
        .stdout(predicate::str::contains("JWT"))
        .stdout(predicate::str::contains("OAuth"))
        .stdout(predicate::str::contains("216"));
}

#[test]
fn help_shows_subcommands() {
    stackgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("support"));
}

#[test]
fn init_rejects_unknown_provider() {
    stackgen()
        .args(["init", "--provider", "mistral"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown provider"));
}
