#![allow(clippy::unwrap_used)]
// CLI surface smoke tests. Anything touching the backend needs a live
// profile, so these stick to parsing, help, and completions.

use assert_cmd::Command;
use predicates::prelude::*;

fn rently() -> Command {
    Command::cargo_bin("rently").unwrap()
}

#[test]
fn no_args_shows_help_and_fails() {
    rently()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_the_resources() {
    rently()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("guests")
                .and(predicate::str::contains("contracts"))
                .and(predicate::str::contains("invoices"))
                .and(predicate::str::contains("mev"))
                .and(predicate::str::contains("stats")),
        );
}

#[test]
fn version_flag_prints_name() {
    rently()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rently"));
}

#[test]
fn guests_requires_a_subcommand() {
    rently()
        .arg("guests")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn contract_create_validates_required_flags() {
    rently()
        .args(["contracts", "create", "--home", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn completions_generate_for_bash() {
    rently()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rently"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    rently()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(2);
}
