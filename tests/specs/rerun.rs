//! Behavioral specs for rerunning the last command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Rerun with no previous command is an error
#[test]
fn rerun_without_history_fails() {
    let temp = Project::empty();

    temp.cmd()
        .arg("rerun")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("no previous command to rerun"));
}

/// > Rerun replays the last command, even across invocations
#[test]
fn rerun_replays_last_command() {
    let temp = Project::empty();
    temp.config("use_bundler = true\n");

    temp.cmd()
        .args(["all", "--dry-run"])
        .assert()
        .success();
    temp.cmd()
        .args(["file", "test/b_test.rb", "--dry-run"])
        .assert()
        .success();

    temp.cmd()
        .args(["rerun", "--dry-run"])
        .assert()
        .success()
        .stdout("bundle exec ruby -Ilib:test:spec test/b_test.rb\n");
}

/// > The last command is stored under .rubytest/
#[test]
fn history_is_persisted_as_json() {
    let temp = Project::empty();

    temp.cmd()
        .args(["file", "test/a_test.rb", "--dry-run"])
        .assert()
        .success();

    let content = std::fs::read_to_string(temp.path().join(".rubytest/last_run.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let command = &value["last"]["command"];
    assert_eq!(command["label"], "test/a_test.rb");
    assert_eq!(command["tokens"][2], "test/a_test.rb");
    assert!(value["last"]["recorded"].is_string());
}

/// > Rerun actually executes the stored command
#[test]
fn rerun_executes() {
    let temp = Project::empty();
    temp.config("all_command = [\"sh\", \"-c\", \"echo ran-suite\"]\n");

    temp.cmd()
        .arg("all")
        .assert()
        .success()
        .stdout(predicates::str::contains("ran-suite"));

    temp.cmd()
        .arg("rerun")
        .assert()
        .success()
        .stdout(predicates::str::contains("ran-suite"));
}
