//! Behavioral specs for the verify actions (file, nearest test, all).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const USER_TEST: &str = r#"require "test_helper"

class UserTest < ActiveSupport::TestCase
  test "validates email" do
    assert User.new.invalid?
  end

  def test_full_name
    assert_equal "A B", User.new(first: "A", last: "B").full_name
  end
end
"#;

// =============================================================================
// VERIFY FILE
// =============================================================================

/// > A test file runs with the default command
#[test]
fn file_dry_run_prints_default_command() {
    let temp = Project::empty();
    temp.file("test/foo_test.rb", "");

    temp.cmd()
        .args(["file", "test/foo_test.rb", "--dry-run"])
        .assert()
        .success()
        .stdout("ruby -Ilib:test:spec test/foo_test.rb\n");
}

/// > Bundler wraps the runner
#[test]
fn file_with_bundler() {
    let temp = Project::empty();
    temp.config("use_bundler = true\n");

    temp.cmd()
        .args(["file", "test/foo_test.rb", "--dry-run"])
        .assert()
        .success()
        .stdout("bundle exec ruby -Ilib:test:spec test/foo_test.rb\n");
}

/// > Docker wraps everything, with the environment prefix in front
#[test]
fn file_with_docker_and_env() {
    let temp = Project::empty();
    temp.config(
        r#"
use_docker = true
docker_container = "web"
default_env = "RAILS_ENV=test"
"#,
    );

    temp.cmd()
        .args(["file", "test/foo_test.rb", "--dry-run"])
        .assert()
        .success()
        .stdout("RAILS_ENV=test docker-compose exec web ruby -Ilib:test:spec test/foo_test.rb\n");
}

/// > A source file runs its mapped test file
#[test]
fn file_maps_source_to_test() {
    let temp = Project::empty();
    temp.file("app/models/user.rb", "class User; end\n");
    temp.file("test/models/user_test.rb", USER_TEST);

    temp.cmd_in("app/models")
        .args(["file", "user.rb", "--dry-run"])
        .assert()
        .success()
        .stdout(predicates::str::ends_with("test/models/user_test.rb\n"));
}

/// > A source file without a test file is a user-reported error
#[test]
fn file_without_test_fails() {
    let temp = Project::empty();
    temp.file("lib/foo.rb", "");

    temp.cmd()
        .args(["file", "lib/foo.rb", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("has no test file"));
}

/// > Outside a project nothing runs
#[test]
fn outside_project_fails() {
    let dir = tempfile::tempdir().unwrap();
    rubytest_cmd()
        .current_dir(dir.path())
        .args(["all", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("not inside a recognized Ruby project"));
}

/// > Invalid config is reported with its path
#[test]
fn invalid_config_fails() {
    let temp = Project::empty();
    temp.config("use_rspec = true\n");

    temp.cmd()
        .args(["all", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains(".rubytest.toml"));
}

// =============================================================================
// VERIFY NEAREST
// =============================================================================

/// > The nearest declaration above the cursor line becomes a -n filter
#[test]
fn at_line_uses_nearest_test() {
    let temp = Project::empty();
    temp.file("test/models/user_test.rb", USER_TEST);

    temp.cmd()
        .args(["at", "test/models/user_test.rb", "--line", "5", "--dry-run"])
        .assert()
        .success()
        .stdout("ruby -Ilib:test:spec test/models/user_test.rb -n/validates_email/\n");

    temp.cmd()
        .args(["at", "test/models/user_test.rb", "--line", "9", "--dry-run"])
        .assert()
        .success()
        .stdout(predicates::str::ends_with("-n/full_name/\n"));
}

/// > Spring receives the filter through TESTOPTS
#[test]
fn at_line_under_spring() {
    let temp = Project::empty();
    temp.config("use_spring = true\n");
    temp.file("test/models/user_test.rb", USER_TEST);

    temp.cmd()
        .args(["at", "test/models/user_test.rb", "--line", "9", "--dry-run"])
        .assert()
        .success()
        .stdout(predicates::str::contains("spring rake test test/models/user_test.rb"))
        .stdout(predicates::str::contains("TESTOPTS=-n/full_name/"));
}

/// > The Rails runner selects by line, without -n
#[test]
fn at_line_under_rails() {
    let temp = Project::empty();
    temp.config("use_rails = true\n");
    temp.file("test/models/user_test.rb", USER_TEST);

    temp.cmd()
        .args(["at", "test/models/user_test.rb", "--line", "9", "--dry-run"])
        .assert()
        .success()
        .stdout("bin/rails test test/models/user_test.rb:9\n")
        .stdout(predicates::str::contains("-n").not());
}

/// > Buffer text may come from stdin
#[test]
fn at_reads_buffer_from_stdin() {
    let temp = Project::empty();

    assert_cmd::Command::from_std(temp.cmd())
        .args(["at", "test/unsaved_test.rb", "--line", "2", "--stdin", "--dry-run"])
        .write_stdin("it \"works from stdin\" do\n  assert true\nend\n")
        .assert()
        .success()
        .stdout("ruby -Ilib:test:spec test/unsaved_test.rb '-n/works from stdin/'\n");
}

/// > No declaration near the cursor aborts without running anything
#[test]
fn at_without_declaration_fails() {
    let temp = Project::empty();
    temp.file("test/empty_test.rb", "class EmptyTest\nend\n");

    temp.cmd()
        .args(["at", "test/empty_test.rb", "--line", "1"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("no test found"));
    assert!(!temp.path().join(".rubytest/last_run.json").exists());
}

// =============================================================================
// VERIFY ALL / EXECUTION
// =============================================================================

/// > Verify all uses the suite command
#[test]
fn all_dry_run() {
    let temp = Project::empty();

    temp.cmd()
        .args(["all", "--dry-run"])
        .assert()
        .success()
        .stdout("rake test\n");
}

/// > The child's exit code becomes rubytest's exit code
#[test]
fn all_propagates_exit_code() {
    let temp = Project::empty();
    temp.config("all_command = [\"sh\", \"-c\", \"exit 3\"]\n");

    temp.cmd()
        .arg("all")
        .assert()
        .code(3)
        .stderr(predicates::str::contains("Running:"))
        .stderr(predicates::str::contains("FAIL (exit 3)"));
}

/// > Commands run in the project root with output streamed through
#[test]
fn file_runs_in_project_root() {
    let temp = Project::empty();
    temp.config("default_command = [\"cat\"]\n");
    temp.file("test/foo_test.rb", "# contents of foo_test\n");

    temp.cmd_in("test")
        .args(["file", "foo_test.rb"])
        .assert()
        .success()
        .stdout(predicates::str::contains("# contents of foo_test"))
        .stderr(predicates::str::contains("PASS"));
}
