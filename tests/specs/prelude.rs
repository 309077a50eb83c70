//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for building throwaway Ruby projects and running
//! the rubytest binary inside them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the rubytest binary
pub fn rubytest_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rubytest"));
    cmd.env_remove("RUBYTEST_CONFIG")
        .env_remove("RUBYTEST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A temporary project rooted at a directory containing a Gemfile.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Project with only a Gemfile.
    pub fn empty() -> Self {
        let project = Self {
            dir: TempDir::new().unwrap(),
        };
        project.file("Gemfile", "source \"https://rubygems.org\"\n");
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `.rubytest.toml`.
    pub fn config(&self, content: &str) {
        self.file(".rubytest.toml", content);
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// rubytest command running in the project root.
    pub fn cmd(&self) -> Command {
        let mut cmd = rubytest_cmd();
        cmd.current_dir(self.path());
        cmd
    }

    /// rubytest command running in a subdirectory.
    pub fn cmd_in(&self, rel: &str) -> Command {
        let mut cmd = rubytest_cmd();
        cmd.current_dir(self.path().join(rel));
        cmd
    }
}
