// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! `ProjectConfig` delegates to these via its `default_*` functions.

/// Default project layout.
pub mod layout {
    /// Directory holding the test tree ("test").
    pub const TEST_DIRECTORY: &str = "test";

    /// Directories searched for the file under test, after ".".
    pub const SOURCE_DIRECTORIES: &[&str] = &["app", "lib"];

    /// Files whose presence marks the project root.
    pub const ROOT_MARKERS: &[&str] = &["Gemfile", "Rakefile"];
}

/// Default runner command lines.
pub mod commands {
    /// Plain interpreter invocation for a single file.
    pub const DEFAULT: &[&str] = &["ruby", "-Ilib:test:spec"];

    /// Default-runner invocation for the whole suite.
    pub const ALL: &[&str] = &["rake", "test"];

    pub const BUNDLER: &[&str] = &["bundle", "exec"];

    pub const SPRING: &[&str] = &["spring", "rake", "test"];

    pub const ZEUS: &[&str] = &["zeus", "test"];

    pub const RAILS: &[&str] = &["bin/rails", "test"];

    pub const DOCKER: &[&str] = &["docker-compose", "exec"];
}

/// Default file names relative to the project root.
pub mod files {
    /// Config file looked up from the working directory upward.
    pub const CONFIG: &str = ".rubytest.toml";

    /// Socket left behind by a running zeus server.
    pub const ZEUS_SOCKET: &str = ".zeus.sock";

    /// Persisted last command for `rerun`.
    pub const HISTORY: &str = ".rubytest/last_run.json";
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
