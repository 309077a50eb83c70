// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test command composition.
//!
//! The base runner comes from [`RUNNER_RULES`], evaluated top to bottom.
//! Wrappers are prepended around it (docker outermost, then bundler) and
//! the target and filter tokens appended after it.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ProjectConfig, defaults};
use crate::locator::TestMatch;

/// A built command: argv-style tokens plus a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCommand {
    tokens: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl TestCommand {
    pub fn new(tokens: Vec<String>, label: Option<String>) -> Self {
        Self { tokens, label }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// File the command runs, for display.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Tokens shell-escaped one by one and joined with single spaces.
    pub fn to_shell(&self) -> String {
        self.tokens
            .iter()
            .map(|t| shell_words::quote(t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Shell line with the environment assignments prefixed verbatim.
    pub fn shell_line(&self, env: Option<&str>) -> String {
        match env.map(str::trim).filter(|e| !e.is_empty()) {
            Some(env) => format!("{env} {}", self.to_shell()),
            None => self.to_shell(),
        }
    }
}

impl fmt::Display for TestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell())
    }
}

/// How much of the suite a command covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The whole suite.
    Suite,
    /// A single file, optionally narrowed further.
    File,
}

/// Narrows a single-file run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Runner name filter (`-n/<name>/`).
    Name(String),
    /// Line-based selection (`file.rb:<line>`), understood by the Rails runner.
    Line(usize),
}

/// Base runner selection rule.
pub struct RunnerRule {
    pub name: &'static str,
    applies: fn(&ProjectConfig, &Path) -> bool,
    command: fn(&ProjectConfig, Scope) -> Vec<String>,
}

impl RunnerRule {
    pub fn applies(&self, config: &ProjectConfig, root: &Path) -> bool {
        (self.applies)(config, root)
    }

    pub fn command(&self, config: &ProjectConfig, scope: Scope) -> Vec<String> {
        (self.command)(config, scope)
    }
}

/// Runner rules in priority order; the last one always applies.
pub static RUNNER_RULES: &[RunnerRule] = &[
    RunnerRule {
        name: "spring",
        applies: |config, _| config.use_spring,
        command: |config, _| config.spring_command.clone(),
    },
    RunnerRule {
        name: "zeus",
        applies: zeus_socket_present,
        command: |config, _| config.zeus_command.clone(),
    },
    RunnerRule {
        name: "rails",
        applies: |config, _| config.use_rails,
        command: |config, _| config.rails_command.clone(),
    },
    RunnerRule {
        name: "default",
        applies: |_, _| true,
        command: |config, scope| match scope {
            Scope::Suite => config.all_command.clone(),
            Scope::File => config.default_command.clone(),
        },
    },
];

/// Whether zeus is enabled and its server socket exists at the root.
pub fn zeus_socket_present(config: &ProjectConfig, root: &Path) -> bool {
    config.use_zeus && root.join(defaults::files::ZEUS_SOCKET).exists()
}

/// Builds commands for one project.
pub struct CommandBuilder<'a> {
    config: &'a ProjectConfig,
    root: &'a Path,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(config: &'a ProjectConfig, root: &'a Path) -> Self {
        Self { config, root }
    }

    /// First rule that applies.
    pub fn runner_rule(&self) -> &'static RunnerRule {
        RUNNER_RULES
            .iter()
            .find(|rule| rule.applies(self.config, self.root))
            .unwrap_or(&RUNNER_RULES[RUNNER_RULES.len() - 1])
    }

    /// Run the whole suite.
    pub fn verify_all(&self) -> TestCommand {
        self.build(None, None)
    }

    /// Run one test file.
    pub fn verify_file(&self, file: &Path) -> TestCommand {
        self.build(Some(file), None)
    }

    /// Run the named test in `file`.
    pub fn verify_test(&self, file: &Path, test: &TestMatch) -> TestCommand {
        self.build(Some(file), Some(&Filter::Name(test.filter_name())))
    }

    /// Run whatever the runner finds at `line` of `file`.
    pub fn verify_line(&self, file: &Path, line: usize) -> TestCommand {
        self.build(Some(file), Some(&Filter::Line(line)))
    }

    /// Compose the full command.
    ///
    /// Absent components contribute no tokens.
    pub fn build(&self, target: Option<&Path>, filter: Option<&Filter>) -> TestCommand {
        let config = self.config;
        let scope = if target.is_some() { Scope::File } else { Scope::Suite };
        let rule = self.runner_rule();
        tracing::debug!("runner: {}", rule.name);

        let mut tokens = Vec::new();
        if config.use_docker {
            tokens.extend(config.docker_command.iter().cloned());
            tokens.extend(config.docker_container.iter().cloned());
        }
        if config.use_bundler {
            tokens.extend(config.bundler_command.iter().cloned());
        }
        tokens.extend(rule.command(config, scope));

        let label = target.map(|t| t.display().to_string());
        if let Some(file) = &label {
            match filter {
                Some(Filter::Line(line)) => tokens.push(format!("{file}:{line}")),
                Some(Filter::Name(name)) => {
                    tokens.push(file.clone());
                    tokens.push(self.name_filter(name));
                }
                None => tokens.push(file.clone()),
            }
        }
        tokens.retain(|t| !t.is_empty());

        let command = TestCommand::new(tokens, label);
        tracing::debug!("built command: {}", command);
        command
    }

    /// `-n/<name>/`, passed through `TESTOPTS` under spring.
    fn name_filter(&self, name: &str) -> String {
        let flag = format!("-n/{name}/");
        if self.config.use_spring {
            format!("TESTOPTS={flag}")
        } else {
            flag
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
