// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User actions over one project.
//!
//! A [`Session`] owns the config, the project root and the run history.
//! Each verify action builds a command, records it, and hands it back for
//! execution.

use std::path::{Path, PathBuf};

use crate::command::{CommandBuilder, TestCommand};
use crate::config::{self, ProjectConfig, defaults};
use crate::discovery;
use crate::error::{Error, Result};
use crate::history::RunHistory;
use crate::locator::{self, TestLocator};
use crate::mapping;

pub struct Session {
    root: PathBuf,
    config: ProjectConfig,
    locator: TestLocator,
    history: RunHistory,
    /// Where the history is persisted; `None` keeps it in memory.
    history_path: Option<PathBuf>,
}

impl Session {
    /// In-memory session for an already known root.
    pub fn new(root: &Path, config: ProjectConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            locator: TestLocator::default(),
            history: RunHistory::new(),
            history_path: None,
        }
    }

    /// Discover config and root from `start_dir` and load the persisted
    /// history.
    ///
    /// An explicit `config_path` must exist. Otherwise `.rubytest.toml` is
    /// looked up from `start_dir` up to the nearest default root marker, and
    /// defaults apply when absent. The final root uses the config's markers.
    pub fn open(start_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => config::load(path)?,
            None => {
                let boundary =
                    discovery::find_project_root(&ProjectConfig::default_root_markers(), start_dir)?;
                match discovery::find_config(start_dir, &boundary) {
                    Some(path) => config::load(&path)?,
                    None => {
                        tracing::debug!("no config file, using defaults");
                        ProjectConfig::default()
                    }
                }
            }
        };

        let root = discovery::find_project_root(&config.root_markers, start_dir)?;
        let history_path = root.join(defaults::files::HISTORY);
        let history = RunHistory::load(&history_path)?;

        Ok(Self {
            root,
            config,
            locator: TestLocator::default(),
            history,
            history_path: Some(history_path),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Replace the default matchers.
    pub fn with_locator(mut self, locator: TestLocator) -> Self {
        self.locator = locator;
        self
    }

    fn builder(&self) -> CommandBuilder<'_> {
        CommandBuilder::new(&self.config, &self.root)
    }

    /// Run a test file, or the test file of a source file.
    pub fn verify_file(&mut self, file: &Path) -> Result<TestCommand> {
        let file = mapping::project_relative(file, &self.root);
        let test = if mapping::is_test_file(&file) {
            file
        } else {
            let test = mapping::test_file_for(&file, &self.config);
            if !self.root.join(&test).is_file() {
                return Err(Error::TestFileNotFound {
                    source_file: file,
                    test,
                });
            }
            test
        };

        let command = self.builder().verify_file(&test);
        self.record(command)
    }

    /// Run the test nearest to `cursor` in `text`, the contents of `file`.
    ///
    /// The Rails runner selects by line, so the locator is skipped there.
    pub fn verify_nearest(&mut self, file: &Path, text: &str, cursor: usize) -> Result<TestCommand> {
        let file = mapping::project_relative(file, &self.root);
        let line = locator::line_number(text, cursor);

        let command = if self.config.use_rails {
            self.builder().verify_line(&file, line)
        } else {
            let Some(test) = self.locator.nearest_test(text, cursor) else {
                return Err(Error::NoTestFound { file, line });
            };
            tracing::debug!("nearest test: {} {:?}", test.kind.as_str(), test.name);
            self.builder().verify_test(&file, &test)
        };
        self.record(command)
    }

    /// Run the whole suite.
    pub fn verify_all(&mut self) -> Result<TestCommand> {
        let command = self.builder().verify_all();
        self.record(command)
    }

    /// The last recorded command.
    pub fn rerun(&self) -> Result<TestCommand> {
        Ok(self.history.rerun()?.command.clone())
    }

    /// The file on the other side of the source/test mapping.
    pub fn toggle(&self, file: &Path) -> Result<PathBuf> {
        let file = mapping::project_relative(file, &self.root);
        mapping::counterpart(&file, &self.config, &self.root)
    }

    /// Shell line for a command, with the configured environment prefix.
    pub fn shell_line(&self, command: &TestCommand) -> String {
        command.shell_line(self.config.default_env.as_deref())
    }

    fn record(&mut self, command: TestCommand) -> Result<TestCommand> {
        self.history.record(command.clone());
        if let Some(path) = &self.history_path {
            self.history.save(path)?;
        }
        Ok(command)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
