// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration loaded from `.rubytest.toml`.
//!
//! Every key is optional; a missing file yields [`ProjectConfig::default`].

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use defaults::owned;

/// Layout and runner settings for one project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Name of the directory holding the test tree.
    #[serde(default = "ProjectConfig::default_test_directory")]
    pub test_directory: String,

    /// Directories searched for the file under test, in order ("." is
    /// always searched first).
    #[serde(default = "ProjectConfig::default_source_directories")]
    pub source_directories: Vec<String>,

    /// Files whose presence marks the project root.
    #[serde(default = "ProjectConfig::default_root_markers")]
    pub root_markers: Vec<String>,

    #[serde(default)]
    pub use_bundler: bool,

    #[serde(default)]
    pub use_spring: bool,

    #[serde(default)]
    pub use_rails: bool,

    #[serde(default)]
    pub use_zeus: bool,

    #[serde(default)]
    pub use_docker: bool,

    #[serde(default = "ProjectConfig::default_docker_command")]
    pub docker_command: Vec<String>,

    /// Container (service) name passed to the docker command.
    #[serde(default)]
    pub docker_container: Option<String>,

    /// Environment assignments prefixed to every command line,
    /// e.g. `RAILS_ENV=test`.
    #[serde(default)]
    pub default_env: Option<String>,

    /// Runner for a single file when no pre-forker or framework runner
    /// applies.
    #[serde(default = "ProjectConfig::default_default_command")]
    pub default_command: Vec<String>,

    /// Runner for the whole suite when no pre-forker or framework runner
    /// applies.
    #[serde(default = "ProjectConfig::default_all_command")]
    pub all_command: Vec<String>,

    #[serde(default = "ProjectConfig::default_bundler_command")]
    pub bundler_command: Vec<String>,

    #[serde(default = "ProjectConfig::default_spring_command")]
    pub spring_command: Vec<String>,

    #[serde(default = "ProjectConfig::default_zeus_command")]
    pub zeus_command: Vec<String>,

    #[serde(default = "ProjectConfig::default_rails_command")]
    pub rails_command: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            test_directory: Self::default_test_directory(),
            source_directories: Self::default_source_directories(),
            root_markers: Self::default_root_markers(),
            use_bundler: false,
            use_spring: false,
            use_rails: false,
            use_zeus: false,
            use_docker: false,
            docker_command: Self::default_docker_command(),
            docker_container: None,
            default_env: None,
            default_command: Self::default_default_command(),
            all_command: Self::default_all_command(),
            bundler_command: Self::default_bundler_command(),
            spring_command: Self::default_spring_command(),
            zeus_command: Self::default_zeus_command(),
            rails_command: Self::default_rails_command(),
        }
    }
}

impl ProjectConfig {
    pub(crate) fn default_test_directory() -> String {
        defaults::layout::TEST_DIRECTORY.to_string()
    }

    pub(crate) fn default_source_directories() -> Vec<String> {
        owned(defaults::layout::SOURCE_DIRECTORIES)
    }

    pub(crate) fn default_root_markers() -> Vec<String> {
        owned(defaults::layout::ROOT_MARKERS)
    }

    pub(crate) fn default_docker_command() -> Vec<String> {
        owned(defaults::commands::DOCKER)
    }

    pub(crate) fn default_default_command() -> Vec<String> {
        owned(defaults::commands::DEFAULT)
    }

    pub(crate) fn default_all_command() -> Vec<String> {
        owned(defaults::commands::ALL)
    }

    pub(crate) fn default_bundler_command() -> Vec<String> {
        owned(defaults::commands::BUNDLER)
    }

    pub(crate) fn default_spring_command() -> Vec<String> {
        owned(defaults::commands::SPRING)
    }

    pub(crate) fn default_zeus_command() -> Vec<String> {
        owned(defaults::commands::ZEUS)
    }

    pub(crate) fn default_rails_command() -> Vec<String> {
        owned(defaults::commands::RAILS)
    }

    /// Source directories in lookup order, with "." first and no duplicates.
    pub fn lookup_directories(&self) -> Vec<&str> {
        let mut dirs = vec!["."];
        for dir in &self.source_directories {
            let dir = dir.trim_end_matches('/');
            if !dir.is_empty() && !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        dirs
    }

    /// Parse a config from TOML text.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load a config file.
pub fn load(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = ProjectConfig::parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
