// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project root and config file discovery.
//!
//! Walks from the current directory upward looking for a marker file
//! (`Gemfile`, `Rakefile`, ...) and for `.rubytest.toml`.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::error::{Error, Result};

/// Find the nearest ancestor of `start_dir` (inclusive) containing any of
/// `markers`.
pub fn find_project_root(markers: &[String], start_dir: &Path) -> Result<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if markers.iter().any(|m| current.join(m).exists()) {
            tracing::debug!("project root: {}", current.display());
            return Ok(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return Err(Error::NotInProject {
                    start: start_dir.to_path_buf(),
                });
            }
        }
    }
}

/// Find `.rubytest.toml` starting from `start_dir` and walking up to
/// `stop_at` (inclusive). Configs above the project root never apply.
pub fn find_config(start_dir: &Path, stop_at: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(defaults::files::CONFIG);
        if config_path.is_file() {
            return Some(config_path);
        }

        if current == stop_at {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
