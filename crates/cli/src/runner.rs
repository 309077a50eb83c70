// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process runner.
//!
//! Runs a shell line through `sh -c` in the project root. Stdio is
//! inherited so the test output streams straight to the terminal.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};

/// Executes command lines in one working directory.
pub struct ProcessRunner {
    root: PathBuf,
}

impl ProcessRunner {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Run `line` and wait for it to finish.
    pub fn run(&self, line: &str) -> Result<ExitStatus> {
        tracing::debug!("sh -c {:?} in {}", line, self.root.display());
        Command::new("sh")
            .arg("-c")
            .arg(line)
            .current_dir(&self.root)
            .status()
            .map_err(|e| Error::io(&self.root, e))
    }
}

/// Process exit code for a finished child; signals map to 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
