// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types surfaced to the user.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No marker file was found walking up from the start directory.
    #[error("not inside a recognized Ruby project (searched upward from {})", start.display())]
    NotInProject { start: PathBuf },

    /// No test declaration on or before the cursor line.
    #[error(
        "no test found at {}:{line}; make sure the cursor is below a `def test_foo`, `test \"foo\"` or `it \"foo\"`",
        file.display()
    )]
    NoTestFound { file: PathBuf, line: usize },

    /// None of the candidate source files for a test exist.
    #[error("no source file found for {}", test.display())]
    TargetNotFound { test: PathBuf },

    /// Verify-file on a source file whose mapped test is missing.
    #[error("{} has no test file (expected {})", source_file.display(), test.display())]
    TestFileNotFound { source_file: PathBuf, test: PathBuf },

    #[error("no previous command to rerun")]
    NoPreviousCommand,

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid run history {}: {source}", path.display())]
    History {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
