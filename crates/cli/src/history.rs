// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Last-run history for `rerun`.
//!
//! A single slot holding the most recent command. The CLI persists it to
//! `.rubytest/last_run.json` so a rerun survives across invocations.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::command::TestCommand;
use crate::error::{Error, Result};

/// The recorded command and when it ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Time the command was recorded.
    pub recorded: DateTime<Utc>,

    pub command: TestCommand,
}

impl RunRecord {
    /// File label of the recorded command.
    pub fn label(&self) -> Option<&str> {
        self.command.label()
    }
}

/// Single-slot run history.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last: Option<RunRecord>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored command.
    pub fn record(&mut self, command: TestCommand) {
        self.last = Some(RunRecord {
            recorded: Utc::now(),
            command,
        });
    }

    /// The command to replay.
    pub fn rerun(&self) -> Result<&RunRecord> {
        self.last.as_ref().ok_or(Error::NoPreviousCommand)
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Save to file, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| Error::History {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|e| Error::io(path, e))
    }

    /// Load from file, returning an empty history if not found.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| Error::History {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
