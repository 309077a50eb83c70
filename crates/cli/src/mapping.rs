// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source-to-test file mapping.
//!
//! Paths are project-relative. `lib/foo.rb` maps to `test/foo_test.rb`,
//! `app/models/user.rb` to `test/models/user_test.rb`. The reverse
//! direction tries each configured source directory and returns the first
//! candidate that exists.

use std::path::{Component, Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{Error, Result};

/// File name suffixes marking a test file.
pub const TEST_SUFFIXES: &[&str] = &["_test.rb", "-test.rb"];

/// Extensions a source file may carry, in lookup order.
pub const SOURCE_EXTENSIONS: &[&str] = &["rb", "rake"];

/// Whether `path` follows the test file naming convention.
pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| TEST_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

/// Test file for a source file. Test files map to themselves.
pub fn test_file_for(path: &Path, config: &ProjectConfig) -> PathBuf {
    if is_test_file(path) {
        return path.to_path_buf();
    }

    let path = normalize(path);
    let test_dir = Path::new(&config.test_directory);
    let relative = match path.strip_prefix(test_dir) {
        Ok(rest) => rest.to_path_buf(),
        // "../<dir>/rest" relative to the test directory: drop "<dir>/"
        Err(_) => {
            let mut components = path.components();
            if path.components().count() > 1 {
                components.next();
            }
            components.as_path().to_path_buf()
        }
    };

    let name = relative
        .file_name()
        .and_then(|n| n.to_str())
        .map(test_file_name)
        .unwrap_or_default();

    test_dir.join(relative.with_file_name(name))
}

/// Candidate source paths for a test file, in lookup order.
///
/// Extensions form the outer loop and directories the inner one, so a
/// `.rb` file anywhere beats a `.rake` file.
pub fn target_candidates(test_path: &Path, config: &ProjectConfig) -> Vec<PathBuf> {
    let test_path = normalize(test_path);
    let relative = test_path
        .strip_prefix(&config.test_directory)
        .unwrap_or(test_path.as_path());
    let Some(name) = relative.file_name().and_then(|n| n.to_str()) else {
        return vec![];
    };

    let dirs = config.lookup_directories();
    let mut candidates = Vec::with_capacity(SOURCE_EXTENSIONS.len() * dirs.len());
    for ext in SOURCE_EXTENSIONS {
        let source = relative.with_file_name(source_file_name(name, ext));
        for dir in &dirs {
            if *dir == "." {
                candidates.push(source.clone());
            } else {
                candidates.push(Path::new(dir).join(&source));
            }
        }
    }
    candidates
}

/// First existing source file under `root` for a test file.
pub fn target_file_for(test_path: &Path, config: &ProjectConfig, root: &Path) -> Result<PathBuf> {
    let candidates = target_candidates(test_path, config);
    for candidate in candidates {
        if root.join(&candidate).is_file() {
            tracing::debug!("{} -> {}", test_path.display(), candidate.display());
            return Ok(candidate);
        }
        tracing::trace!("no file at {}", candidate.display());
    }
    Err(Error::TargetNotFound {
        test: test_path.to_path_buf(),
    })
}

/// The file on the other side of the mapping (toggle).
pub fn counterpart(path: &Path, config: &ProjectConfig, root: &Path) -> Result<PathBuf> {
    if is_test_file(path) {
        target_file_for(path, config, root)
    } else {
        Ok(test_file_for(path, config))
    }
}

/// Express `path` relative to `root` when it is absolute.
///
/// Falls back to canonical forms so symlinked temp dirs still line up;
/// paths outside the root come back unchanged.
pub fn project_relative(path: &Path, root: &Path) -> PathBuf {
    if path.is_relative() {
        return normalize(path);
    }
    if let Ok(rest) = path.strip_prefix(root) {
        return rest.to_path_buf();
    }
    if let (Ok(path), Ok(root)) = (path.canonicalize(), root.canonicalize())
        && let Ok(rest) = path.strip_prefix(&root)
    {
        return rest.to_path_buf();
    }
    path.to_path_buf()
}

/// `foo.rb` -> `foo_test.rb`, `db.rake` -> `db_test.rb`, `Rakefile` -> `Rakefile_test.rb`.
fn test_file_name(name: &str) -> String {
    let path = Path::new(name);
    let stem = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if SOURCE_EXTENSIONS.contains(&ext) => {
            path.file_stem().and_then(|s| s.to_str()).unwrap_or(name)
        }
        _ => name,
    };
    format!("{stem}_test.rb")
}

/// `foo_test.rb` -> `foo.<ext>`.
fn source_file_name(name: &str, ext: &str) -> String {
    if let Some(stem) = TEST_SUFFIXES.iter().find_map(|s| name.strip_suffix(s)) {
        return format!("{stem}.{ext}");
    }
    let path = Path::new(name);
    match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if path.extension().is_some() => format!("{stem}.{ext}"),
        _ => format!("{name}.{ext}"),
    }
}

/// Drop `.` components so `./lib/foo.rb` and `lib/foo.rb` map alike.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
