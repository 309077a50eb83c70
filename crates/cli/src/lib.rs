// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rubytest: find, map and run Ruby tests.
//!
//! The core is pure: [`mapping`] pairs source and test files, [`locator`]
//! finds the test at a cursor, and [`command`] turns the project's runner
//! settings into a command line. [`session`] ties them to a project root
//! and a [`history::RunHistory`].

pub mod cli;
pub mod color;
pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod history;
pub mod locator;
pub mod mapping;
pub mod runner;
pub mod session;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
