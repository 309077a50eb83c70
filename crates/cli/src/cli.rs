// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Find, map and run Ruby tests
#[derive(Parser)]
#[command(name = "rubytest")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "RUBYTEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the command line instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN", global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a test file (a source file runs its test file)
    File(FileArgs),
    /// Run the test nearest to a line or offset
    At(AtArgs),
    /// Run the whole suite
    All,
    /// Run the last command again
    Rerun,
    /// Print the test file for a source file, or the reverse
    Toggle(FileArgs),
    /// Print the project root
    Root,
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct FileArgs {
    /// File to act on
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct AtArgs {
    /// Test file containing the cursor
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cursor line (1-based)
    #[arg(long, short = 'l', value_name = "N", required_unless_present = "offset")]
    pub line: Option<usize>,

    /// Cursor byte offset
    #[arg(long, value_name = "N", conflicts_with = "line")]
    pub offset: Option<usize>,

    /// Read the buffer text from stdin instead of FILE
    #[arg(long)]
    pub stdin: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
