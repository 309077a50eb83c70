// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color for status lines.
//!
//! Only rubytest's own messages are colored; runner output passes through
//! untouched.

use std::io::{IsTerminal, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

/// `--color` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the environment and whether stderr is a terminal.
    pub fn choice(self) -> ColorChoice {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        self.resolve(no_color, std::io::stderr().is_terminal())
    }

    /// `NO_COLOR` applies to every mode, `always` included.
    pub fn resolve(self, no_color: bool, is_terminal: bool) -> ColorChoice {
        match self {
            ColorMode::Always => resolve_color(true, no_color),
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if !is_terminal => ColorChoice::Never,
            ColorMode::Auto => resolve_color(false, no_color),
        }
    }
}

/// `no_color` wins over `force`.
pub fn resolve_color(force: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color scheme for status output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// The command line being run.
    pub fn command() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// File labels.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

/// Writes status lines to stderr.
pub struct StatusWriter {
    stream: StandardStream,
}

impl StatusWriter {
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stderr(choice),
        }
    }

    /// `Running: <line> (<label>)`
    pub fn running(&mut self, line: &str, label: Option<&str>) -> std::io::Result<()> {
        self.stream.set_color(&scheme::command())?;
        write!(self.stream, "Running:")?;
        self.stream.reset()?;
        write!(self.stream, " {line}")?;
        if let Some(label) = label {
            write!(self.stream, " (")?;
            self.stream.set_color(&scheme::path())?;
            write!(self.stream, "{label}")?;
            self.stream.reset()?;
            write!(self.stream, ")")?;
        }
        writeln!(self.stream)
    }

    /// `PASS` / `FAIL (exit N)`
    pub fn finished(&mut self, code: i32) -> std::io::Result<()> {
        if code == 0 {
            self.stream.set_color(&scheme::pass())?;
            write!(self.stream, "PASS")?;
        } else {
            self.stream.set_color(&scheme::fail())?;
            write!(self.stream, "FAIL (exit {code})")?;
        }
        self.stream.reset()?;
        writeln!(self.stream)
    }

    /// `error: <message>`
    pub fn error(&mut self, message: &str) -> std::io::Result<()> {
        self.stream.set_color(&scheme::fail())?;
        write!(self.stream, "error:")?;
        self.stream.reset()?;
        writeln!(self.stream, " {message}")
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
