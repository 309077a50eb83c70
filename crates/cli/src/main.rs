// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use rubytest::cli::{AtArgs, Cli, Command};
use rubytest::color::StatusWriter;
use rubytest::command::TestCommand;
use rubytest::locator;
use rubytest::runner::{self, ProcessRunner};
use rubytest::session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut status = StatusWriter::new(cli.color.choice());
    match run(&cli, &mut status) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // stderr is gone if this fails; nothing left to report to
            let _ = status.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUBYTEST_LOG` takes an EnvFilter directive.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rubytest=debug")
    } else {
        EnvFilter::try_from_env("RUBYTEST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: &Cli, status: &mut StatusWriter) -> anyhow::Result<u8> {
    // Completions work outside a project
    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "rubytest", &mut std::io::stdout());
        return Ok(0);
    }

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config_path = cli.config.as_ref().map(|p| cwd.join(p));
    let mut session = Session::open(&cwd, config_path.as_deref())?;

    let command = match &cli.command {
        Command::Root => {
            println!("{}", session.root().display());
            return Ok(0);
        }
        Command::Toggle(args) => {
            let counterpart = session.toggle(&cwd.join(&args.file))?;
            println!("{}", session.root().join(counterpart).display());
            return Ok(0);
        }
        Command::Completions(_) => return Ok(0),
        Command::File(args) => session.verify_file(&cwd.join(&args.file))?,
        Command::At(args) => verify_at(&mut session, &cwd, args)?,
        Command::All => session.verify_all()?,
        Command::Rerun => session.rerun()?,
    };

    execute(&session, &command, cli.dry_run, status)
}

fn verify_at(session: &mut Session, cwd: &Path, args: &AtArgs) -> anyhow::Result<TestCommand> {
    let file = cwd.join(&args.file);
    let text = if args.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read buffer from stdin")?;
        text
    } else {
        std::fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?
    };

    // clap requires one of --line / --offset
    let cursor = match args.offset {
        Some(offset) => offset,
        None => locator::line_offset(&text, args.line.unwrap_or(1)),
    };
    Ok(session.verify_nearest(&file, &text, cursor)?)
}

fn execute(
    session: &Session,
    command: &TestCommand,
    dry_run: bool,
    status: &mut StatusWriter,
) -> anyhow::Result<u8> {
    let line = session.shell_line(command);
    if dry_run {
        println!("{line}");
        return Ok(0);
    }

    status.running(&line, command.label())?;
    let exit = ProcessRunner::new(session.root())
        .run(&line)
        .with_context(|| format!("failed to run `{line}`"))?;
    let code = runner::exit_code(exit);
    status.finished(code)?;
    Ok(u8::try_from(code).unwrap_or(1))
}
