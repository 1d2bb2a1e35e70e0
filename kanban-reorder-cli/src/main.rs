//! kanban-reorder CLI - resolve one drag-and-drop result against a snapshot.
//!
//! Reads a request from `--input` or stdin, writes JSON to stdout.
//!
//! Exit codes:
//! - 0: Success (including drags that change nothing)
//! - 1: Error (unreadable input or configuration)

use std::fs;
use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use kanban_reorder::{DragSession, ReorderConfig, ReorderEngine};
use kanban_reorder_cli::{parse_request, process, Cli};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("kanban_reorder=debug,kanban_reorder_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.config {
        // Figment skips missing files silently
        anyhow::ensure!(path.is_file(), "config file not found: {}", path.display());
    }
    let config =
        ReorderConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, emit = %cli.emit, "configuration loaded");

    let input = read_input(cli)?;
    let request = parse_request(&input)?;

    let mut session = DragSession::new(ReorderEngine::new(config));
    let value = process(request, &mut session, cli.emit)?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.input {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    if io::stdin().is_terminal() {
        // Nothing piped in: show usage rather than block on the terminal
        Cli::command().print_help().ok();
        anyhow::bail!("no request on stdin");
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}
