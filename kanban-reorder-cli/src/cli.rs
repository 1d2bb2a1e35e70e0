//! CLI definition for the kanban-reorder command-line interface.
//!
//! This module only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// What to print after resolving the drag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// The intents the store should dispatch, in order
    #[default]
    Intents,
    /// The snapshot the store should hold afterwards
    Snapshot,
}

impl std::fmt::Display for Emit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Emit::Intents => write!(f, "intents"),
            Emit::Snapshot => write!(f, "snapshot"),
        }
    }
}

/// kanban-reorder - apply a drag-and-drop result to a kanban snapshot
///
/// Reads `{"snapshot": {...}, "result": {...}}` JSON and writes the resulting
/// intents (or snapshot) as JSON to stdout.
#[derive(Parser, Debug)]
#[command(name = "kanban-reorder")]
#[command(version)]
#[command(about = "Apply a drag-and-drop result to a kanban snapshot")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Read the request from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// TOML configuration file (KANBAN_REORDER_* variables still override it)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Emit::Intents)]
    pub emit: Emit,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
