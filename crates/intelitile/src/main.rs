#![warn(missing_docs)]

//! Entry point for the `intelitile` binary.
//!
//! Driven by the window manager: `init` once per query, `add` for every
//! window that must stay uncovered, then one of `place`, `tallPlace` or
//! `widePlace` for the window being maximized. Directives go to stdout; logs
//! and errors go to stderr.

mod cli;
mod commands;
mod error;

use std::{io, process};

use clap::Parser;
use intelitile_core::FileStore;
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

/// Exit status for a failed session step. Usage errors exit through clap
/// with status 2.
const FAILURE: i32 = 1;

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|err| err.exit());
    let result = run(cli);
    if let Err(err) = &result {
        eprintln!("error: {err}");
    }
    process::exit(exit_code(&result));
}

/// Map the outcome of a session step to a process exit status.
fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => FAILURE,
    }
}

/// Install logging and dispatch to the chosen step.
fn run(cli: Cli) -> Result<()> {
    let Cli { log, command } = cli;
    logging::init_stderr(&log.spec());

    let store = match &command {
        Commands::Init(args) => args
            .session_dir
            .clone()
            .map_or_else(FileStore::default, FileStore::new),
        _ => FileStore::default(),
    };
    debug!(dir = %store.dir().display(), ?command, "running");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&command, &store, &mut out)
}
