//! # funknotes CLI
//!
//! Command-line entry point for the funknotes note tool.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use funknotes::{
    cli::{self, Cli, Commands},
    commands,
    constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR},
    Config, Notes,
};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

/// Installs the stderr log subscriber, filtered by `FUNKNOTES_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Completions need no storage
    if let Commands::Completions { shell } = command {
        return commands::completions::execute(shell);
    }

    let mut notes = Notes::new(Config::load()?);
    cli::dispatch(&mut notes, command)
}
