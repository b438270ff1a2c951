//! # Shell Command
//!
//! Interactive loop that runs funknotes commands without the program name.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use anyhow::Result;
use clap::Parser;
use owo_colors::{OwoColorize, Stream::Stderr, Style};
use tracing::debug;

use crate::{
    cli::{self, Cli, Commands},
    notes::Notes,
    ui::{self, Input},
};

const PROMPT: &str = "funknotes> ";
const PROGRAM: &str = "funknotes";

/// Executes the shell command on stdin.
pub fn execute(notes: &mut Notes) -> Result<()> {
    println!("FunkNotes shell. Type 'q', 'quit', 'exit', or 'drop' to leave.");

    // Commands like `delete` prompt on stdin themselves, so the lock is
    // only held while a line is read.
    loop {
        match ui::read_input(PROMPT, &mut io::stdin().lock())? {
            Input::Exit => break,
            Input::Clear => ui::clear_screen()?,
            Input::Line(line) => run_line(notes, &line),
        }
    }

    println!("Exiting shell.");
    Ok(())
}

/// Parses and runs one shell line. Errors are reported and never end the loop.
fn run_line(notes: &mut Notes, line: &str) {
    let Some(words) = split(line) else {
        println!("Unbalanced quotes in '{line}'");
        return;
    };

    let command = match Cli::try_parse_from(words) {
        Ok(Cli {
            command: Some(command),
        }) => command,
        Ok(Cli { command: None }) => return,
        Err(err) => {
            if let Err(print_err) = err.print() {
                debug!(error = %print_err, "failed to print parse error");
            }
            return;
        }
    };

    if matches!(command, Commands::Shell) {
        println!("Already in the shell");
        return;
    }

    if let Err(err) = cli::dispatch(notes, command) {
        eprintln!(
            "{} {err:#}",
            "error:".if_supports_color(Stderr, |t| t.style(Style::new().red().bold()))
        );
    }
}

/// Splits a line into argv form, prefixing the program name unless typed.
fn split(line: &str) -> Option<Vec<String>> {
    let mut words = shlex::split(line)?;
    if words.first().map(String::as_str) != Some(PROGRAM) {
        words.insert(0, PROGRAM.to_string());
    }
    Some(words)
}
