//! # UI Utilities
//!
//! Shared output formatting and confirmation prompts used across commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::{
    constants::{ANSI_CLEAR_SCREEN, SHELL_CLEAR_WORD, SHELL_EXIT_WORDS},
    project::{HistoryEntry, Item},
};

// =============================================================================
// Section Output
// =============================================================================

/// Prints a section header preceded by a blank line: `=== {title} ===`
pub fn print_header(title: &str) {
    let header = format!("=== {title} ===");
    println!("\n{}", header.if_supports_color(Stdout, |t| t.bold()));
}

/// Prints items as a numbered list: `1. [timestamp] text`
pub fn print_items(items: &[Item]) {
    for (i, item) in items.iter().enumerate() {
        println!("{}. {} {}", i + 1, bracketed(&item.timestamp), item.text);
    }
}

/// Prints history entries: `[timestamp] ACTION: text`
pub fn print_history(entries: &[HistoryEntry]) {
    for entry in entries {
        println!(
            "{} {}: {}",
            bracketed(&entry.timestamp),
            entry.action,
            entry.text
        );
    }
}

/// Prints a dimmed informational line.
pub fn print_notice(message: &str) {
    println!("{}", message.if_supports_color(Stdout, |t| t.dimmed()));
}

/// Prints a success line with a green check mark.
pub fn print_success(message: &str) {
    println!("{} {message}", "✓".if_supports_color(Stdout, |t| t.green()));
}

fn bracketed(timestamp: &str) -> String {
    let text = format!("[{timestamp}]");
    text.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}

// =============================================================================
// Confirmation
// =============================================================================

/// Asks a `y/N` question on the terminal.
///
/// Returns true immediately when `assume_yes` is set. Without a terminal on stdin
/// nothing can be asked, so the action is declined.
pub fn confirm(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        println!("Non-interactive mode: pass --yes to confirm. Aborted.");
        return Ok(false);
    }

    let confirmed = ask(question, &mut stdin.lock())?;
    if !confirmed {
        println!("Cancelled");
    }
    Ok(confirmed)
}

/// Prints `question y/N:` and reads one answer line from `input`.
fn ask(question: &str, input: &mut impl BufRead) -> Result<bool> {
    print!("{question} y/N: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    answer.trim_start().starts_with(['y', 'Y'])
}

// =============================================================================
// Prompt Loops
// =============================================================================

/// A line read by an interactive loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Trimmed, non-empty text
    Line(String),
    /// End of input or one of the exit words
    Exit,
    /// The clear-screen word
    Clear,
}

/// Prints `prompt` and reads the next meaningful line from `input`.
///
/// Blank lines are skipped. Exit and clear words match case-insensitively.
pub fn read_input(prompt: &str, input: &mut impl BufRead) -> Result<Input> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(Input::Exit);
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if SHELL_EXIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
            return Ok(Input::Exit);
        }
        if line.eq_ignore_ascii_case(SHELL_CLEAR_WORD) {
            return Ok(Input::Clear);
        }
        return Ok(Input::Line(line.to_string()));
    }
}

/// Clears the terminal.
pub fn clear_screen() -> Result<()> {
    print!("{ANSI_CLEAR_SCREEN}");
    io::stdout().flush()?;
    Ok(())
}

// =============================================================================
// String Utilities
// =============================================================================

/// Formats a count with a singular or plural noun.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
