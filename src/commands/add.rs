//! # Add Command
//!
//! Appends an item to an object of the primary project.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, IsTerminal, Read};

use anyhow::Context;

use crate::{
    error::{NotesError, Result},
    notes::Notes,
};

/// Arguments for the add command
pub struct AddArgs {
    pub object: String,
    /// Words of the item text; read from piped stdin when empty
    pub text: Vec<String>,
}

/// Executes the add command.
pub fn execute(notes: &Notes, args: &AddArgs) -> Result<()> {
    let text = if args.text.is_empty() {
        read_piped_text()?
    } else {
        args.text.join(" ")
    };

    notes.add_item(&args.object, &text)?;
    println!("Added item to {}", args.object);

    Ok(())
}

/// Reads item text from stdin when it's piped in.
fn read_piped_text() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(NotesError::NoTextProvided);
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read item text from stdin")?;

    let text = text.trim_end_matches(['\n', '\r']);
    if text.trim().is_empty() {
        return Err(NotesError::NoTextProvided);
    }
    Ok(text.to_string())
}
