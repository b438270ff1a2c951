//! # Open Command
//!
//! Object-focused loop: every line typed becomes an item of the object.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead};

use crate::{
    error::{NotesError, Result},
    notes::Notes,
    project::parse_selection,
    ui::{self, Input},
};

use super::show::{self, ShowArgs};

/// Executes the open command on stdin.
pub fn execute(notes: &Notes, object: &str) -> Result<()> {
    run(notes, object, &mut io::stdin().lock())
}

/// Runs the object loop over `input` until an exit word or end of input.
pub fn run(notes: &Notes, object: &str, input: &mut impl BufRead) -> Result<()> {
    let (_, created) = notes.add_object(object)?;
    if created {
        println!("Object '{object}' not found. Created it.");
    }

    let show_args = ShowArgs {
        object: Some(object.to_string()),
        project: None,
    };
    show::execute(notes, &show_args)?;
    println!(
        "\nEnter text to add to '{object}'. Type 'show', 'delete <n>', or 'q' to leave."
    );

    let prompt = format!("{object}> ");
    loop {
        match ui::read_input(&prompt, input)? {
            Input::Exit => break,
            Input::Clear => ui::clear_screen()?,
            Input::Line(line) if line.eq_ignore_ascii_case("show") => {
                show::execute(notes, &show_args)?;
            }
            Input::Line(line) => match delete_selection(&line) {
                Some(selection) => delete(notes, object, selection)?,
                None => {
                    notes.add_item(object, &line)?;
                    println!("Added item to {object}");
                }
            },
        }
    }

    println!("Exiting object shell.");
    Ok(())
}

/// Returns the selection of a `delete <selection>` line.
fn delete_selection(line: &str) -> Option<&str> {
    let (word, rest) = line.split_once(char::is_whitespace)?;
    word.eq_ignore_ascii_case("delete").then(|| rest.trim())
}

/// Deletes items without confirmation; bad selections are reported, not fatal.
fn delete(notes: &Notes, object: &str, selection: &str) -> Result<()> {
    let positions = match parse_selection(selection) {
        Ok(positions) => positions,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let removed = notes.delete_items(object, &positions)?;
    if removed.is_empty() {
        println!("{}", NotesError::NoMatchingItems);
    } else {
        ui::print_success(&format!(
            "Deleted {} from {object}",
            ui::plural(removed.len(), "item")
        ));
    }
    Ok(())
}
