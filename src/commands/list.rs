//! # List Command
//!
//! Lists all projects and flags the primary one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::{OwoColorize, Stream::Stdout};

use crate::{error::Result, notes::Notes, ui};

/// Executes the list command.
pub fn execute(notes: &Notes) -> Result<()> {
    let projects = notes.list_projects()?;

    if projects.is_empty() {
        println!("No projects found");
        return Ok(());
    }

    ui::print_header("FunkNotes Projects");
    for project in &projects {
        let marker = if project.primary {
            format!(
                " {}",
                "(PRIMARY)".if_supports_color(Stdout, |t| t.green())
            )
        } else {
            String::new()
        };
        println!("  [{}] {}{marker}", project.index, project.name);
    }

    Ok(())
}
