//! # New Command
//!
//! Creates a new project under the next index.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{error::Result, notes::Notes, ui};

/// Executes the new command.
pub fn execute(notes: &mut Notes, name: &str) -> Result<()> {
    let created = notes.new_project(name)?;

    println!(
        "Created project '{}' with index {}",
        created.name, created.index
    );

    if let Some(other) = created.shadows {
        ui::print_notice(&format!(
            "Note: project {other} is also named '{name}'; refer to this one by index"
        ));
    }

    Ok(())
}
