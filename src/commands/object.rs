//! # Object Command
//!
//! Creates an object in the primary project.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{error::Result, notes::Notes};

/// Executes the object command.
pub fn execute(notes: &Notes, name: &str) -> Result<()> {
    let (project, created) = notes.add_object(name)?;

    if created {
        println!("Created object '{name}' in project '{}'", project.name());
    } else {
        println!("Object '{name}' already exists");
    }

    Ok(())
}
