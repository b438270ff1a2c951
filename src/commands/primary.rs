//! # Primary Command
//!
//! Selects the project that implicit commands operate on.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{error::Result, notes::Notes};

/// Executes the primary command.
pub fn execute(notes: &mut Notes, reference: &str) -> Result<()> {
    let project = notes.set_primary(reference)?;
    println!("Set primary project to '{}'", project.name());
    Ok(())
}
