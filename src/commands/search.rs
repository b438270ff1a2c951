//! # Search Command
//!
//! Finds items of the primary project containing all given keywords.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::{OwoColorize, Stream::Stdout};

use crate::{error::Result, notes::Notes};

/// Arguments for the search command
pub struct SearchArgs {
    pub keywords: Vec<String>,
    /// Restrict the search to one object
    pub object: Option<String>,
}

/// Executes the search command.
pub fn execute(notes: &Notes, args: &SearchArgs) -> Result<()> {
    let hits = notes.search(args.object.as_deref(), &args.keywords)?;

    if hits.is_empty() {
        println!("No matching items");
        return Ok(());
    }

    for hit in &hits {
        println!(
            "{}: [{}] {}",
            hit.object.if_supports_color(Stdout, |t| t.cyan()),
            hit.item.timestamp,
            hit.item.text
        );
    }

    Ok(())
}
