//! # History Command
//!
//! Shows the change history of an object.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{error::Result, notes::Notes, ui};

/// Executes the history command.
pub fn execute(notes: &Notes, object: &str, project: Option<&str>) -> Result<()> {
    let history = notes.history(project, object)?;

    if history.is_empty() {
        ui::print_header(&format!("{object} History (empty)"));
        return Ok(());
    }

    ui::print_header(&format!("{object} History"));
    ui::print_history(&history);

    Ok(())
}
