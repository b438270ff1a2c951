//! # Show Command
//!
//! Shows the objects of a project, or the items of a single object.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    error::Result,
    notes::{Notes, ShowView},
    ui,
};

/// Arguments for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowArgs {
    pub object: Option<String>,
    /// Project to read instead of the primary one
    pub project: Option<String>,
}

/// Executes the show command.
pub fn execute(notes: &Notes, args: &ShowArgs) -> Result<()> {
    let view = notes.show(args.project.as_deref(), args.object.as_deref())?;
    // Items of a non-primary project are titled `project/object`
    let qualify = args.project.is_some();

    match view {
        ShowView::Objects { project, objects } => {
            if objects.is_empty() {
                println!("No objects in project '{project}'");
                return Ok(());
            }
            ui::print_header(&format!("Objects in '{project}'"));
            for (name, count) in &objects {
                println!("  • {name} ({})", ui::plural(*count, "item"));
            }
        }
        ShowView::Items {
            project,
            object,
            items,
        } => {
            let title = if qualify {
                format!("{project}/{object}")
            } else {
                object
            };
            if items.is_empty() {
                ui::print_header(&format!("{title} (empty)"));
                return Ok(());
            }
            ui::print_header(&title);
            ui::print_items(&items);
        }
    }

    Ok(())
}
