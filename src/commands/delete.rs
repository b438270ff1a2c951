//! # Delete Command
//!
//! Removes objects, items, or whole projects after confirmation.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    error::{NotesError, Result},
    notes::{DeletedProject, Notes},
    project::parse_selection,
    ui,
};

/// What to delete
#[derive(Debug, Clone)]
pub enum DeleteTarget {
    /// An object of the primary project
    Object { name: String },
    /// Items of an object, by 1-based selection like `1,3,5-7`
    Item { object: String, selection: String },
    /// A project by index or name
    Project { project: String },
    /// Several projects by index or name
    Projects { projects: Vec<String> },
}

/// Arguments for the delete command
#[derive(Debug, Clone)]
pub struct DeleteArgs {
    pub target: DeleteTarget,
    /// Skip the confirmation prompt
    pub yes: bool,
}

/// Executes the delete command.
pub fn execute(notes: &mut Notes, args: DeleteArgs) -> Result<()> {
    match args.target {
        DeleteTarget::Object { name } => delete_object(notes, &name, args.yes),
        DeleteTarget::Item { object, selection } => {
            delete_items(notes, &object, &selection, args.yes)
        }
        DeleteTarget::Project { project } => delete_project(notes, &project, args.yes),
        DeleteTarget::Projects { projects } => delete_projects(notes, &projects, args.yes),
    }
}

fn delete_object(notes: &Notes, name: &str, yes: bool) -> Result<()> {
    let count = notes.primary()?.project.object(name)?.item_count();

    let question = format!(
        "Delete object '{name}' and its {}?",
        ui::plural(count, "item")
    );
    if !ui::confirm(&question, yes)? {
        return Ok(());
    }

    let project = notes.delete_object(name)?;
    ui::print_success(&format!(
        "Deleted object '{name}' from project '{}'",
        project.name()
    ));
    Ok(())
}

fn delete_items(notes: &Notes, object: &str, selection: &str, yes: bool) -> Result<()> {
    let positions = parse_selection(selection)?;
    let count = notes.primary()?.project.object(object)?.item_count();

    let matching = positions.iter().filter(|p| **p <= count).count();
    if matching == 0 {
        return Err(NotesError::NoMatchingItems);
    }

    let question = format!("Delete {} from {object}?", ui::plural(matching, "item"));
    if !ui::confirm(&question, yes)? {
        return Ok(());
    }

    let removed = notes.delete_items(object, &positions)?;
    for item in &removed {
        println!("  - {}", item.text);
    }
    ui::print_success(&format!(
        "Deleted {} from {object}",
        ui::plural(removed.len(), "item")
    ));
    Ok(())
}

fn delete_project(notes: &mut Notes, reference: &str, yes: bool) -> Result<()> {
    let stored = notes.resolve(reference)?;

    let question = format!(
        "Delete project '{}' [{}] with {}?",
        stored.name(),
        stored.index(),
        ui::plural(stored.project.objects.len(), "object")
    );
    if !ui::confirm(&question, yes)? {
        return Ok(());
    }

    let deleted = notes.delete_project(reference)?;
    print_deleted(&[deleted]);
    Ok(())
}

fn delete_projects(notes: &mut Notes, references: &[String], yes: bool) -> Result<()> {
    // Report unknown references before asking anything
    let names = references
        .iter()
        .map(|r| notes.resolve(r).map(|p| format!("'{}' [{}]", p.name(), p.index())))
        .collect::<Result<Vec<_>>>()?;

    let question = format!("Delete projects {}?", names.join(", "));
    if !ui::confirm(&question, yes)? {
        return Ok(());
    }

    let deleted = notes.delete_projects(references)?;
    print_deleted(&deleted);
    Ok(())
}

fn print_deleted(deleted: &[DeletedProject]) {
    for project in deleted {
        ui::print_success(&format!(
            "Deleted project '{}' [{}]",
            project.name, project.index
        ));
    }
    if deleted.iter().any(|p| p.was_primary) {
        ui::print_notice("Primary project cleared");
    }
}
