//! # Merge Command
//!
//! Folds objects of a project, or whole projects, into the last one named.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    error::{NotesError, Result},
    notes::{MergeReport, Notes},
    ui,
};

/// What to merge. Names are comma separated, the last one is the target.
#[derive(Debug, Clone)]
pub enum MergeTarget {
    Objects { project: String, objects: Vec<String> },
    Projects { projects: Vec<String> },
}

/// Arguments for the merge command
#[derive(Debug, Clone)]
pub struct MergeArgs {
    pub target: MergeTarget,
    /// Skip the confirmation prompt
    pub yes: bool,
    /// Remove the sources once merged
    pub delete_sources: bool,
}

/// Executes the merge command.
pub fn execute(notes: &mut Notes, args: MergeArgs) -> Result<()> {
    let report = match args.target {
        MergeTarget::Objects { project, objects } => {
            let Some(question) = question("objects", &objects, args.delete_sources) else {
                return Err(NotesError::MergeNeedsTwo("objects"));
            };
            let question = format!("{question} (project '{project}')");
            if !ui::confirm(&question, args.yes)? {
                return Ok(());
            }
            notes.merge_objects(&project, &objects, args.delete_sources)?
        }
        MergeTarget::Projects { projects } => {
            let Some(question) = question("projects", &projects, args.delete_sources) else {
                return Err(NotesError::MergeNeedsTwo("projects"));
            };
            if !ui::confirm(&question, args.yes)? {
                return Ok(());
            }
            notes.merge_projects(&projects, args.delete_sources)?
        }
    };

    print_report(&report);
    Ok(())
}

/// Builds the confirmation question, or `None` when there is nothing to merge.
fn question(kind: &str, names: &[String], delete_sources: bool) -> Option<String> {
    let (target, sources) = names.split_last()?;
    if sources.is_empty() {
        return None;
    }

    let mut question = format!("Merge {kind} {} into '{target}'", sources.join(", "));
    if delete_sources {
        question.push_str(" and delete the sources");
    }
    question.push('?');
    Some(question)
}

fn print_report(report: &MergeReport) {
    for name in &report.skipped {
        ui::print_notice(&format!("Skipped '{name}': not found"));
    }
    for name in &report.deleted {
        println!("  - removed '{name}'");
    }
    ui::print_success(&format!("Merged into '{}'", report.target));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_question_names_sources_and_target() {
        let q = question("objects", &names(&["a", "b", "c"]), false).unwrap();
        assert_eq!(q, "Merge objects a, b into 'c'?");
    }

    #[test]
    fn test_question_mentions_deletion() {
        let q = question("projects", &names(&["1", "2"]), true).unwrap();
        assert_eq!(q, "Merge projects 1 into '2' and delete the sources?");
    }

    #[test]
    fn test_question_requires_two_names() {
        assert!(question("objects", &names(&["only"]), false).is_none());
        assert!(question("objects", &[], false).is_none());
    }
}
