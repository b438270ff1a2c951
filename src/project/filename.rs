//! # Project File Names
//!
//! Derives the on-disk file name of a project from its index and name.
//!
//! ## Rules
//! 1. Format is `<index>_<name>.json`
//! 2. Path separators and control characters in the name become hyphens
//! 3. Everything else (spaces, unicode, punctuation) is kept as typed
//!
//! The name part is fixed when the project is created and never follows later
//! edits of the `name` field; lookups always go through the file contents.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::constants::PROJECT_FILE_EXTENSION;

/// Returns the file name for a project.
///
/// # Example
/// ```
/// use funknotes::project::filename::project_filename;
/// assert_eq!(project_filename(1, "Website"), "1_Website.json");
/// ```
pub fn project_filename(index: u64, name: &str) -> String {
    format!("{index}_{}.{PROJECT_FILE_EXTENSION}", sanitize(name))
}

/// Replaces characters that can't appear in a single path component.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect()
}
