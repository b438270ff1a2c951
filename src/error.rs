//! # Errors
//!
//! Error type shared by the store, the service layer and the commands.
//!
//! Every variant except [`NotesError::Storage`] is an expected condition the user can
//! fix (missing object, unset primary project, ...). Those are printed as plain
//! messages and the command still exits successfully. `Storage` wraps I/O and
//! parse faults, which abort the process.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NotesError>;

#[derive(Debug, Error)]
pub enum NotesError {
    #[error("No primary project set. Use 'funknotes primary <project>' first.")]
    NoPrimary,

    #[error("Primary project not found")]
    PrimaryMissing(u64),

    #[error("Project '{0}' not found")]
    ProjectNotFound(String),

    #[error("Object '{0}' not found")]
    ObjectNotFound(String),

    #[error("No matching items to delete")]
    NoMatchingItems,

    #[error("No text provided")]
    NoTextProvided,

    #[error("No valid indexes in '{0}'")]
    InvalidSelection(String),

    #[error("Need at least two {0} to merge (sources...,target)")]
    MergeNeedsTwo(&'static str),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
