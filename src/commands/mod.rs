//! # Commands
//!
//! CLI command implementations for funknotes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod completions;
pub mod delete;
pub mod history;
pub mod list;
pub mod merge;
pub mod new;
pub mod object;
pub mod open;
pub mod primary;
pub mod search;
pub mod shell;
pub mod show;

pub use self::{
    add::{execute as add, AddArgs},
    delete::{execute as delete, DeleteArgs, DeleteTarget},
    history::execute as history,
    list::execute as list,
    merge::{execute as merge, MergeArgs, MergeTarget},
    new::execute as new,
    object::execute as object,
    open::execute as open,
    primary::execute as primary,
    search::{execute as search, SearchArgs},
    shell::execute as shell,
    show::{execute as show, ShowArgs},
};
