//! # funknotes
//!
//! A lightweight note tool organized as projects, objects, and items.
//!
//! Every project is a JSON file under `~/.funknotes/projects`, so notes stay
//! readable and easy to back up.
//!
//! ## Features
//!
//! - **Primary Project**: Object and item commands need no project argument
//! - **History**: Every change to an object is recorded with a timestamp
//! - **Merging**: Fold objects or whole projects together
//! - **Shell**: Interactive command loop and per-object entry mode
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod notes;
pub mod project;
pub mod storage;
pub mod ui;

pub use config::Config;
pub use error::NotesError;
pub use notes::Notes;
pub use project::{Item, Object, Project};
