//! # Settings
//!
//! The persisted process-wide record stored at `~/.funknotes/config.json`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::storage::file;

/// Settings stored at ~/.funknotes/config.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Index of the project targeted by implicit commands
    #[serde(default)]
    pub primary_project: Option<u64>,

    /// Last index handed out to a project; only ever increases
    #[serde(default)]
    pub project_counter: u64,
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        file::read_json(path)
    }

    /// Saves settings to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(
            path = %path.display(),
            primary = ?self.primary_project,
            counter = self.project_counter,
            "saving config"
        );
        file::write_json(path, self)
    }

    /// Advances the counter and returns the new value as the next project index.
    pub fn next_index(&mut self) -> u64 {
        self.project_counter += 1;
        debug!(counter = self.project_counter, "advanced project counter");
        self.project_counter
    }
}
