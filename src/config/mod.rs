//! # Configuration
//!
//! Storage root resolution and the persisted settings record. A [`Config`] is created
//! once per process and handed to the service layer; nothing here is global.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod settings;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

pub use self::settings::Settings;
use crate::constants::{CONFIG_FILENAME, PROJECTS_DIR, STORAGE_DIR};

/// Storage root plus the settings loaded from it
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage root (`~/.funknotes` unless opened elsewhere)
    root: PathBuf,

    /// Loaded `config.json`
    pub settings: Settings,
}

impl Config {
    /// Returns the default storage root (`$HOME/.funknotes`)
    pub fn default_root() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(STORAGE_DIR))
            .context("Could not determine home directory")
    }

    /// Opens the configuration at the default storage root
    pub fn load() -> Result<Self> {
        Self::open(Self::default_root()?)
    }

    /// Opens the configuration at `root`, creating the directory layout if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let projects = root.join(PROJECTS_DIR);

        fs::create_dir_all(&projects).with_context(|| {
            format!("Failed to create storage directory: {}", projects.display())
        })?;

        let settings = Settings::load(&root.join(CONFIG_FILENAME))?;
        debug!(root = %root.display(), ?settings, "opened storage");

        Ok(Self { root, settings })
    }

    /// Persists the current settings
    pub fn save(&self) -> Result<()> {
        self.settings.save(&self.config_path())
    }

    /// Returns the storage root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of `config.json`
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    /// Returns the directory holding project files
    pub fn projects_path(&self) -> PathBuf {
        self.root.join(PROJECTS_DIR)
    }

    /// Returns the primary project index, if one is set
    pub const fn primary_project(&self) -> Option<u64> {
        self.settings.primary_project
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_layout() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("store");

        let config = Config::open(&root).unwrap();
        assert!(config.projects_path().is_dir());
        assert!(!config.config_path().exists());
        assert_eq!(config.settings, Settings::default());

        // Opening again is a no-op
        Config::open(&root).unwrap();
    }

    #[test]
    fn test_save_and_reopen() {
        let temp = tempdir().unwrap();
        let mut config = Config::open(temp.path()).unwrap();
        config.settings.next_index();
        config.settings.primary_project = Some(1);
        config.save().unwrap();

        let reopened = Config::open(temp.path()).unwrap();
        assert_eq!(reopened.primary_project(), Some(1));
        assert_eq!(reopened.settings.project_counter, 1);
    }

    #[test]
    fn test_paths() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();
        assert_eq!(config.config_path(), temp.path().join("config.json"));
        assert_eq!(config.projects_path(), temp.path().join("projects"));
        assert_eq!(config.root(), temp.path());
    }
}
