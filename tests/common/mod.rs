//! # Test Harness
//!
//! Provides utilities for integration testing funknotes without touching the
//! user's real `~/.funknotes`. Library tests open storage at a temporary root;
//! binary tests point `HOME` at a temporary directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

use funknotes::{Config, Notes};

/// Test environment backed by a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment with an empty home directory.
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().expect("Failed to create temp home dir"),
        }
    }

    /// Returns the storage root, `<home>/.funknotes`.
    pub fn root(&self) -> PathBuf {
        self.home_dir.path().join(".funknotes")
    }

    /// Returns the path of the settings file.
    pub fn config_path(&self) -> PathBuf {
        self.root().join("config.json")
    }

    /// Returns the directory holding the project files.
    pub fn projects_path(&self) -> PathBuf {
        self.root().join("projects")
    }

    /// Opens the storage root the way the binary would.
    pub fn config(&self) -> Config {
        Config::open(self.root()).expect("Failed to open config")
    }

    /// Opens a fresh application service over the storage root.
    pub fn notes(&self) -> Notes {
        Notes::new(self.config())
    }

    /// Lists the project files, sorted by file name.
    pub fn project_files(&self) -> Vec<PathBuf> {
        let dir = self.projects_path();
        if !dir.exists() {
            return Vec::new();
        }
        let mut files: Vec<_> = fs::read_dir(dir)
            .expect("Failed to read projects directory")
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        files
    }

    /// Returns the path of a project file by its file name.
    pub fn project_file(&self, file_name: &str) -> PathBuf {
        self.projects_path().join(file_name)
    }

    /// Reads and parses a JSON file.
    pub fn read_json(&self, path: &Path) -> Value {
        let content = fs::read_to_string(path).expect("Failed to read JSON file");
        serde_json::from_str(&content).expect("Failed to parse JSON file")
    }

    /// Reads the settings file as JSON.
    pub fn read_settings(&self) -> Value {
        self.read_json(&self.config_path())
    }
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

/// Creates an environment with one project set as primary.
///
/// Equivalent to:
/// ```text
/// funknotes new <name>
/// funknotes primary <name>
/// ```
pub fn setup_with_primary(name: &str) -> TestEnv {
    let env = TestEnv::new();
    let mut notes = env.notes();
    notes.new_project(name).expect("new project");
    notes.set_primary(name).expect("set primary");
    env
}

/// Creates a funknotes command running against the test environment.
pub fn funknotes_cmd(env: &TestEnv) -> Command {
    let mut cmd = Command::cargo_bin("funknotes").unwrap();
    cmd.env("HOME", env.home_dir.path());
    cmd.env_remove("FUNKNOTES_LOG");
    cmd
}
