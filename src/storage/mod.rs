//! # Storage
//!
//! File system operations for funknotes projects.
//!
//! Each project lives in its own JSON file under `projects/`. There is no index
//! file: resolving a project by index or name scans and parses every project file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod file;

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    config::Config,
    constants::PROJECT_FILE_EXTENSION,
    error,
    project::{Item, Project},
};

/// A project reference as typed by the user: an index or a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRef {
    Index(u64),
    /// Integer that no project can carry (negative or out of range)
    InvalidIndex(String),
    Name(String),
}

impl ProjectRef {
    /// Parses a reference. Anything that reads as an integer is an index,
    /// otherwise it's a name.
    pub fn parse(reference: &str) -> Self {
        if let Ok(index) = reference.parse::<u64>() {
            return Self::Index(index);
        }

        let digits = reference.strip_prefix(['+', '-']).unwrap_or(reference);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::InvalidIndex(reference.to_string());
        }

        Self::Name(reference.to_string())
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            Self::Index(index) => project.index == *index,
            Self::InvalidIndex(_) => false,
            Self::Name(name) => project.name == *name,
        }
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::InvalidIndex(text) | Self::Name(text) => write!(f, "{text}"),
        }
    }
}

/// A project together with the file it is stored in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProject {
    pub path: PathBuf,
    pub project: Project,
}

impl StoredProject {
    /// Loads a project file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading project");
        let project = file::read_json(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            project,
        })
    }

    /// Loads the project file for `(name, index)`, or builds an empty record if it
    /// doesn't exist yet. Nothing is written until [`Self::save`].
    pub fn load_or_create(config: &Config, name: &str, index: u64) -> Result<Self> {
        let project = Project::new(name, index);
        let path = config.projects_path().join(project.filename());

        if path.exists() {
            return Self::load(&path);
        }

        Ok(Self { path, project })
    }

    /// Writes the full record back to its file
    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path.display(), "saving project");
        file::write_json(&self.path, &self.project)
    }

    /// Deletes the project file
    pub fn remove(self) -> Result<Project> {
        std::fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        info!(path = %self.path.display(), "removed project");
        Ok(self.project)
    }

    /// Returns the project name
    pub fn name(&self) -> &str {
        &self.project.name
    }

    /// Returns the project index
    pub const fn index(&self) -> u64 {
        self.project.index
    }

    /// Adds an empty object and persists. Returns false (and writes nothing) if it
    /// already exists.
    pub fn add_object(&mut self, name: &str) -> Result<bool> {
        if !self.project.add_object(name) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Appends an item to an existing object and persists.
    ///
    /// A missing object leaves the file untouched.
    pub fn add_item(&mut self, object: &str, text: &str) -> error::Result<Item> {
        let item = self.project.add_item(object, text)?;
        self.save()?;
        Ok(item)
    }

    /// Records a commit message and persists
    pub fn commit(&mut self, message: &str) -> Result<()> {
        self.project.commit(message);
        self.save()
    }
}

/// Lists all project files in the projects directory.
///
/// A directory that can't be read is an error, never an empty result.
pub fn walk_projects(config: &Config) -> Result<Vec<PathBuf>> {
    let dir = config.projects_path();
    let mut paths = Vec::new();

    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        let is_project = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == PROJECT_FILE_EXTENSION);
        if is_project {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

/// Loads every project, ordered by index.
///
/// A file that can't be parsed fails the whole scan.
pub fn load_all(config: &Config) -> Result<Vec<StoredProject>> {
    let mut projects = walk_projects(config)?
        .iter()
        .map(|path| StoredProject::load(path))
        .collect::<Result<Vec<_>>>()?;

    projects.sort_by_key(StoredProject::index);
    debug!(count = projects.len(), "scanned projects");
    Ok(projects)
}

/// Finds the first project (lowest index) matching the reference.
pub fn find(config: &Config, reference: &ProjectRef) -> Result<Option<StoredProject>> {
    Ok(load_all(config)?
        .into_iter()
        .find(|stored| reference.matches(&stored.project)))
}

/// Finds a project by index.
pub fn find_by_index(config: &Config, index: u64) -> Result<Option<StoredProject>> {
    find(config, &ProjectRef::Index(index))
}

/// Finds a project by name. Duplicate names resolve to the lowest index.
pub fn find_by_name(config: &Config, name: &str) -> Result<Option<StoredProject>> {
    find(config, &ProjectRef::Name(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create(config: &Config, name: &str, index: u64) -> StoredProject {
        let stored = StoredProject::load_or_create(config, name, index).unwrap();
        stored.save().unwrap();
        stored
    }

    #[test]
    fn test_project_ref_parse() {
        assert_eq!(ProjectRef::parse("12"), ProjectRef::Index(12));
        assert_eq!(ProjectRef::parse("Notes"), ProjectRef::Name("Notes".into()));
        assert_eq!(ProjectRef::parse("2x"), ProjectRef::Name("2x".into()));
        assert_eq!(ProjectRef::parse("-1"), ProjectRef::InvalidIndex("-1".into()));
        assert_eq!(
            ProjectRef::parse("99999999999999999999"),
            ProjectRef::InvalidIndex("99999999999999999999".into())
        );
        assert_eq!(ProjectRef::parse("-"), ProjectRef::Name("-".into()));
    }

    #[test]
    fn test_load_or_create_new_then_existing() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();

        let mut stored = StoredProject::load_or_create(&config, "Website", 1).unwrap();
        assert!(!stored.path.exists());
        assert_eq!(stored.path, config.projects_path().join("1_Website.json"));

        stored.add_object("TODO").unwrap();
        let reloaded = StoredProject::load_or_create(&config, "Website", 1).unwrap();
        assert!(reloaded.project.objects.contains_key("TODO"));
    }

    #[test]
    fn test_roundtrip_is_lossless() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();

        let mut stored = create(&config, "Website", 1);
        stored.add_object("TODO").unwrap();
        stored.add_item("TODO", "fix header bug").unwrap();
        stored.commit("first").unwrap();

        let loaded = StoredProject::load(&stored.path).unwrap();
        assert_eq!(loaded, stored);
    }

    #[test]
    fn test_find_by_index_and_name() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();
        create(&config, "Alpha", 1);
        create(&config, "Beta", 2);

        assert_eq!(find_by_index(&config, 2).unwrap().unwrap().name(), "Beta");
        assert_eq!(find_by_name(&config, "Alpha").unwrap().unwrap().index(), 1);
        assert!(find_by_index(&config, 3).unwrap().is_none());
        assert!(find_by_name(&config, "Gamma").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_names_resolve_to_lowest_index() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();
        create(&config, "Notes", 10);
        create(&config, "Notes", 2);

        assert_eq!(find_by_name(&config, "Notes").unwrap().unwrap().index(), 2);
    }

    #[test]
    fn test_load_all_sorted_numerically() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();
        create(&config, "ten", 10);
        create(&config, "two", 2);
        create(&config, "one", 1);

        let indexes: Vec<_> = load_all(&config)
            .unwrap()
            .iter()
            .map(StoredProject::index)
            .collect();
        assert_eq!(indexes, [1, 2, 10]);
    }

    #[test]
    fn test_scan_ignores_other_files() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();
        create(&config, "Alpha", 1);
        std::fs::write(config.projects_path().join("notes.txt"), "hello").unwrap();
        std::fs::write(config.projects_path().join("1_Alpha.json.tmp"), "{").unwrap();

        assert_eq!(load_all(&config).unwrap().len(), 1);
    }

    #[test]
    fn test_scan_fails_on_malformed_project() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();
        create(&config, "Alpha", 1);
        std::fs::write(config.projects_path().join("2_Broken.json"), "{").unwrap();

        assert!(load_all(&config).is_err());
    }

    #[test]
    fn test_scan_fails_on_unreadable_directory() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();
        std::fs::remove_dir(config.projects_path()).unwrap();

        let err = load_all(&config).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to scan"));
        assert!(find_by_name(&config, "Alpha").is_err());
    }

    #[test]
    fn test_add_item_missing_object_writes_nothing() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();
        let mut stored = create(&config, "Website", 1);
        let before = std::fs::read(&stored.path).unwrap();

        let err = stored.add_item("TODO", "text").unwrap_err();
        assert!(matches!(err, error::NotesError::ObjectNotFound(_)));
        assert_eq!(std::fs::read(&stored.path).unwrap(), before);
    }

    #[test]
    fn test_remove() {
        let temp = tempdir().unwrap();
        let config = Config::open(temp.path()).unwrap();
        let stored = create(&config, "Website", 1);
        let path = stored.path.clone();

        let project = stored.remove().unwrap();
        assert_eq!(project.name, "Website");
        assert!(!path.exists());
    }
}
