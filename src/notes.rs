//! # Notes Service
//!
//! Use-cases of funknotes on top of the configuration and the project store.
//!
//! The service owns the [`Config`] it was constructed with and never prints;
//! commands render what it returns. Expected conditions (no primary project,
//! unknown object, ...) come back as user-facing [`NotesError`] variants.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::{
    config::Config,
    error::{NotesError, Result},
    project::{HistoryEntry, Item},
    storage::{self, ProjectRef, StoredProject},
};

/// Summary line for `list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListing {
    pub index: u64,
    pub name: String,
    pub primary: bool,
}

/// Result of creating a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub index: u64,
    pub name: String,
    /// Index of an older project already using the same name
    pub shadows: Option<u64>,
}

/// What `show` displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowView {
    /// Every object with its item count
    Objects {
        project: String,
        objects: Vec<(String, usize)>,
    },
    /// The items of one object
    Items {
        project: String,
        object: String,
        items: Vec<Item>,
    },
}

/// A search match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub object: String,
    pub item: Item,
}

/// A removed project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedProject {
    pub index: u64,
    pub name: String,
    pub was_primary: bool,
}

/// Outcome of a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Name of the merge target
    pub target: String,
    /// Sources that could not be found and were left out
    pub skipped: Vec<String>,
    /// Sources removed after merging
    pub deleted: Vec<String>,
}

/// The funknotes application service
#[derive(Debug)]
pub struct Notes {
    config: Config,
}

impl Notes {
    /// Creates the service around an opened configuration
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration
    pub const fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Projects
    // =========================================================================

    /// Creates a project under the next counter value and persists it.
    ///
    /// Names are not required to be unique.
    pub fn new_project(&mut self, name: &str) -> Result<NewProject> {
        let shadows = storage::find_by_name(&self.config, name)?.map(|p| p.index());

        let index = self.config.settings.next_index();
        let stored = StoredProject::load_or_create(&self.config, name, index)?;
        stored.save()?;
        self.config.save()?;

        info!(index, name, "created project");
        Ok(NewProject {
            index,
            name: name.to_string(),
            shadows,
        })
    }

    /// Resolves a project reference (index first, then name).
    pub fn resolve(&self, reference: &str) -> Result<StoredProject> {
        storage::find(&self.config, &ProjectRef::parse(reference))?
            .ok_or_else(|| NotesError::ProjectNotFound(reference.to_string()))
    }

    /// Points the primary project at `reference`. Nothing changes if it isn't found.
    pub fn set_primary(&mut self, reference: &str) -> Result<StoredProject> {
        let stored = self.resolve(reference)?;
        self.config.settings.primary_project = Some(stored.index());
        self.config.save()?;

        info!(index = stored.index(), "set primary project");
        Ok(stored)
    }

    /// Loads the primary project.
    pub fn primary(&self) -> Result<StoredProject> {
        let index = self.config.primary_project().ok_or(NotesError::NoPrimary)?;
        storage::find_by_index(&self.config, index)?.ok_or(NotesError::PrimaryMissing(index))
    }

    /// Loads the project named by `reference`, or the primary project.
    pub fn target(&self, reference: Option<&str>) -> Result<StoredProject> {
        reference.map_or_else(|| self.primary(), |r| self.resolve(r))
    }

    /// Lists every project, flagging the primary one
    pub fn list_projects(&self) -> Result<Vec<ProjectListing>> {
        let primary = self.config.primary_project();
        Ok(storage::load_all(&self.config)?
            .into_iter()
            .map(|stored| ProjectListing {
                index: stored.index(),
                primary: primary == Some(stored.index()),
                name: stored.project.name,
            })
            .collect())
    }

    /// Deletes a project file, clearing the primary pointer if it pointed there.
    pub fn delete_project(&mut self, reference: &str) -> Result<DeletedProject> {
        let stored = self.resolve(reference)?;
        self.remove_project(stored)
    }

    /// Deletes several projects. Every reference must resolve before any file is
    /// removed; a project named twice is deleted once.
    pub fn delete_projects(&mut self, references: &[String]) -> Result<Vec<DeletedProject>> {
        let mut resolved = references
            .iter()
            .map(|r| self.resolve(r))
            .collect::<Result<Vec<_>>>()?;
        let mut seen = HashSet::new();
        resolved.retain(|stored| seen.insert(stored.index()));

        resolved
            .into_iter()
            .map(|stored| self.remove_project(stored))
            .collect()
    }

    fn remove_project(&mut self, stored: StoredProject) -> Result<DeletedProject> {
        let index = stored.index();
        let project = stored.remove()?;

        let was_primary = self.config.primary_project() == Some(index);
        if was_primary {
            self.config.settings.primary_project = None;
            self.config.save()?;
        }

        Ok(DeletedProject {
            index,
            name: project.name,
            was_primary,
        })
    }

    // =========================================================================
    // Objects and items (primary project)
    // =========================================================================

    /// Creates an object in the primary project. Returns the project and whether
    /// the object was created (false if it already existed).
    pub fn add_object(&self, name: &str) -> Result<(StoredProject, bool)> {
        let mut stored = self.primary()?;
        let created = stored.add_object(name)?;
        Ok((stored, created))
    }

    /// Appends an item to an object of the primary project.
    pub fn add_item(&self, object: &str, text: &str) -> Result<Item> {
        self.primary()?.add_item(object, text)
    }

    /// Removes an object from the primary project.
    pub fn delete_object(&self, name: &str) -> Result<StoredProject> {
        let mut stored = self.primary()?;
        stored.project.remove_object(name)?;
        stored.save()?;
        Ok(stored)
    }

    /// Removes items by 1-based position from an object of the primary project.
    ///
    /// Writes nothing when no position matches.
    pub fn delete_items(&self, object: &str, positions: &[usize]) -> Result<Vec<Item>> {
        let mut stored = self.primary()?;
        let removed = stored.project.remove_items(object, positions)?;
        if !removed.is_empty() {
            stored.save()?;
        }
        Ok(removed)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Lists the objects of a project, or the items of one object.
    pub fn show(&self, project: Option<&str>, object: Option<&str>) -> Result<ShowView> {
        let stored = self.target(project)?;
        let project = stored.project;

        match object {
            None => Ok(ShowView::Objects {
                objects: project.object_summaries(),
                project: project.name,
            }),
            Some(object) => Ok(ShowView::Items {
                items: project.object(object)?.items.clone(),
                object: object.to_string(),
                project: project.name,
            }),
        }
    }

    /// Returns the history of an object.
    pub fn history(&self, project: Option<&str>, object: &str) -> Result<Vec<HistoryEntry>> {
        let stored = self.target(project)?;
        Ok(stored.project.object(object)?.history.clone())
    }

    /// Searches the primary project for items containing every keyword.
    pub fn search(&self, object: Option<&str>, keywords: &[String]) -> Result<Vec<SearchHit>> {
        let stored = self.primary()?;
        Ok(stored
            .project
            .search(object, keywords)?
            .into_iter()
            .map(|(object, item)| SearchHit {
                object: object.to_string(),
                item: item.clone(),
            })
            .collect())
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Merges source objects into the last named object of one project.
    pub fn merge_objects(
        &self,
        project: &str,
        objects: &[String],
        delete_sources: bool,
    ) -> Result<MergeReport> {
        let Some((target, sources)) = objects.split_last().filter(|(_, s)| !s.is_empty()) else {
            return Err(NotesError::MergeNeedsTwo("objects"));
        };

        // Each source is merged and removed at most once
        let mut seen = HashSet::from([target.as_str()]);
        let mut unique = Vec::with_capacity(sources.len());
        for source in sources {
            if seen.insert(source.as_str()) {
                unique.push(source.clone());
            }
        }
        let sources = unique;

        let mut stored = self.resolve(project)?;
        let skipped = stored.project.merge_objects(&sources, target)?;
        if !skipped.is_empty() {
            warn!(?skipped, "merge sources not found");
        }

        let mut deleted = Vec::new();
        if delete_sources {
            for source in sources.iter().filter(|s| !skipped.contains(*s)) {
                stored.project.remove_object(source)?;
                deleted.push(source.clone());
            }
        }
        stored.save()?;

        info!(project = stored.name(), target = %target, "merged objects");
        Ok(MergeReport {
            target: target.clone(),
            skipped,
            deleted,
        })
    }

    /// Merges source projects into the last named project.
    ///
    /// Every reference must resolve before anything is written.
    pub fn merge_projects(
        &mut self,
        references: &[String],
        delete_sources: bool,
    ) -> Result<MergeReport> {
        if references.len() < 2 {
            return Err(NotesError::MergeNeedsTwo("projects"));
        }

        let mut resolved = references
            .iter()
            .map(|r| self.resolve(r))
            .collect::<Result<Vec<_>>>()?;
        let mut target = resolved.pop().ok_or(NotesError::MergeNeedsTwo("projects"))?;
        let mut seen = HashSet::from([target.index()]);
        resolved.retain(|source| seen.insert(source.index()));

        for source in &resolved {
            target.project.merge_project(source.project.clone());
        }
        target.save()?;

        let mut deleted = Vec::new();
        if delete_sources {
            for source in resolved {
                deleted.push(self.remove_project(source)?.name);
            }
        }

        info!(target = target.name(), "merged projects");
        Ok(MergeReport {
            target: target.project.name,
            skipped: Vec::new(),
            deleted,
        })
    }
}
