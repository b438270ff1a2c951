//! # Project
//!
//! A funknotes project: named objects holding timestamped items, an append-only
//! history per object, and a write-only commit log.
//!
//! Everything in this module is in-memory; persistence lives in [`crate::storage`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod filename;
pub mod selection;

use std::{collections::BTreeMap, fmt};

use chrono::Local;
use serde::{Deserialize, Serialize};

pub use self::{filename::project_filename, selection::parse_selection};
use crate::{
    constants::TIMESTAMP_FORMAT,
    error::{NotesError, Result},
};

/// Returns the current local time formatted for records.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Action recorded in an object's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Add,
    DeleteItem,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "ADD"),
            Self::DeleteItem => write!(f, "DELETE_ITEM"),
        }
    }
}

/// A single timestamped note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub timestamp: String,
    pub text: String,
}

/// One line of an object's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: Action,
    pub timestamp: String,
    pub text: String,
}

/// A freeform message recorded against a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub timestamp: String,
    pub message: String,
}

/// A named category of items inside a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// Items in insertion order
    #[serde(default)]
    pub items: Vec<Item>,

    /// Every change applied to `items`
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Object {
    /// Returns the number of items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Appends everything from `other`, keeping its order.
    fn absorb(&mut self, other: Self) {
        self.items.extend(other.items);
        self.history.extend(other.history);
    }
}

/// A complete project record as stored in `projects/<index>_<name>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,

    /// Assigned once at creation from the project counter
    pub index: u64,

    #[serde(default)]
    pub objects: BTreeMap<String, Object>,

    #[serde(default)]
    pub commits: Vec<Commit>,
}

impl Project {
    /// Creates an empty project
    pub fn new(name: impl Into<String>, index: u64) -> Self {
        Self {
            name: name.into(),
            index,
            objects: BTreeMap::new(),
            commits: Vec::new(),
        }
    }

    /// Returns the file name this project is stored under
    pub fn filename(&self) -> String {
        project_filename(self.index, &self.name)
    }

    /// Looks up an object by name
    pub fn object(&self, name: &str) -> Result<&Object> {
        self.objects
            .get(name)
            .ok_or_else(|| NotesError::ObjectNotFound(name.to_string()))
    }

    fn object_mut(&mut self, name: &str) -> Result<&mut Object> {
        self.objects
            .get_mut(name)
            .ok_or_else(|| NotesError::ObjectNotFound(name.to_string()))
    }

    /// Returns `(name, item count)` for every object
    pub fn object_summaries(&self) -> Vec<(String, usize)> {
        self.objects
            .iter()
            .map(|(name, object)| (name.clone(), object.item_count()))
            .collect()
    }

    /// Adds an empty object. Returns false if it already exists.
    pub fn add_object(&mut self, name: &str) -> bool {
        if self.objects.contains_key(name) {
            return false;
        }
        self.objects.insert(name.to_string(), Object::default());
        true
    }

    /// Removes an object and returns it
    pub fn remove_object(&mut self, name: &str) -> Result<Object> {
        self.objects
            .remove(name)
            .ok_or_else(|| NotesError::ObjectNotFound(name.to_string()))
    }

    /// Appends an item and its `ADD` history entry to an existing object.
    pub fn add_item(&mut self, object: &str, text: &str) -> Result<Item> {
        self.add_item_at(object, text, timestamp())
    }

    fn add_item_at(&mut self, object: &str, text: &str, timestamp: String) -> Result<Item> {
        let object = self.object_mut(object)?;

        let item = Item {
            timestamp: timestamp.clone(),
            text: text.to_string(),
        };
        object.items.push(item.clone());
        object.history.push(HistoryEntry {
            action: Action::Add,
            timestamp,
            text: text.to_string(),
        });

        Ok(item)
    }

    /// Removes items by 1-based position.
    ///
    /// Positions outside the object are ignored. Each removed item leaves a
    /// `DELETE_ITEM` history entry. Returns the removed items in position order.
    pub fn remove_items(&mut self, object: &str, positions: &[usize]) -> Result<Vec<Item>> {
        let object = self.object_mut(object)?;

        let count = object.items.len();
        let mut positions: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&p| (1..=count).contains(&p))
            .collect();
        positions.sort_unstable();
        positions.dedup();

        let now = timestamp();
        let mut removed = Vec::with_capacity(positions.len());
        // Highest first so earlier positions stay valid
        for &position in positions.iter().rev() {
            let item = object.items.remove(position - 1);
            object.history.push(HistoryEntry {
                action: Action::DeleteItem,
                timestamp: now.clone(),
                text: item.text.clone(),
            });
            removed.push(item);
        }
        removed.reverse();

        Ok(removed)
    }

    /// Moves the items and history of `sources` into `target`.
    ///
    /// The target must exist. Sources that don't exist are returned; the source
    /// objects themselves stay in place (empty) for the caller to remove.
    pub fn merge_objects(&mut self, sources: &[String], target: &str) -> Result<Vec<String>> {
        self.object(target)?;

        let mut skipped = Vec::new();
        for source in sources.iter().filter(|s| s.as_str() != target) {
            match self.objects.get_mut(source) {
                Some(object) => {
                    let taken = std::mem::take(object);
                    self.object_mut(target)?.absorb(taken);
                }
                None => skipped.push(source.clone()),
            }
        }

        Ok(skipped)
    }

    /// Merges every object and commit of `other` into this project.
    ///
    /// Objects sharing a name are concatenated, others are copied over.
    pub fn merge_project(&mut self, other: Self) {
        for (name, object) in other.objects {
            self.objects.entry(name).or_default().absorb(object);
        }
        self.commits.extend(other.commits);
    }

    /// Records a commit message
    pub fn commit(&mut self, message: &str) -> &Commit {
        self.commits.push(Commit {
            timestamp: timestamp(),
            message: message.to_string(),
        });
        &self.commits[self.commits.len() - 1]
    }

    /// Finds items containing every keyword (case-insensitive).
    ///
    /// Searches one object when `object` is given, otherwise all of them.
    pub fn search<'a>(
        &'a self,
        object: Option<&str>,
        keywords: &[String],
    ) -> Result<Vec<(&'a str, &'a Item)>> {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let is_match = |item: &Item| {
            let text = item.text.to_lowercase();
            keywords.iter().all(|k| text.contains(k.as_str()))
        };

        let scope: Vec<(&str, &Object)> = match object {
            Some(name) => {
                let (key, object) = self
                    .objects
                    .get_key_value(name)
                    .ok_or_else(|| NotesError::ObjectNotFound(name.to_string()))?;
                vec![(key.as_str(), object)]
            }
            None => self.objects.iter().map(|(k, o)| (k.as_str(), o)).collect(),
        };

        Ok(scope
            .into_iter()
            .flat_map(|(name, object)| object.items.iter().map(move |item| (name, item)))
            .filter(|(_, item)| is_match(item))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_todo() -> Project {
        let mut project = Project::new("Website", 1);
        project.add_object("TODO");
        project
    }

    #[test]
    fn test_add_object_is_idempotent() {
        let mut project = Project::new("Website", 1);
        assert!(project.add_object("TODO"));
        assert!(!project.add_object("TODO"));
        assert_eq!(project.objects.len(), 1);
    }

    #[test]
    fn test_add_item_appends_history() {
        let mut project = project_with_todo();
        project.add_item("TODO", "fix header bug").unwrap();
        project.add_item("TODO", "fix footer bug").unwrap();

        let todo = project.object("TODO").unwrap();
        assert_eq!(todo.items.len(), 2);
        assert_eq!(todo.history.len(), 2);
        assert_eq!(todo.items[0].text, "fix header bug");
        assert_eq!(todo.history[1].action, Action::Add);
        assert_eq!(todo.history[1].text, "fix footer bug");
        assert_eq!(todo.items[1].timestamp, todo.history[1].timestamp);
    }

    #[test]
    fn test_add_item_missing_object() {
        let mut project = Project::new("Website", 1);
        let before = project.clone();
        let err = project.add_item("TODO", "text").unwrap_err();
        assert!(matches!(err, NotesError::ObjectNotFound(name) if name == "TODO"));
        assert_eq!(project, before);
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp();
        assert_eq!(ts.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_remove_items_records_history() {
        let mut project = project_with_todo();
        for text in ["one", "two", "three", "four"] {
            project.add_item("TODO", text).unwrap();
        }

        let removed = project.remove_items("TODO", &[3, 1, 9, 3]).unwrap();
        let texts: Vec<_> = removed.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["one", "three"]);

        let todo = project.object("TODO").unwrap();
        let remaining: Vec<_> = todo.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(remaining, ["two", "four"]);
        assert_eq!(todo.history.len(), 6);
        assert!(todo.history[4..]
            .iter()
            .all(|h| h.action == Action::DeleteItem));
    }

    #[test]
    fn test_remove_items_out_of_range() {
        let mut project = project_with_todo();
        project.add_item("TODO", "only").unwrap();
        let removed = project.remove_items("TODO", &[0, 2]).unwrap();
        assert!(removed.is_empty());
        assert_eq!(project.object("TODO").unwrap().history.len(), 1);
    }

    #[test]
    fn test_merge_objects() {
        let mut project = project_with_todo();
        project.add_object("IDEAS");
        project.add_item("TODO", "a").unwrap();
        project.add_item("IDEAS", "b").unwrap();
        project.add_item("IDEAS", "c").unwrap();

        let skipped = project
            .merge_objects(&["IDEAS".into(), "GHOST".into()], "TODO")
            .unwrap();
        assert_eq!(skipped, ["GHOST"]);

        let todo = project.object("TODO").unwrap();
        let texts: Vec<_> = todo.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(todo.history.len(), 3);
        assert_eq!(project.object("IDEAS").unwrap().item_count(), 0);
    }

    #[test]
    fn test_merge_objects_missing_target() {
        let mut project = project_with_todo();
        let err = project
            .merge_objects(&["TODO".into()], "DONE")
            .unwrap_err();
        assert!(matches!(err, NotesError::ObjectNotFound(name) if name == "DONE"));
    }

    #[test]
    fn test_merge_project() {
        let mut target = project_with_todo();
        target.add_item("TODO", "mine").unwrap();

        let mut source = Project::new("Old", 2);
        source.add_object("TODO");
        source.add_object("BUGS");
        source.add_item("TODO", "theirs").unwrap();
        source.add_item("BUGS", "crash").unwrap();
        source.commit("initial");

        target.merge_project(source);
        assert_eq!(target.object("TODO").unwrap().item_count(), 2);
        assert_eq!(target.object("BUGS").unwrap().item_count(), 1);
        assert_eq!(target.commits.len(), 1);
    }

    #[test]
    fn test_commit_appends() {
        let mut project = Project::new("Website", 1);
        project.commit("");
        project.commit("second");
        assert_eq!(project.commits.len(), 2);
        assert_eq!(project.commits[0].message, "");
        assert_eq!(project.commits[1].message, "second");
    }

    #[test]
    fn test_search_all_keywords_case_insensitive() {
        let mut project = project_with_todo();
        project.add_object("BUGS");
        project.add_item("TODO", "Fix header bug").unwrap();
        project.add_item("TODO", "write docs").unwrap();
        project.add_item("BUGS", "header overlaps BUG badge").unwrap();

        let hits = project
            .search(None, &["HEADER".into(), "bug".into()])
            .unwrap();
        let objects: Vec<_> = hits.iter().map(|(o, _)| *o).collect();
        assert_eq!(objects, ["BUGS", "TODO"]);

        let hits = project.search(Some("TODO"), &["docs".into()]).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.text, "write docs");

        assert!(project.search(Some("NOPE"), &["x".into()]).is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let mut project = project_with_todo();
        project
            .add_item_at("TODO", "fix header bug", "2025-01-02 03:04:05".into())
            .unwrap();

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["name"], "Website");
        assert_eq!(json["index"], 1);
        assert_eq!(json["objects"]["TODO"]["items"][0]["text"], "fix header bug");
        assert_eq!(
            json["objects"]["TODO"]["history"][0]["action"],
            serde_json::json!("ADD")
        );
        assert_eq!(json["commits"], serde_json::json!([]));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Add.to_string(), "ADD");
        assert_eq!(Action::DeleteItem.to_string(), "DELETE_ITEM");
    }
}
