//! # JSON Files
//!
//! Reading and writing JSON records on disk.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::constants::TEMP_FILE_EXTENSION;

/// Reads and deserializes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Serializes a value as pretty JSON and writes it to `path`.
///
/// The content lands in a sibling temporary file first and is renamed over the
/// target, so readers never observe a partially written record.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    content.push('\n');

    let tmp = path.with_extension(TEMP_FILE_EXTENSION);
    fs::write(&tmp, content).with_context(|| format!("Failed to write {}", tmp.display()))?;

    fs::rename(&tmp, path).with_context(|| {
        format!("Failed to move {} to {}", tmp.display(), path.display())
    })
}
