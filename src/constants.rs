//! # Constants
//!
//! Centralized constants for magic values used throughout funknotes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// File System
// =============================================================================

/// Storage root directory name (inside the user's home directory).
pub const STORAGE_DIR: &str = ".funknotes";

/// Configuration file name (inside `STORAGE_DIR`).
pub const CONFIG_FILENAME: &str = "config.json";

/// Subdirectory holding one JSON file per project (inside `STORAGE_DIR`).
pub const PROJECTS_DIR: &str = "projects";

/// File extension for project files.
pub const PROJECT_FILE_EXTENSION: &str = "json";

/// Extension used for in-flight writes before they are renamed into place.
pub const TEMP_FILE_EXTENSION: &str = "json.tmp";

// =============================================================================
// Records
// =============================================================================

/// Local time format for item, history and commit timestamps (second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "FUNKNOTES_LOG";

/// Filter used when `LOG_ENV_VAR` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// =============================================================================
// Shell
// =============================================================================

/// Words that leave the interactive shells.
pub const SHELL_EXIT_WORDS: &[&str] = &["q", "quit", "exit", "drop"];

/// Word that clears the terminal in the interactive shells.
pub const SHELL_CLEAR_WORD: &str = "clear";

/// ANSI sequence that clears the screen and homes the cursor.
pub const ANSI_CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
