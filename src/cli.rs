//! # CLI
//!
//! Argument definitions and command dispatch, shared by `main` and the
//! interactive shell.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use tracing::debug;

use crate::{
    commands::{
        self, AddArgs, DeleteArgs, DeleteTarget, MergeArgs, MergeTarget, SearchArgs, ShowArgs,
    },
    error::NotesError,
    notes::Notes,
};

const GLOBAL_HELP: &str = "\
Storage:
  ~/.funknotes/config.json       Primary project and index counter
  ~/.funknotes/projects/         One JSON file per project

Projects are referenced by index or by name. Commands without a project
argument operate on the primary project.

Getting Started:
  funknotes new Website          Create a project
  funknotes primary Website      Make it the primary project
  funknotes object TODO          Create an object
  funknotes add TODO Fix header  Add an item
  funknotes show TODO            Show the items

Environment:
  FUNKNOTES_LOG                  Log filter for stderr (default: warn)";

#[derive(Parser)]
#[command(name = "funknotes")]
#[command(version)]
#[command(about = "Lightweight CLI note tool organized as projects and objects")]
#[command(
    long_about = "funknotes keeps notes in projects. A project holds named objects, and each \
object holds an ordered list of timestamped items plus a history of every change.\n\n\
Data lives in plain JSON files under ~/.funknotes. One project is marked primary; \
object and item commands operate on it."
)]
#[command(after_help = GLOBAL_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project
    #[command(after_help = "Examples:\n  \
funknotes new Website\n  \
funknotes new \"Reading List\"\n\n\
Duplicate names are allowed; refer to such projects by index.")]
    New {
        /// Project name
        name: String,
    },

    /// Set the primary project
    #[command(after_help = "Examples:\n  \
funknotes primary Website      By name\n  \
funknotes primary 2            By index")]
    Primary {
        /// Project index or name
        #[arg(allow_hyphen_values = true)]
        project: String,
    },

    /// Create an object in the primary project
    Object {
        /// Object name
        name: String,
    },

    /// Add an item to an object of the primary project
    #[command(
        long_about = "Add an item to an object of the primary project.\n\n\
All remaining words are joined with single spaces. Without text, the item is read \
from stdin when it is piped in.",
        after_help = "Examples:\n  \
funknotes add TODO Fix the header\n  \
funknotes add TODO \"Quoted -- text\"\n  \
echo \"From a pipe\" | funknotes add TODO"
    )]
    Add {
        /// Object name
        object: String,

        /// Item text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List all projects
    List,

    /// Show the objects of a project, or the items of one object
    Show {
        /// Object name (omit to list objects)
        object: Option<String>,

        /// Project index or name instead of the primary project
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Show the change history of an object
    History {
        /// Object name
        object: String,

        /// Project index or name instead of the primary project
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Search items of the primary project
    #[command(
        long_about = "Search items of the primary project.\n\n\
An item matches when its text contains every keyword, ignoring case.",
        after_help = "Examples:\n  \
funknotes search header\n  \
funknotes search -o TODO fix header"
    )]
    Search {
        /// Only search this object
        #[arg(short, long)]
        object: Option<String>,

        /// Keywords that must all appear
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Delete an object, items, or a project
    Delete {
        #[command(subcommand)]
        target: DeleteCommand,
    },

    /// Merge objects or projects into the last one named
    Merge {
        #[command(subcommand)]
        target: MergeCommand,
    },

    /// Run commands interactively
    Shell,

    /// Add items to an object line by line
    Open {
        /// Object name (created if missing)
        object: String,
    },

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
funknotes completions bash > ~/.local/share/bash-completion/completions/funknotes\n  \
funknotes completions zsh > ~/.zfunc/_funknotes\n  \
funknotes completions fish > ~/.config/fish/completions/funknotes.fish")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum DeleteCommand {
    /// Delete an object of the primary project
    Object {
        /// Object name
        name: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete items of an object by position
    #[command(after_help = "Examples:\n  \
funknotes delete item TODO 2\n  \
funknotes delete item TODO 1,3,5-7")]
    Item {
        /// Object name
        object: String,

        /// Positions, e.g. 2 or 1,3,5-7
        selection: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete a project
    Project {
        /// Project index or name
        #[arg(allow_hyphen_values = true)]
        project: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete several projects at once
    #[command(after_help = "Examples:\n  \
funknotes delete projects 2,3,Archive\n\n\
Every project must exist; otherwise nothing is deleted.")]
    Projects {
        /// Comma separated project indexes or names
        #[arg(required = true, value_delimiter = ',')]
        projects: Vec<String>,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum MergeCommand {
    /// Merge objects of a project into the last object named
    #[command(after_help = "Examples:\n  \
funknotes merge objects Website Ideas,Later,TODO")]
    Objects {
        /// Project index or name
        project: String,

        /// Comma separated objects; the last one is the target
        #[arg(value_delimiter = ',')]
        objects: Vec<String>,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Delete the source objects afterwards
        #[arg(long)]
        delete_sources: bool,
    },

    /// Merge projects into the last project named
    #[command(after_help = "Examples:\n  \
funknotes merge projects 3,Archive")]
    Projects {
        /// Comma separated projects; the last one is the target
        #[arg(value_delimiter = ',')]
        projects: Vec<String>,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Delete the source projects afterwards
        #[arg(long)]
        delete_sources: bool,
    },
}

/// Runs one parsed command.
///
/// Problems the user can fix are printed as plain messages and count as
/// success. Only storage faults are returned.
pub fn dispatch(notes: &mut Notes, command: Commands) -> Result<()> {
    match run(notes, command) {
        Ok(()) => Ok(()),
        Err(NotesError::Storage(err)) => Err(err),
        Err(err) => {
            debug!(error = %err, "command refused");
            println!("{err}");
            Ok(())
        }
    }
}

fn run(notes: &mut Notes, command: Commands) -> crate::error::Result<()> {
    match command {
        Commands::New { name } => commands::new(notes, &name),
        Commands::Primary { project } => commands::primary(notes, &project),
        Commands::Object { name } => commands::object(notes, &name),
        Commands::Add { object, text } => commands::add(notes, &AddArgs { object, text }),
        Commands::List => commands::list(notes),
        Commands::Show { object, project } => commands::show(notes, &ShowArgs { object, project }),
        Commands::History { object, project } => {
            commands::history(notes, &object, project.as_deref())
        }
        Commands::Search { object, keywords } => {
            commands::search(notes, &SearchArgs { keywords, object })
        }
        Commands::Delete { target } => commands::delete(notes, delete_args(target)),
        Commands::Merge { target } => commands::merge(notes, merge_args(target)),
        Commands::Shell => Ok(commands::shell(notes)?),
        Commands::Open { object } => commands::open(notes, &object),
        Commands::Completions { shell } => Ok(commands::completions::execute(shell)?),
    }
}

fn delete_args(command: DeleteCommand) -> DeleteArgs {
    match command {
        DeleteCommand::Object { name, yes } => DeleteArgs {
            target: DeleteTarget::Object { name },
            yes,
        },
        DeleteCommand::Item {
            object,
            selection,
            yes,
        } => DeleteArgs {
            target: DeleteTarget::Item { object, selection },
            yes,
        },
        DeleteCommand::Project { project, yes } => DeleteArgs {
            target: DeleteTarget::Project { project },
            yes,
        },
        DeleteCommand::Projects { projects, yes } => DeleteArgs {
            target: DeleteTarget::Projects { projects },
            yes,
        },
    }
}

fn merge_args(command: MergeCommand) -> MergeArgs {
    match command {
        MergeCommand::Objects {
            project,
            objects,
            yes,
            delete_sources,
        } => MergeArgs {
            target: MergeTarget::Objects { project, objects },
            yes,
            delete_sources,
        },
        MergeCommand::Projects {
            projects,
            yes,
            delete_sources,
        } => MergeArgs {
            target: MergeTarget::Projects { projects },
            yes,
            delete_sources,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_joins_trailing_words() {
        let cli = Cli::try_parse_from(["funknotes", "add", "TODO", "Fix", "--the", "header"])
            .unwrap();
        match cli.command {
            Some(Commands::Add { object, text }) => {
                assert_eq!(object, "TODO");
                assert_eq!(text, vec!["Fix", "--the", "header"]);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_merge_splits_comma_list() {
        let cli = Cli::try_parse_from(["funknotes", "merge", "objects", "1", "A,B,C", "--yes"])
            .unwrap();
        match cli.command {
            Some(Commands::Merge {
                target:
                    MergeCommand::Objects {
                        project,
                        objects,
                        yes,
                        delete_sources,
                    },
            }) => {
                assert_eq!(project, "1");
                assert_eq!(objects, vec!["A", "B", "C"]);
                assert!(yes);
                assert!(!delete_sources);
            }
            _ => panic!("expected merge objects"),
        }
    }

    #[test]
    fn test_delete_projects_splits_comma_list() {
        let cli = Cli::try_parse_from(["funknotes", "delete", "projects", "2,Archive", "-y"])
            .unwrap();
        match cli.command {
            Some(Commands::Delete {
                target: DeleteCommand::Projects { projects, yes },
            }) => {
                assert_eq!(projects, vec!["2", "Archive"]);
                assert!(yes);
            }
            _ => panic!("expected delete projects"),
        }
        assert!(Cli::try_parse_from(["funknotes", "delete", "projects"]).is_err());
    }

    #[test]
    fn test_primary_accepts_negative_reference() {
        let cli = Cli::try_parse_from(["funknotes", "primary", "-1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Primary { project }) if project == "-1"));
    }

    #[test]
    fn test_no_command_parses() {
        let cli = Cli::try_parse_from(["funknotes"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_search_requires_keywords() {
        assert!(Cli::try_parse_from(["funknotes", "search"]).is_err());
    }
}
