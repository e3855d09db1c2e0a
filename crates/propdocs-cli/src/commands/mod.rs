//! CLI and shell command definitions and dispatch.

pub mod file;
pub mod folder;
pub mod tag;
pub mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use propdocs_core::result::AppResult;

use crate::output::OutputFormat;
use crate::session::Shell;

/// PropDocs: property document manager shell
#[derive(Debug, Parser)]
#[command(name = "propdocs", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Run the commands in this file instead of starting an interactive shell
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Start with an empty store even if demo seeding is configured
    #[arg(long)]
    pub empty: bool,
}

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Leave the shell.
    Exit,
}

/// One line typed into the shell.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, name = "", disable_version_flag = true)]
pub struct ShellLine {
    /// Command to run
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Shell commands
#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// List subfolders and files of a folder (default: current)
    Ls {
        /// Folder path or ID prefix
        folder: Option<String>,
    },
    /// Show the folder tree
    Tree,
    /// Expand a folder in the tree
    Expand {
        /// Folder path or ID prefix
        folder: String,
    },
    /// Collapse a folder in the tree
    Collapse {
        /// Folder path or ID prefix
        folder: String,
    },
    /// Select a folder (no argument clears the selection)
    Cd {
        /// Folder path or ID prefix
        folder: Option<String>,
    },
    /// Print the breadcrumb of the current folder
    Pwd,
    /// Create a folder
    Mkdir(folder::MkdirArgs),
    /// Rename a folder
    RenameFolder {
        /// Folder path or ID prefix
        folder: String,
        /// New name
        name: String,
    },
    /// Delete a folder, its subfolders, and move their files to Trash
    Rmdir {
        /// Folder path or ID prefix
        folder: String,
    },
    /// Upload files into a folder (default: current)
    Upload(file::UploadArgs),
    /// Move a file to Trash
    Rm {
        /// File name or ID prefix
        file: String,
    },
    /// Restore a file from Trash
    Restore {
        /// File name or ID prefix
        file: String,
    },
    /// Permanently delete a file
    Purge {
        /// File name or ID prefix
        file: String,
    },
    /// Move a file to another folder
    Mv {
        /// File name or ID prefix
        file: String,
        /// Target folder path or ID prefix
        folder: String,
    },
    /// Rename a file
    Rename {
        /// File name or ID prefix
        file: String,
        /// New name
        name: String,
    },
    /// Show file details
    Info {
        /// File name or ID prefix
        file: String,
    },
    /// List files in Trash
    Trash,
    /// Permanently delete everything in Trash
    EmptyTrash,
    /// Tag management
    Tag(tag::TagArgs),
    /// Set the search text (no argument clears it)
    Search {
        /// Text matched against file and tag names
        text: Option<String>,
    },
    /// Set tag and type filters
    Filter(view::FilterArgs),
    /// Switch between grid and list layout
    View {
        /// grid or list
        mode: propdocs_service::ViewMode,
    },
    /// Show store counters
    Stats,
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Runs one shell command against the session.
pub fn execute(shell: &mut Shell, command: ShellCommand) -> AppResult<Flow> {
    match command {
        ShellCommand::Ls { folder } => folder::list(shell, folder.as_deref())?,
        ShellCommand::Tree => folder::tree(shell),
        ShellCommand::Expand { folder } => folder::expand(shell, &folder, true)?,
        ShellCommand::Collapse { folder } => folder::expand(shell, &folder, false)?,
        ShellCommand::Cd { folder } => folder::change(shell, folder.as_deref())?,
        ShellCommand::Pwd => folder::pwd(shell),
        ShellCommand::Mkdir(args) => folder::mkdir(shell, &args)?,
        ShellCommand::RenameFolder { folder, name } => folder::rename(shell, &folder, &name)?,
        ShellCommand::Rmdir { folder } => folder::remove(shell, &folder)?,
        ShellCommand::Upload(args) => file::upload(shell, &args)?,
        ShellCommand::Rm { file } => file::remove(shell, &file)?,
        ShellCommand::Restore { file } => file::restore(shell, &file)?,
        ShellCommand::Purge { file } => file::purge(shell, &file)?,
        ShellCommand::Mv { file, folder } => file::move_to(shell, &file, &folder)?,
        ShellCommand::Rename { file, name } => file::rename(shell, &file, &name)?,
        ShellCommand::Info { file } => file::info(shell, &file)?,
        ShellCommand::Trash => file::trash(shell),
        ShellCommand::EmptyTrash => file::empty_trash(shell),
        ShellCommand::Tag(args) => tag::execute(shell, args.command)?,
        ShellCommand::Search { text } => view::search(shell, text),
        ShellCommand::Filter(args) => view::filter(shell, &args)?,
        ShellCommand::View { mode } => view::set_mode(shell, mode),
        ShellCommand::Stats => view::stats(shell),
        ShellCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_line_parses_kebab_commands() {
        let line = ShellLine::try_parse_from(["rename-folder", "Leases", "Signed Leases"]).unwrap();
        assert!(matches!(line.command, ShellCommand::RenameFolder { .. }));

        let line = ShellLine::try_parse_from(["empty-trash"]).unwrap();
        assert!(matches!(line.command, ShellCommand::EmptyTrash));

        let line = ShellLine::try_parse_from(["quit"]).unwrap();
        assert!(matches!(line.command, ShellCommand::Exit));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["propdocs"]).unwrap();
        assert_eq!(cli.config_dir, PathBuf::from("config"));
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.script.is_none());
    }
}
