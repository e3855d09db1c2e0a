//! Folder navigation and management commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use propdocs_core::result::AppResult;
use propdocs_entity::file::{File, format_size};
use propdocs_entity::folder::Folder;
use propdocs_service::file::search::folder_files;
use propdocs_service::{TreeRow, ViewMode};

use crate::output::{self, OutputFormat};
use crate::session::Shell;

/// Arguments for `mkdir`
#[derive(Debug, Args)]
pub struct MkdirArgs {
    /// Folder name
    pub name: String,
    /// Parent folder path or ID prefix (default: current folder)
    #[arg(short, long)]
    pub parent: Option<String>,
    /// Create a new root folder
    #[arg(long, conflicts_with = "parent")]
    pub root: bool,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Short ID
    id: String,
    /// Name
    name: String,
    /// Subfolder count
    folders: usize,
    /// Direct file count
    files: usize,
    /// Protected marker
    protected: bool,
}

/// File display row for list layout
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct FileRow {
    /// Short ID
    pub id: String,
    /// Name
    pub name: String,
    /// File type
    #[tabled(rename = "type")]
    #[serde(rename = "type")]
    pub file_type: String,
    /// Human-readable size
    pub size: String,
    /// Tag names
    pub tags: String,
    /// Last modification
    pub modified: String,
}

/// Compact file card for grid layout
#[derive(Debug, Serialize, Tabled)]
struct FileCard {
    /// Short ID
    id: String,
    /// Name
    name: String,
    /// File type
    #[tabled(rename = "type")]
    #[serde(rename = "type")]
    file_type: String,
}

pub(crate) fn file_row(shell: &Shell, file: &File) -> FileRow {
    let tags = file
        .tags
        .iter()
        .filter_map(|id| shell.manager.tags().get(*id))
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    FileRow {
        id: file.id.short(),
        name: file.name.clone(),
        file_type: file.file_type.to_string(),
        size: format_size(file.size),
        tags,
        modified: file.last_modified.format("%Y-%m-%d %H:%M").to_string(),
    }
}

fn folder_row(shell: &Shell, folder: &Folder) -> FolderRow {
    FolderRow {
        id: folder.id.short(),
        name: folder.name.clone(),
        folders: shell.manager.children(Some(folder.id)).len(),
        files: shell.manager.files().in_folder(folder.id).count(),
        protected: folder.protected,
    }
}

/// `ls`: subfolders of the folder, then its files under the active filters.
pub fn list(shell: &Shell, reference: Option<&str>) -> AppResult<()> {
    let target = match reference {
        Some(reference) => Some(shell.resolve_folder(reference)?),
        None => shell.manager.view().selected_folder,
    };

    let folders: Vec<FolderRow> = shell
        .manager
        .children(target)
        .into_iter()
        .map(|f| folder_row(shell, f))
        .collect();
    output::print_list(&folders, shell.format);

    let Some(target) = target else {
        return Ok(());
    };
    let view = shell.manager.view();
    let files = folder_files(shell.manager.files(), shell.manager.tags(), Some(target), &view.filter);
    match view.mode {
        ViewMode::List => {
            let rows: Vec<FileRow> = files.into_iter().map(|f| file_row(shell, f)).collect();
            output::print_list(&rows, shell.format);
        }
        ViewMode::Grid => {
            let cards: Vec<FileCard> = files
                .into_iter()
                .map(|f| FileCard {
                    id: f.id.short(),
                    name: f.name.clone(),
                    file_type: f.file_type.to_string(),
                })
                .collect();
            output::print_list(&cards, shell.format);
        }
    }
    Ok(())
}

/// `tree`: visible rows of the folder tree.
pub fn tree(shell: &Shell) {
    let rows = shell.manager.tree_rows();
    match shell.format {
        OutputFormat::Json => output::print_item(&rows, shell.format),
        OutputFormat::Table => {
            let selected = shell.manager.view().selected_folder;
            for row in &rows {
                output::print_info(&render_tree_row(row, selected == Some(row.id)));
            }
        }
    }
}

fn render_tree_row(row: &TreeRow, selected: bool) -> String {
    let toggle = match (row.has_children, row.expanded) {
        (false, _) => " ",
        (true, true) => "▾",
        (true, false) => "▸",
    };
    let marker = if selected { "*" } else { " " };
    let lock = if row.protected { " [protected]" } else { "" };
    format!("{marker}{}{toggle} {}{lock}", "  ".repeat(row.depth), row.name)
}

/// `expand` / `collapse`
pub fn expand(shell: &mut Shell, reference: &str, expand: bool) -> AppResult<()> {
    let id = shell.resolve_folder(reference)?;
    if expand {
        shell.manager.expand(id)
    } else {
        shell.manager.collapse(id)
    }
}

/// `cd`: select a folder or clear the selection.
pub fn change(shell: &mut Shell, reference: Option<&str>) -> AppResult<()> {
    let target = reference.map(|r| shell.resolve_folder(r)).transpose()?;
    shell.manager.select_folder(target)
}

/// `pwd`: breadcrumb of the current folder.
pub fn pwd(shell: &Shell) {
    let crumbs: Vec<&str> = shell
        .manager
        .breadcrumb()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    if crumbs.is_empty() {
        output::print_info("No folder selected");
    } else {
        output::print_info(&crumbs.join(" › "));
    }
}

/// `mkdir`
pub fn mkdir(shell: &mut Shell, args: &MkdirArgs) -> AppResult<()> {
    let parent = if args.root {
        None
    } else {
        Some(shell.resolve_folder_or_current(args.parent.as_deref())?)
    };
    shell.manager.create_folder(&args.name, parent)?;
    Ok(())
}

/// `rename-folder`
pub fn rename(shell: &mut Shell, reference: &str, name: &str) -> AppResult<()> {
    let id = shell.resolve_folder(reference)?;
    shell.manager.rename_folder(id, name)
}

/// `rmdir`
pub fn remove(shell: &mut Shell, reference: &str) -> AppResult<()> {
    let id = shell.resolve_folder(reference)?;
    shell.manager.delete_folder(id)?;
    Ok(())
}
