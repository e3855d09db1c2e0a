//! File commands: upload, trash lifecycle, and edits.

use clap::Args;
use serde::Serialize;

use propdocs_core::result::AppResult;
use propdocs_core::types::FolderId;
use propdocs_entity::file::{RawUpload, format_size};

use super::folder::{FileRow, file_row};
use crate::output;
use crate::session::Shell;

/// Arguments for `upload`
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// File names to upload
    #[arg(required = true)]
    pub names: Vec<String>,
    /// Target folder path or ID prefix (default: current folder)
    #[arg(long)]
    pub to: Option<String>,
    /// Size in bytes applied to every file
    #[arg(long, default_value_t = 0)]
    pub size: u64,
    /// MIME type (default: guessed from the extension)
    #[arg(long)]
    pub mime: Option<String>,
    /// Tag to attach (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

/// Detailed view of one file
#[derive(Debug, Serialize)]
struct FileDetails {
    id: String,
    name: String,
    folder: String,
    file_type: String,
    mime_type: String,
    size: String,
    tags: Vec<String>,
    version: u32,
    uploaded: String,
    modified: String,
    deleted: bool,
    restores_to: Option<String>,
}

/// MIME type for a file name's extension.
pub fn guess_mime(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "csv" => "text/csv",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// `upload`
pub fn upload(shell: &mut Shell, args: &UploadArgs) -> AppResult<()> {
    let folder = shell.resolve_folder_or_current(args.to.as_deref())?;
    let tags = shell.resolve_tags(&args.tags)?;
    let raw = args
        .names
        .iter()
        .map(|name| {
            let mime = args.mime.clone().unwrap_or_else(|| guess_mime(name).to_string());
            RawUpload::new(name.clone(), args.size, mime)
        })
        .collect();
    shell.manager.upload_files(raw, folder, &tags)?;
    Ok(())
}

/// `rm`
pub fn remove(shell: &mut Shell, reference: &str) -> AppResult<()> {
    let id = shell.resolve_file(reference)?;
    shell.manager.delete_file(id)
}

/// `restore`
pub fn restore(shell: &mut Shell, reference: &str) -> AppResult<()> {
    let id = shell.resolve_file(reference)?;
    shell.manager.restore_file(id)?;
    Ok(())
}

/// `purge`
pub fn purge(shell: &mut Shell, reference: &str) -> AppResult<()> {
    let id = shell.resolve_file(reference)?;
    shell.manager.permanent_delete_file(id)?;
    Ok(())
}

/// `mv`
pub fn move_to(shell: &mut Shell, reference: &str, folder: &str) -> AppResult<()> {
    let id = shell.resolve_file(reference)?;
    let target = shell.resolve_folder(folder)?;
    shell.manager.move_file(id, target)
}

/// `rename`
pub fn rename(shell: &mut Shell, reference: &str, name: &str) -> AppResult<()> {
    let id = shell.resolve_file(reference)?;
    shell.manager.rename_file(id, name)
}

/// `info`
pub fn info(shell: &Shell, reference: &str) -> AppResult<()> {
    let id = shell.resolve_file(reference)?;
    let file = shell.manager.files().require(id)?;
    let folder_path = |folder: FolderId| {
        shell
            .manager
            .folder_path(folder)
            .unwrap_or_else(|_| folder.to_string())
    };

    let details = FileDetails {
        id: file.id.to_string(),
        name: file.name.clone(),
        folder: folder_path(file.folder_id),
        file_type: file.file_type.to_string(),
        mime_type: file.mime_type.clone(),
        size: format_size(file.size),
        tags: file
            .tags
            .iter()
            .filter_map(|t| shell.manager.tags().get(*t))
            .map(|t| t.name.clone())
            .collect(),
        version: file.version,
        uploaded: file.upload_date.to_rfc3339(),
        modified: file.last_modified.to_rfc3339(),
        deleted: file.is_deleted(),
        restores_to: file.previous_folder_id().map(folder_path),
    };
    output::print_item(&details, shell.format);
    Ok(())
}

/// `trash`
pub fn trash(shell: &Shell) {
    let rows: Vec<FileRow> = shell
        .manager
        .trash_files()
        .into_iter()
        .map(|f| file_row(shell, f))
        .collect();
    output::print_list(&rows, shell.format);
}

/// `empty-trash`
pub fn empty_trash(shell: &mut Shell) {
    let purged = shell.manager.empty_trash();
    if purged.is_empty() {
        output::print_info("Trash is already empty");
    }
}
