//! Interactive shell session: line editing, argument splitting, and
//! resolution of user-typed names to IDs.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use propdocs_core::error::AppError;
use propdocs_core::result::AppResult;
use propdocs_core::types::{FileId, FolderId, TagId};
use propdocs_service::{DocumentManager, MemoryNotifier};
use propdocs_store::same_name;

use crate::commands::{self, Flow, ShellLine};
use crate::output::{self, OutputFormat};

/// One interactive session over a document manager.
#[derive(Debug)]
pub struct Shell {
    /// The manager all commands act on.
    pub manager: DocumentManager,
    /// Toast buffer, absent when notifications are disabled.
    notifier: Option<Arc<MemoryNotifier>>,
    /// Output format for listings.
    pub format: OutputFormat,
}

impl Shell {
    /// Wraps a manager. Toasts are read from `notifier` after each command.
    pub fn new(
        manager: DocumentManager,
        notifier: Option<Arc<MemoryNotifier>>,
        format: OutputFormat,
    ) -> Self {
        Self {
            manager,
            notifier,
            format,
        }
    }

    /// Prompt showing the selected folder's path.
    fn prompt(&self) -> String {
        let location = self
            .manager
            .view()
            .selected_folder
            .and_then(|id| self.manager.folders().path(id))
            .unwrap_or_default();
        format!("propdocs:/{location}> ")
    }

    /// Runs the read-eval-print loop until `exit` or end of input.
    pub fn run_interactive(&mut self) -> AppResult<()> {
        let mut editor = DefaultEditor::new()
            .map_err(|e| AppError::internal(format!("Failed to start line editor: {e}")))?;
        output::print_info("PropDocs shell. Type 'help' for commands, 'exit' to quit.");

        loop {
            match editor.readline(&self.prompt()) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    if self.execute_line(&line) == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    return Err(AppError::internal(format!("Failed to read input: {e}")));
                }
            }
        }
        info!("Shell session ended");
        Ok(())
    }

    /// Executes every non-comment line of a script file.
    pub fn run_script(&mut self, path: &Path) -> AppResult<()> {
        let script = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                propdocs_core::error::ErrorKind::Io,
                format!("Failed to read script '{}'", path.display()),
                e,
            )
        })?;

        for line in script.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            output::print_info(&format!("{}{trimmed}", self.prompt()));
            if self.execute_line(trimmed) == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Parses and runs one line, printing errors and toasts.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        let words = match split_line(line) {
            Ok(words) => words,
            Err(e) => {
                output::print_error(&e.to_string());
                return Flow::Continue;
            }
        };
        if words.is_empty() {
            return Flow::Continue;
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                return Flow::Continue;
            }
        };

        debug!(command = ?parsed.command, "Executing shell command");
        let flow = match commands::execute(self, parsed.command) {
            Ok(flow) => flow,
            Err(e) => {
                output::print_error(&e.to_string());
                Flow::Continue
            }
        };
        self.flush_notifications();
        flow
    }

    fn flush_notifications(&self) {
        if let Some(notifier) = &self.notifier {
            for notification in notifier.drain() {
                output::print_notification(&notification);
            }
        }
    }

    // ── Resolution ───────────────────────────────────────────────────

    /// Resolves a folder reference.
    ///
    /// Accepts `.` and `..` relative to the selected folder, a path
    /// relative to it, an absolute path (optionally with a leading `/`), or
    /// an ID prefix.
    pub fn resolve_folder(&self, reference: &str) -> AppResult<FolderId> {
        let reference = reference.trim();
        let folders = self.manager.folders();
        let selected = self.manager.view().selected_folder;

        match reference {
            "." => {
                return selected.ok_or_else(|| AppError::validation("No folder selected"));
            }
            ".." => {
                let current = selected.ok_or_else(|| AppError::validation("No folder selected"))?;
                return folders
                    .require(current)?
                    .parent_id
                    .ok_or_else(|| AppError::validation("Already at a root folder"));
            }
            _ => {}
        }

        if !reference.starts_with('/') {
            if let Some(base) = selected.and_then(|id| folders.path(id)) {
                if let Some(folder) = folders.find_by_path(&format!("{base}/{reference}")) {
                    return Ok(folder.id);
                }
            }
        }
        if let Some(folder) = folders.find_by_path(reference) {
            return Ok(folder.id);
        }

        unique(
            folders
                .all()
                .iter()
                .filter(|f| is_id_prefix(reference) && f.id.matches_prefix(reference))
                .map(|f| f.id),
            "folder",
            reference,
        )
    }

    /// Resolves a folder reference, or the selected folder when absent.
    pub fn resolve_folder_or_current(&self, reference: Option<&str>) -> AppResult<FolderId> {
        match reference {
            Some(reference) => self.resolve_folder(reference),
            None => self.resolve_folder("."),
        }
    }

    /// Resolves a file reference.
    ///
    /// Tries an exact name in the selected folder, then an exact name
    /// anywhere (trash included), then an ID prefix. Names win so a file
    /// called `2024` or `cafe` is never shadowed by another file's ID.
    pub fn resolve_file(&self, reference: &str) -> AppResult<FileId> {
        let reference = reference.trim();
        let files = self.manager.files().all();

        if let Some(selected) = self.manager.view().selected_folder {
            let here: Vec<FileId> = files
                .iter()
                .filter(|f| f.folder_id == selected && same_name(&f.name, reference))
                .map(|f| f.id)
                .collect();
            if !here.is_empty() {
                return unique(here.into_iter(), "file", reference);
            }
        }

        let named: Vec<FileId> = files
            .iter()
            .filter(|f| same_name(&f.name, reference))
            .map(|f| f.id)
            .collect();
        if !named.is_empty() {
            return unique(named.into_iter(), "file", reference);
        }

        unique(
            files
                .iter()
                .filter(|f| is_id_prefix(reference) && f.id.matches_prefix(reference))
                .map(|f| f.id),
            "file",
            reference,
        )
    }

    /// Resolves a tag by name or ID prefix.
    pub fn resolve_tag(&self, reference: &str) -> AppResult<TagId> {
        let tags = self.manager.tags();
        if let Some(tag) = tags.find_by_name(reference) {
            return Ok(tag.id);
        }
        unique(
            tags.all()
                .iter()
                .filter(|t| is_id_prefix(reference) && t.id.matches_prefix(reference))
                .map(|t| t.id),
            "tag",
            reference,
        )
    }

    /// Resolves several tag references.
    pub fn resolve_tags(&self, references: &[String]) -> AppResult<Vec<TagId>> {
        references.iter().map(|r| self.resolve_tag(r)).collect()
    }
}

/// Shortest ID prefix accepted as a reference.
const MIN_ID_PREFIX: usize = 4;

/// Whether a reference is long enough to be tried as an ID prefix.
fn is_id_prefix(reference: &str) -> bool {
    reference.chars().filter(|c| *c != '-').count() >= MIN_ID_PREFIX
}

/// Exactly one match, or a not-found / ambiguity error.
fn unique<T>(mut matches: impl Iterator<Item = T>, what: &str, reference: &str) -> AppResult<T> {
    let first = matches
        .next()
        .ok_or_else(|| AppError::not_found(format!("No {what} matches '{reference}'")))?;
    if matches.next().is_some() {
        return Err(AppError::validation(format!(
            "'{reference}' matches more than one {what}; use an ID prefix"
        )));
    }
    Ok(first)
}

/// Splits a command line into words, honoring single and double quotes and
/// backslash escapes.
pub fn split_line(line: &str) -> AppResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), '\\') | (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                    in_word = true;
                }
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(AppError::validation("Unterminated quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
