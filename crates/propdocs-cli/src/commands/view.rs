//! Search, filter, layout, and summary commands.

use clap::Args;

use propdocs_core::result::AppResult;
use propdocs_entity::file::{FileType, format_size};
use propdocs_service::{TagFilter, TypeFilter, ViewMode};

use crate::output;
use crate::session::Shell;

/// Arguments for `filter`
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Only files carrying this tag ("all" clears)
    #[arg(long)]
    pub tag: Option<String>,
    /// Only files of this type: pdf, image, document, spreadsheet, other ("all" clears)
    #[arg(long = "type")]
    pub file_type: Option<String>,
    /// Clear search text and both filters
    #[arg(long, conflicts_with_all = ["tag", "file_type"])]
    pub clear: bool,
}

/// `search`
pub fn search(shell: &mut Shell, text: Option<String>) {
    shell.manager.set_search(text.unwrap_or_default());
}

/// `filter`
pub fn filter(shell: &mut Shell, args: &FilterArgs) -> AppResult<()> {
    if args.clear {
        shell.manager.clear_filters();
        describe_filters(shell);
        return Ok(());
    }

    if let Some(tag) = &args.tag {
        let filter = if tag.eq_ignore_ascii_case("all") {
            TagFilter::All
        } else {
            TagFilter::Tag(shell.resolve_tag(tag)?)
        };
        shell.manager.set_tag_filter(filter)?;
    }

    if let Some(file_type) = &args.file_type {
        let filter = if file_type.eq_ignore_ascii_case("all") {
            TypeFilter::All
        } else {
            let parsed: FileType = file_type
                .parse()
                .map_err(propdocs_core::error::AppError::validation)?;
            TypeFilter::Type(parsed)
        };
        shell.manager.set_type_filter(filter);
    }

    describe_filters(shell);
    Ok(())
}

fn describe_filters(shell: &Shell) {
    let filter = &shell.manager.view().filter;
    if filter.is_empty() {
        output::print_info("No filters active");
        return;
    }
    let tag = match filter.tag {
        TagFilter::All => "all".to_string(),
        TagFilter::Tag(id) => shell
            .manager
            .tags()
            .get(id)
            .map_or_else(|| id.short(), |t| t.name.clone()),
    };
    let file_type = match filter.file_type {
        TypeFilter::All => "all".to_string(),
        TypeFilter::Type(t) => t.to_string(),
    };
    output::print_info(&format!(
        "search: '{}'  tag: {tag}  type: {file_type}",
        filter.search
    ));
}

/// `view`
pub fn set_mode(shell: &mut Shell, mode: ViewMode) {
    shell.manager.set_view_mode(mode);
}

/// `stats`
pub fn stats(shell: &Shell) {
    let stats = shell.manager.stats();
    match shell.format {
        crate::output::OutputFormat::Json => output::print_item(&stats, shell.format),
        crate::output::OutputFormat::Table => {
            output::print_kv("Folders", &stats.folders.to_string());
            output::print_kv("Files", &stats.files.to_string());
            output::print_kv("Active files", &stats.active_files.to_string());
            output::print_kv("In Trash", &stats.trashed_files.to_string());
            output::print_kv("Tags", &stats.tags.to_string());
            output::print_kv("Total size", &format_size(stats.total_bytes));
        }
    }
}
