//! Tag commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use propdocs_core::result::AppResult;
use propdocs_entity::tag::TagColor;

use crate::output;
use crate::session::Shell;

/// Arguments for `tag`
#[derive(Debug, Args)]
pub struct TagArgs {
    /// Tag subcommand
    #[command(subcommand)]
    pub command: TagCommand,
}

/// Tag subcommands
#[derive(Debug, Subcommand)]
pub enum TagCommand {
    /// List tags
    List,
    /// Create a tag
    Add {
        /// Tag name
        name: String,
        /// blue, green, amber, or red (default: random)
        #[arg(long)]
        color: Option<TagColor>,
    },
    /// Delete a tag and detach it from every file
    Rm {
        /// Tag name or ID prefix
        tag: String,
    },
    /// Replace a file's tags (no tags clears them)
    Set {
        /// File name or ID prefix
        file: String,
        /// Tag names or ID prefixes
        tags: Vec<String>,
    },
}

/// Tag display row
#[derive(Debug, Serialize, Tabled)]
struct TagRow {
    /// Short ID
    id: String,
    /// Name
    name: String,
    /// Palette color
    color: String,
    /// Hex value
    hex: String,
    /// Files carrying the tag
    files: usize,
}

/// Execute tag commands
pub fn execute(shell: &mut Shell, command: TagCommand) -> AppResult<()> {
    match command {
        TagCommand::List => {
            let rows: Vec<TagRow> = shell
                .manager
                .tags()
                .all()
                .iter()
                .map(|tag| TagRow {
                    id: tag.id.short(),
                    name: tag.name.clone(),
                    color: tag.color.to_string(),
                    hex: tag.color.hex().to_string(),
                    files: shell
                        .manager
                        .files()
                        .all()
                        .iter()
                        .filter(|f| f.has_tag(tag.id))
                        .count(),
                })
                .collect();
            output::print_list(&rows, shell.format);
        }
        TagCommand::Add { name, color } => {
            match color {
                Some(color) => shell.manager.add_tag_with_color(&name, color)?,
                None => shell.manager.add_tag(&name)?,
            };
        }
        TagCommand::Rm { tag } => {
            let id = shell.resolve_tag(&tag)?;
            shell.manager.delete_tag(id)?;
        }
        TagCommand::Set { file, tags } => {
            let id = shell.resolve_file(&file)?;
            let tags = shell.resolve_tags(&tags)?;
            shell.manager.update_file_tags(id, &tags)?;
        }
    }
    Ok(())
}
