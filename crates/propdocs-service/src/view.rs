//! Browsing state owned by the document manager.

use serde::{Deserialize, Serialize};

use propdocs_core::types::FolderId;

use crate::file::FileFilter;

/// How the file list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card grid.
    #[default]
    Grid,
    /// Detail rows.
    List,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(format!("unknown view mode '{other}'")),
        }
    }
}

/// Selected folder, active filters, and layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Folder whose files are listed. Nothing is listed when unset.
    pub selected_folder: Option<FolderId>,
    /// Search and filters.
    pub filter: FileFilter,
    /// Layout.
    pub mode: ViewMode,
}
