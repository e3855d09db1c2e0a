//! File type classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse file category shown in listings and used by the type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF documents.
    Pdf,
    /// Any `image/*` type.
    Image,
    /// Word-processing documents.
    Document,
    /// Spreadsheets.
    Spreadsheet,
    /// Anything else.
    Other,
}

impl FileType {
    /// All file types in display order.
    pub const ALL: [FileType; 5] = [
        FileType::Pdf,
        FileType::Image,
        FileType::Document,
        FileType::Spreadsheet,
        FileType::Other,
    ];

    /// Classify a MIME type.
    ///
    /// Rules are checked in order: `image/` prefix, exact `application/pdf`,
    /// then `word`/`document` and `sheet`/`excel` substrings.
    pub fn from_mime(mime_type: &str) -> Self {
        let mime = mime_type.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Self::Image
        } else if mime == "application/pdf" {
            Self::Pdf
        } else if mime.contains("word") || mime.contains("document") {
            Self::Document
        } else if mime.contains("sheet") || mime.contains("excel") {
            Self::Spreadsheet
        } else {
            Self::Other
        }
    }

    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Document => "document",
            Self::Spreadsheet => "spreadsheet",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown file type '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_prefix() {
        assert_eq!(FileType::from_mime("image/jpeg"), FileType::Image);
        assert_eq!(FileType::from_mime("image/png"), FileType::Image);
    }

    #[test]
    fn test_pdf_exact_match() {
        assert_eq!(FileType::from_mime("application/pdf"), FileType::Pdf);
        assert_eq!(FileType::from_mime("application/pdf+x"), FileType::Other);
    }

    #[test]
    fn test_office_types() {
        assert_eq!(
            FileType::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            FileType::Document
        );
        assert_eq!(FileType::from_mime("application/msword"), FileType::Document);
        assert_eq!(FileType::from_mime("application/vnd.ms-excel"), FileType::Spreadsheet);
    }

    #[test]
    fn test_rule_order_prefers_document_over_sheet() {
        // The OOXML spreadsheet type contains "officedocument" as well as "sheet".
        assert_eq!(
            FileType::from_mime("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            FileType::Document
        );
    }

    #[test]
    fn test_fallthrough() {
        assert_eq!(FileType::from_mime("text/plain"), FileType::Other);
        assert_eq!(FileType::from_mime(""), FileType::Other);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Image".parse::<FileType>(), Ok(FileType::Image));
        assert!("video".parse::<FileType>().is_err());
    }
}
