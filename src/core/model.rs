//! Core data model
//!
//! A note file moves through the pipeline as a `RawNote` (as read from disk)
//! and becomes a `Note` once its date has been resolved and it has passed the
//! recency filter. Files that cannot be read at all surface as `SkipReason`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Category assigned when the front matter carries none
pub const DEFAULT_CATEGORY: &str = "General";

/// A note file as read from disk, before date resolution
#[derive(Debug, Clone)]
pub struct RawNote {
    /// Full path of the source file
    pub path: PathBuf,

    /// File name, used as the title fallback and for the filename-date fallback
    pub file_name: String,

    /// Parsed front matter (a YAML mapping), if the file had a valid header
    pub metadata: Option<serde_yaml::Value>,

    /// Body text; the entire file content when no header was parsed
    pub body: String,
}

impl RawNote {
    /// Front matter `title`, falling back to the file name
    pub fn title(&self) -> String {
        self.metadata_str("title")
            .unwrap_or_else(|| self.file_name.clone())
    }

    /// Front matter `category`, falling back to the default category
    pub fn category(&self) -> String {
        self.metadata_str("category")
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
    }

    /// Look up a string-valued front matter key
    fn metadata_str(&self, key: &str) -> Option<String> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

/// A date-resolved note retained by the recency filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub content: String,
}

/// Why a file was excluded from the scan
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// The file could not be read (I/O error or invalid UTF-8)
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The directory walker failed to produce the entry
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),
}
