//! YAML front matter handling
//!
//! A note may begin with a `---` delimited header:
//!
//! ```text
//! ---
//! title: "Some note"
//! category: Work
//! date: 2024-06-01
//! ---
//! body...
//! ```
//!
//! Splitting and parsing are lenient: any failure degrades to "no metadata,
//! the whole file is the body", so a malformed header never costs us the
//! note content.

use log::warn;
use std::path::Path;

/// Split a leading front matter header from the body.
///
/// Returns `Some((header, body))` only when the content starts with the `---`
/// delimiter and splits into at least three parts. The header is the text
/// between the first two delimiters; the body is everything after the second.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    if !content.starts_with("---") {
        return None;
    }

    let mut parts = content.splitn(3, "---");
    let _leading = parts.next()?;
    let header = parts.next()?;
    let body = parts.next()?;
    Some((header, body))
}

/// Parse a front matter header into a YAML mapping.
///
/// An empty header is fine (no metadata); anything else that is not a
/// parseable YAML mapping counts as a parse failure.
pub fn parse_metadata(header: &str) -> Result<Option<serde_yaml::Value>, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(header)?;
    match value {
        serde_yaml::Value::Null => Ok(None),
        v if v.is_mapping() => Ok(Some(v)),
        // Force a typed error through a failing conversion to a mapping
        v => serde_yaml::from_value::<serde_yaml::Mapping>(v)
            .map(|m| Some(serde_yaml::Value::Mapping(m))),
    }
}

/// Extract `(metadata, body)` from full note content.
///
/// On a missing delimiter the body is the whole content; on a parse failure
/// the failure is logged and the body is likewise the whole content.
pub fn extract(path: &Path, content: &str) -> (Option<serde_yaml::Value>, String) {
    match split_front_matter(content) {
        Some((header, body)) => match parse_metadata(header) {
            Ok(metadata) => (metadata, body.to_string()),
            Err(e) => {
                warn!("error parsing {}: {}", path.display(), e);
                (None, content.to_string())
            }
        },
        None => (None, content.to_string()),
    }
}
