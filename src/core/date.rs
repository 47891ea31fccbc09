//! Note date resolution
//!
//! A note's effective date comes from an ordered chain of strategies, each a
//! pure function returning an optional date:
//!
//! 1. the front matter `date` value
//! 2. the first 10 characters of the file name
//!
//! The first success wins. When no strategy succeeds the note has no date and
//! is excluded downstream.

use chrono::NaiveDate;

/// Calendar date format used throughout (front matter, filenames, output)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve a date from a front matter `date` value.
///
/// Accepts a plain `YYYY-MM-DD` string; a longer value (e.g. a timestamp like
/// `2024-06-01T09:30:00`) is retried on its first 10 characters.
pub fn date_from_metadata(metadata: &serde_yaml::Value) -> Option<NaiveDate> {
    let raw = metadata.get("date")?.as_str()?;
    parse_date_prefix(raw)
}

/// Resolve a date from the first 10 characters of a file name.
pub fn date_from_filename(file_name: &str) -> Option<NaiveDate> {
    let prefix = file_name.get(..10)?;
    NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()
}

/// Apply the resolution chain: metadata first, then filename.
pub fn resolve_note_date(
    metadata: Option<&serde_yaml::Value>,
    file_name: &str,
) -> Option<NaiveDate> {
    metadata
        .and_then(date_from_metadata)
        .or_else(|| date_from_filename(file_name))
}

/// Parse `YYYY-MM-DD`, tolerating trailing content after the date.
fn parse_date_prefix(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date);
    }
    let prefix = s.get(..10)?;
    NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(yaml: &str) -> serde_yaml::Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_from_metadata_plain() {
        let m = metadata("date: 2024-06-01");
        assert_eq!(date_from_metadata(&m), Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_date_from_metadata_quoted() {
        let m = metadata("date: \"2024-06-01\"");
        assert_eq!(date_from_metadata(&m), Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_date_from_metadata_timestamp() {
        let m = metadata("date: 2024-06-01T09:30:00");
        assert_eq!(date_from_metadata(&m), Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_date_from_metadata_garbage() {
        let m = metadata("date: next tuesday");
        assert_eq!(date_from_metadata(&m), None);
    }

    #[test]
    fn test_date_from_metadata_missing_key() {
        let m = metadata("title: No Date Here");
        assert_eq!(date_from_metadata(&m), None);
    }

    #[test]
    fn test_date_from_filename() {
        assert_eq!(
            date_from_filename("2024-06-01-meeting.md"),
            Some(date(2024, 6, 1))
        );
    }

    #[test]
    fn test_date_from_filename_rejects_non_dates() {
        assert_eq!(date_from_filename("meeting-notes.md"), None);
        assert_eq!(date_from_filename("2024-13-01-bad.md"), None);
        assert_eq!(date_from_filename("short.md"), None);
    }

    #[test]
    fn test_resolve_prefers_metadata() {
        let m = metadata("date: 2024-05-20");
        let resolved = resolve_note_date(Some(&m), "2024-06-01-meeting.md");
        assert_eq!(resolved, Some(date(2024, 5, 20)));
    }

    #[test]
    fn test_resolve_falls_back_to_filename() {
        let m = metadata("title: No Date");
        let resolved = resolve_note_date(Some(&m), "2024-06-01-meeting.md");
        assert_eq!(resolved, Some(date(2024, 6, 1)));

        let resolved = resolve_note_date(None, "2024-06-01-meeting.md");
        assert_eq!(resolved, Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_resolve_unparseable_metadata_falls_back() {
        let m = metadata("date: soonish");
        let resolved = resolve_note_date(Some(&m), "2024-06-01-meeting.md");
        assert_eq!(resolved, Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_resolve_nothing_resolves() {
        assert_eq!(resolve_note_date(None, "untitled.md"), None);
    }
}
