//! Note scanning backend
//!
//! Walks the notes directory with the ignore crate and reads every `.md`
//! file into a RawNote. Per-file failures become SkipReason entries so the
//! caller decides how to log them; a missing root yields an empty set.

use ignore::WalkBuilder;
use log::info;
use std::fs;
use std::path::Path;

use crate::core::frontmatter;
use crate::core::model::{RawNote, SkipReason};

/// Extension of files considered notes
const NOTE_EXTENSION: &str = "md";

/// Scan a notes directory for Markdown files.
///
/// Returns one entry per candidate file, in walk order: `Ok(RawNote)` for a
/// readable file (front matter split applied, parse failures degraded to
/// body-only) or `Err(SkipReason)` for a file that could not be read.
pub fn scan_notes(root: &Path) -> Vec<Result<RawNote, SkipReason>> {
    if !root.exists() {
        info!("notes directory '{}' does not exist", root.display());
        return Vec::new();
    }

    let mut results = Vec::new();

    for entry in WalkBuilder::new(root).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                results.push(Err(SkipReason::Walk(e)));
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(NOTE_EXTENSION) {
            continue;
        }

        results.push(read_note(path));
    }

    results
}

/// Read a single note file and split its front matter.
fn read_note(path: &Path) -> Result<RawNote, SkipReason> {
    let content = fs::read_to_string(path).map_err(|source| SkipReason::Read {
        path: path.display().to_string(),
        source,
    })?;

    let (metadata, body) = frontmatter::extract(path, &content);

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(RawNote {
        path: path.to_path_buf(),
        file_name,
        metadata,
        body,
    })
}
