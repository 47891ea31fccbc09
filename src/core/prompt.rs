//! Review prompt assembly
//!
//! Builds the single prompt submitted to the generation API: a fixed preamble
//! describing the expected review structure, followed by one delimited block
//! per note.

use crate::core::date::DATE_FORMAT;
use crate::core::model::Note;

/// Body used when a run finds no notes in the window
pub const NO_NOTES_MESSAGE: &str = "No notes found for this week.";

/// Per-note content cap, in characters
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Separator line between note blocks
const NOTE_DELIMITER: &str = "\n---\n";

const PREAMBLE: &str = "You are a personal knowledge assistant. Review the following notes from the past week and provide a comprehensive summary.

Structure the review as follows:
1. **Executive Summary**: High-level overview of what was learned/collected this week.
2. **Key Themes**: Group the notes by themes or categories and summarize the key insights for each.
3. **Actionable Insights**: Identify any actionable takeaways or ideas that emerged.
4. **Connections**: Identify any interesting connections between different notes.

Here are the notes:
";

/// Build the full review prompt for a set of notes.
///
/// Returns `NO_NOTES_MESSAGE` for an empty set so callers can short-circuit
/// without touching the network.
pub fn build_review_prompt(notes: &[Note]) -> String {
    if notes.is_empty() {
        return NO_NOTES_MESSAGE.to_string();
    }

    let mut prompt = String::from(PREAMBLE);

    for note in notes {
        prompt.push_str(NOTE_DELIMITER);
        prompt.push_str(&format!(
            "Title: {}\nCategory: {}\nDate: {}\nContent:\n{}\n",
            note.title,
            note.category,
            note.date.format(DATE_FORMAT),
            truncate_chars(&note.content, MAX_CONTENT_CHARS),
        ));
    }

    prompt
}

/// Take the first `max_chars` characters of a string (UTF-8 safe).
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
