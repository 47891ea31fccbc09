//! Weekly review flow
//!
//! Steps:
//! 1. Scan the notes directory (per-file failures logged and skipped)
//! 2. Filter to notes dated within the trailing window
//! 3. Assemble the review prompt and flag its estimated size
//! 4. Submit to Gemini; any failure becomes the review body
//! 5. Write the dated review file, overwriting a same-day run

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::gemini::{GeminiClient, GeminiConfig};
use crate::backends::scan::scan_notes;
use crate::core::date::{resolve_note_date, DATE_FORMAT};
use crate::core::model::{Note, RawNote};
use crate::core::prompt::build_review_prompt;
use crate::core::render::{OutputFormat, Renderer};
use crate::core::tokenizer::{estimate_tokens, PROMPT_TOKEN_WARN_THRESHOLD};

/// Default trailing window, in days
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Options shared by the review command variants
#[derive(Debug, Clone)]
pub struct ReviewOptions {
    pub notes_dir: PathBuf,
    pub output_dir: PathBuf,
    pub days: i64,
}

/// Run the full review pipeline.
pub async fn run_review(opts: &ReviewOptions, config: GeminiConfig) -> Result<()> {
    println!("Starting weekly review...");

    let Some(prompt) = assemble_prompt(&opts.notes_dir, opts.days) else {
        return Ok(());
    };

    let client = GeminiClient::new(config);
    let body = match client.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("review generation failed: {}", e);
            format!("Error generating review: {}", e)
        }
    };

    let path = write_review(&opts.output_dir, Local::now().date_naive(), &body)?;
    println!("Review saved to {}", path.display());

    Ok(())
}

/// Assemble and print the prompt without contacting the API.
pub fn run_review_dry(opts: &ReviewOptions) -> Result<()> {
    println!("Starting weekly review...");

    if let Some(prompt) = assemble_prompt(&opts.notes_dir, opts.days) {
        println!("{}", prompt);
    }

    Ok(())
}

/// List the notes the review would include.
pub fn run_scan(notes_dir: &Path, days: i64, format: OutputFormat) -> Result<()> {
    let notes = collect_recent_notes(notes_dir, Local::now().naive_local(), days);

    let renderer = Renderer::new(format);
    println!("{}", renderer.render(&notes));

    Ok(())
}

/// Scan and filter, then build the prompt. Returns None on the empty branch
/// (after printing the notice) so callers never touch the network for it.
fn assemble_prompt(notes_dir: &Path, days: i64) -> Option<String> {
    let notes = collect_recent_notes(notes_dir, Local::now().naive_local(), days);
    println!("Found {} notes from the last {} days.", notes.len(), days);

    if notes.is_empty() {
        println!("No notes to review.");
        return None;
    }

    let prompt = build_review_prompt(&notes);
    flag_prompt_size(&prompt);
    Some(prompt)
}

/// Scan the notes directory, log skipped files, and filter to the window.
pub fn collect_recent_notes(notes_dir: &Path, now: NaiveDateTime, window_days: i64) -> Vec<Note> {
    let raw: Vec<RawNote> = scan_notes(notes_dir)
        .into_iter()
        .filter_map(|outcome| match outcome {
            Ok(note) => Some(note),
            Err(reason) => {
                warn!("skipping note: {}", reason);
                None
            }
        })
        .collect();

    filter_recent(&raw, now, window_days)
}

/// Keep notes whose resolved date (at midnight) falls within the window.
///
/// Notes without a resolvable date are dropped silently. Order is the walk
/// order of the input; no sort is applied.
pub fn filter_recent(raw_notes: &[RawNote], now: NaiveDateTime, window_days: i64) -> Vec<Note> {
    let cutoff = now - Duration::days(window_days);

    raw_notes
        .iter()
        .filter_map(|raw| {
            let date = resolve_note_date(raw.metadata.as_ref(), &raw.file_name)?;
            let midnight = date.and_hms_opt(0, 0, 0)?;
            if midnight < cutoff {
                return None;
            }
            Some(Note {
                title: raw.title(),
                category: raw.category(),
                date,
                content: raw.body.trim().to_string(),
            })
        })
        .collect()
}

/// Write the dated review file, creating the output directory if needed.
pub fn write_review(output_dir: &Path, today: NaiveDate, body: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let date_str = today.format(DATE_FORMAT).to_string();
    let path = output_dir.join(format!("{}-Weekly-Review.md", date_str));
    let document = format!("# Weekly Review - {}\n\n{}", date_str, body);

    fs::write(&path, document).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn flag_prompt_size(prompt: &str) {
    let tokens = estimate_tokens(prompt);
    info!("assembled prompt: ~{} tokens", tokens);
    if tokens > PROMPT_TOKEN_WARN_THRESHOLD {
        warn!(
            "prompt estimate {} tokens exceeds advisory threshold {}; the provider may reject it",
            tokens, PROMPT_TOKEN_WARN_THRESHOLD
        );
    }
}
