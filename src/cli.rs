//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::backends::gemini::{ConfigError, GeminiConfig, DEFAULT_MODEL};
use crate::core::render::OutputFormat;
use crate::flows::review::{ReviewOptions, DEFAULT_WINDOW_DAYS};

/// digestif - digest a week of dated Markdown notes into an AI-generated review.
#[derive(Parser, Debug)]
#[command(name = "digestif")]
#[command(
    author,
    version,
    about,
    long_about = r#"digestif scans a notes directory for Markdown files, keeps the ones dated
within a trailing window, and asks the Gemini API to synthesize a weekly
review, saved as a dated Markdown file.

Notes may carry a YAML front matter header (title, category, date); a note
without one falls back to its file name for both title and date.

The GEMINI_API_KEY environment variable supplies the API credential. Without
it, `review` prints a warning and exits cleanly; `scan` and `--dry-run` never
need it.

Examples:
    digestif review
    digestif review --days 14 --model gemini-1.5-pro
    digestif review --dry-run
    digestif scan --format md
"#
)]
pub struct Cli {
    /// Output format for listings (jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for the scan listing.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\n\
Tip: Prefer jsonl when piping into other tools."
    )]
    pub format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the weekly review and save it to the output directory.
    #[command(
        long_about = "Run the full pipeline: scan, filter to the trailing window, build the\n\
summary prompt, call the Gemini API, and write\n\
<output-dir>/<YYYY-MM-DD>-Weekly-Review.md (overwriting a same-day file).\n\n\
API failures never abort the run: the error text becomes the review body.\n\n\
Examples:\n\
  digestif review\n\
  digestif review --days 14 --output-dir reviews\n\
  digestif review --dry-run\n"
    )]
    Review {
        /// Trailing window size in days.
        #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS, value_name = "N")]
        days: i64,

        /// Directory scanned (recursively) for .md note files.
        #[arg(long, default_value = "notes", value_name = "PATH")]
        notes_dir: PathBuf,

        /// Directory the dated review file is written to.
        #[arg(long, default_value = "weekly_reviews", value_name = "PATH")]
        output_dir: PathBuf,

        /// Gemini model identifier.
        #[arg(long, default_value = DEFAULT_MODEL, value_name = "NAME")]
        model: String,

        /// Assemble and print the prompt without calling the API or writing a file.
        #[arg(
            long,
            long_help = "Assemble and print the prompt, then stop.\n\n\
No network call is made, no file is written, and no API credential is needed."
        )]
        dry_run: bool,
    },

    /// List the notes the review would include, without calling the API.
    #[command(
        long_about = "Scan and filter exactly as `review` does, then print the retained notes\n\
(title, category, resolved date, content) in the selected --format.\n\n\
Examples:\n\
  digestif scan\n\
  digestif scan --days 30 --format md\n"
    )]
    Scan {
        /// Trailing window size in days.
        #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS, value_name = "N")]
        days: i64,

        /// Directory scanned (recursively) for .md note files.
        #[arg(long, default_value = "notes", value_name = "PATH")]
        notes_dir: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();

    match cli.command {
        Commands::Review {
            days,
            notes_dir,
            output_dir,
            model,
            dry_run,
        } => {
            let opts = ReviewOptions {
                notes_dir,
                output_dir,
                days,
            };

            if dry_run {
                return crate::flows::review::run_review_dry(&opts);
            }

            // The credential gate comes before any file scanning.
            let config = match GeminiConfig::from_env(&model) {
                Ok(config) => config,
                Err(ConfigError::MissingApiKey) => {
                    println!("Warning: GEMINI_API_KEY not set. Skipping review generation.");
                    return Ok(());
                }
            };

            crate::flows::review::run_review(&opts, config).await
        }

        Commands::Scan { days, notes_dir } => {
            crate::flows::review::run_scan(&notes_dir, days, format)
        }
    }
}
