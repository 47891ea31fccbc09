//! Renderer module
//!
//! Renders a note listing to different output formats: jsonl, json, md

use crate::core::model::Note;

/// Output format for the scan listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Renderer for note listings
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render notes to a string
    pub fn render(&self, notes: &[Note]) -> String {
        match self.format {
            OutputFormat::Jsonl => self.render_jsonl(notes),
            OutputFormat::Json => self.render_json(notes),
            OutputFormat::Markdown => self.render_markdown(notes),
        }
    }

    /// Render as JSON Lines (one JSON object per note)
    fn render_jsonl(&self, notes: &[Note]) -> String {
        notes
            .iter()
            .filter_map(|note| serde_json::to_string(note).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as a single JSON array
    fn render_json(&self, notes: &[Note]) -> String {
        serde_json::to_string_pretty(notes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Render as Markdown
    fn render_markdown(&self, notes: &[Note]) -> String {
        let mut output = String::new();

        output.push_str("## Notes\n\n");
        for note in notes {
            output.push_str(&format!(
                "- **{}** ({}) {}\n",
                note.title, note.category, note.date
            ));
        }

        output
    }
}
