//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use persona_domain::ContentItem;
use persona_generator::PipelineOutcome;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Width of the text preview column in content tables.
const PREVIEW_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format fetched content items.
    pub fn format_content(&self, items: &[ContentItem]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
            OutputFormat::Text => Ok(self.format_content_table(items)),
            OutputFormat::Quiet => Ok(items
                .iter()
                .map(|item| item.source_url())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format content as a table.
    fn format_content_table(&self, items: &[ContentItem]) -> String {
        if items.is_empty() {
            return self.colorize("No content found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Created", "Kind", "Text", "Source"]);

        for item in items {
            builder.push_record([
                item.created_at().format("%Y-%m-%d %H:%M").to_string(),
                item.kind().to_string(),
                preview(item.text()),
                item.source_url().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the result of a generate run.
    ///
    /// Only called for generated or saved outcomes; the command reports
    /// the other variants itself.
    pub fn format_outcome(&self, outcome: &PipelineOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_outcome_json(outcome),
            OutputFormat::Quiet => Ok(match outcome {
                PipelineOutcome::Saved { path, .. } => path.display().to_string(),
                other => other.persona().unwrap_or_default().to_string(),
            }),
            OutputFormat::Text => Ok(self.format_outcome_text(outcome)),
        }
    }

    fn format_outcome_json(&self, outcome: &PipelineOutcome) -> Result<String> {
        let value = match outcome {
            PipelineOutcome::NoContent { username } => serde_json::json!({
                "status": "no_content",
                "username": username,
            }),
            PipelineOutcome::Failed {
                username,
                item_count,
                detail,
            } => serde_json::json!({
                "status": "failed",
                "username": username,
                "item_count": item_count,
                "error": detail,
            }),
            PipelineOutcome::Generated {
                username,
                item_count,
                persona,
            } => serde_json::json!({
                "status": "generated",
                "username": username,
                "item_count": item_count,
                "persona": persona,
            }),
            PipelineOutcome::Saved {
                username,
                item_count,
                persona,
                path,
            } => serde_json::json!({
                "status": "saved",
                "username": username,
                "item_count": item_count,
                "persona": persona,
                "path": path.display().to_string(),
            }),
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_outcome_text(&self, outcome: &PipelineOutcome) -> String {
        let mut out = String::new();

        if let Some(persona) = outcome.persona() {
            out.push_str(persona);
            out.push_str("\n\n");
        }

        let summary = outcome.summary();
        if outcome.is_success() {
            out.push_str(&self.success(&summary));
        } else {
            out.push_str(&self.warning(&summary));
        }

        out
    }

    /// Format the credential status table.
    pub fn format_status(&self, rows: &[(&str, bool)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = rows
                    .iter()
                    .map(|(name, ok)| (name.to_string(), serde_json::Value::Bool(*ok)))
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
            OutputFormat::Quiet => Ok(rows
                .iter()
                .filter(|(_, ok)| !ok)
                .map(|(name, _)| name.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Text => {
                let mut builder = Builder::default();
                builder.push_record(["API", "Status"]);
                for (name, ok) in rows {
                    let status = if *ok {
                        self.colorize("✓ configured", "green")
                    } else {
                        self.colorize("✗ missing", "red")
                    };
                    builder.push_record([name.to_string(), status]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format an extracted username.
    pub fn format_username(&self, username: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "username": username }),
            )?),
            OutputFormat::Quiet => Ok(username.to_string()),
            OutputFormat::Text => Ok(self.success(&format!("Username: {}", username))),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// First line of `text`, cut to the preview width.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > PREVIEW_CHARS {
        let cut: String = line.chars().take(PREVIEW_CHARS - 1).collect();
        format!("{}…", cut)
    } else {
        line.to_string()
    }
}
