//! Persona file output

use crate::error::GeneratorError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// First line of every persona file
pub const PERSONA_FILE_TITLE: &str = "Reddit User Persona Analysis";

/// Writes personas to timestamped text files
#[derive(Debug, Clone)]
pub struct PersonaWriter {
    output_dir: PathBuf,
}

/// File name for a persona generated at `now`: `{username}_persona_{YYYYMMDD_HHMM}.txt`
pub fn persona_filename(username: &str, now: &DateTime<Local>) -> String {
    format!("{}_persona_{}.txt", username, now.format("%Y%m%d_%H%M"))
}

impl PersonaWriter {
    /// Create a writer targeting `output_dir`
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory persona files are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save a persona using the current local time
    pub fn save_persona_file(
        &self,
        persona_text: &str,
        username: &str,
    ) -> Result<PathBuf, GeneratorError> {
        self.save_persona_file_at(persona_text, username, &Local::now())
    }

    /// Save a persona stamped with `now`
    ///
    /// Files from the same user within the same minute share a name; the
    /// later write replaces the earlier one.
    pub fn save_persona_file_at(
        &self,
        persona_text: &str,
        username: &str,
        now: &DateTime<Local>,
    ) -> Result<PathBuf, GeneratorError> {
        if !self.output_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.output_dir)?;
        }
        let path = self.output_dir.join(persona_filename(username, now));

        let contents = format!("{}{}", file_header(now), persona_text);
        fs::write(&path, contents)?;

        info!("Saved persona for u/{} to {}", username, path.display());
        Ok(path)
    }
}

/// Title line, generation time line and a blank line
fn file_header(now: &DateTime<Local>) -> String {
    format!(
        "{}\nGenerated at: {}\n\n",
        PERSONA_FILE_TITLE,
        now.format("%Y-%m-%d %H:%M")
    )
}
