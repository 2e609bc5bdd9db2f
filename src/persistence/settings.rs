use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Board settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Storage key holding the task list
    pub storage_key: String,
    /// Page location the board pretends to live at (base of the share link)
    pub page_url: String,
    /// Separator between day, month and year when displaying dates
    pub date_separator: char,
    /// How long the "Copied!" label stays up
    pub copy_feedback_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: "brutalTasks".to_string(),
            page_url: "http://localhost/index.html".to_string(),
            date_separator: '.',
            copy_feedback_secs: 2,
        }
    }
}

/// Load settings from settings.json, defaults when the file is missing
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;
    Ok(settings)
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
