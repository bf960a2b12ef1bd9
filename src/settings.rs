use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Open the histogram window after computing
    pub show_window: bool,
    /// Where to write the rendered histogram PNG, if anywhere
    pub output_path: Option<PathBuf>,
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_window: true,
            output_path: None,
            debug_logging: false,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "hshistogram", "HsHistogram")
            .map(|proj_dirs| proj_dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Loads from the platform config directory. A missing file (or no
    /// config directory at all) yields the defaults; an unreadable one is
    /// an error so the caller can report it once logging is up.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(config_path) => Self::load_or_default_from(&config_path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_or_default_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
