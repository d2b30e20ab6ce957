// src/config.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::editor::template::RoomTemplate;
use crate::error::Result;

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "ROOM_DESIGNER_CONFIG";
/// Settings file used when the environment variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "room_designer.json";

/// Designer settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    /// Directory exports are written into.
    pub export_dir: PathBuf,
    /// Whether the getting-started banner is shown.
    pub show_tips: bool,
    /// The template the form starts from.
    pub default_template: RoomTemplate,
    /// Fixed seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            show_tips: true,
            default_template: RoomTemplate::default(),
            seed: None,
        }
    }
}

impl DesignerSettings {
    /// Loads settings from `path`. A missing file yields the defaults; an
    /// unreadable or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings: Self = serde_json::from_str(&json)?;
                info!("Loaded settings from {:?}", path);
                Ok(settings)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The settings path from `ROOM_DESIGNER_CONFIG`, or `room_designer.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}
