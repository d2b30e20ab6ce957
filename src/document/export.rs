// src/document/export.rs

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::editor::template::RoomTemplate;
use crate::error::Result;
use crate::map::Grid;
use crate::utils::slugify;

/// The flat, downloadable description of one room:
/// `{ "template": {...}, "layout": [[...]], "exported": "<ISO-8601>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub template: RoomTemplate,
    pub layout: Grid,
    pub exported: String,
}

impl ExportRecord {
    /// Builds a record stamped with the current time.
    pub fn new(template: &RoomTemplate, layout: &Grid) -> Self {
        Self {
            template: template.clone(),
            layout: layout.clone(),
            exported: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses an export. The layout must be a square grid of single characters.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `<slugged room name>.json`
    pub fn file_name(&self) -> String {
        format!("{}.json", slugify(&self.template.name))
    }

    /// Writes the pretty-printed record into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        fs::write(&path, self.to_json()?)?;
        info!("Exported room '{}' to {:?}", self.template.name, path);
        Ok(path)
    }

    pub fn read_from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
