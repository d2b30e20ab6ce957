// src/editor/template.rs

use serde::{Deserialize, Serialize};

use crate::editor::limits::{limits, Limits};
use crate::map::feature::default_alphabet;
use crate::utils::clamp;

/// Smallest room the designer form allows.
pub const MIN_ROOM_SIZE: usize = 5;
/// Largest room the designer form allows.
pub const MAX_ROOM_SIZE: usize = 20;
/// The form never asks for a doorless room.
pub const MIN_FORM_DOORS: usize = 1;

/// The parameters one generation call consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomConfig {
    pub size: usize,
    pub door_count: usize,
    pub feature_count: usize,
    #[serde(default = "default_alphabet")]
    pub feature_symbols: Vec<char>,
}

impl RoomConfig {
    pub fn new(size: usize, door_count: usize, feature_count: usize, feature_symbols: Vec<char>) -> Self {
        Self {
            size,
            door_count,
            feature_count,
            feature_symbols,
        }
    }

    pub fn limits(&self) -> Limits {
        limits(self.size)
    }

    /// A copy with door and feature counts clamped to this size's limits.
    pub fn clamped(&self) -> Self {
        let limits = self.limits();
        Self {
            door_count: limits.clamp_doors(self.door_count),
            feature_count: limits.clamp_features(self.feature_count),
            ..self.clone()
        }
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self::new(8, 2, 3, default_alphabet())
    }
}

/// A named, tagged room configuration as edited in the designer form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTemplate {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub config: RoomConfig,
}

impl Default for RoomTemplate {
    fn default() -> Self {
        Self {
            name: "Untitled Room".to_string(),
            tags: vec!["standard".to_string()],
            config: RoomConfig::default(),
        }
    }
}

impl RoomTemplate {
    /// Sets the size, clamped to the form range, then re-clamps doors and
    /// features to the new size's limits.
    pub fn set_size(&mut self, size: usize) {
        let size = clamp(size, MIN_ROOM_SIZE, MAX_ROOM_SIZE);
        let limits = limits(size);
        self.config.size = size;
        self.config.door_count = limits.clamp_doors(self.config.door_count);
        self.config.feature_count = limits.clamp_features(self.config.feature_count);
    }

    pub fn set_doors(&mut self, doors: usize) {
        let max = self.config.limits().max_doors;
        self.config.door_count = clamp(doors, MIN_FORM_DOORS, max);
    }

    pub fn set_features(&mut self, features: usize) {
        let max = self.config.limits().max_features;
        self.config.feature_count = clamp(features, 0, max);
    }

    /// Replaces the tags from a comma separated list, dropping blanks.
    pub fn set_tags_from_str(&mut self, tags: &str) {
        self.tags = tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn tags_string(&self) -> String {
        self.tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let template = RoomTemplate::default();
        assert_eq!(template.name, "Untitled Room");
        assert_eq!(template.tags, vec!["standard"]);
        assert_eq!(template.config.size, 8);
        assert_eq!(template.config.door_count, 2);
        assert_eq!(template.config.feature_count, 3);
        assert_eq!(template.config.feature_symbols, vec!['$', 'M', '*']);
    }

    #[test]
    fn test_set_size_clamps_and_reclamps_counts() {
        let mut template = RoomTemplate::default();
        template.set_features(14);
        assert_eq!(template.config.feature_count, 14);

        template.set_size(5);
        assert_eq!(template.config.size, 5);
        assert_eq!(template.config.feature_count, 3);

        template.set_size(2);
        assert_eq!(template.config.size, MIN_ROOM_SIZE);
        template.set_size(99);
        assert_eq!(template.config.size, MAX_ROOM_SIZE);
        // counts are never raised back up by a larger size
        assert_eq!(template.config.feature_count, 3);
    }

    #[test]
    fn test_set_doors_and_features_clamp() {
        let mut template = RoomTemplate::default();
        template.set_doors(0);
        assert_eq!(template.config.door_count, 1);
        template.set_doors(9);
        assert_eq!(template.config.door_count, 4);
        template.set_features(1000);
        assert_eq!(template.config.feature_count, 14);
    }

    #[test]
    fn test_clamped_config() {
        let config = RoomConfig::new(5, 1000, 1000, vec!['$']);
        let clamped = config.clamped();
        assert_eq!(clamped.door_count, 4);
        assert_eq!(clamped.feature_count, 3);
        assert_eq!(clamped.feature_symbols, vec!['$']);
    }

    #[test]
    fn test_tags_round_trip_through_text() {
        let mut template = RoomTemplate::default();
        template.set_tags_from_str(" boss, , treasure ,lair");
        assert_eq!(template.tags, vec!["boss", "treasure", "lair"]);
        assert_eq!(template.tags_string(), "boss, treasure, lair");
    }

    #[test]
    fn test_template_json_is_flat() {
        let json = serde_json::to_value(RoomTemplate::default()).unwrap();
        assert_eq!(json["name"], "Untitled Room");
        assert_eq!(json["size"], 8);
        assert_eq!(json["doorCount"], 2);
        assert_eq!(json["featureCount"], 3);
        assert_eq!(json["featureSymbols"], serde_json::json!(["$", "M", "*"]));
        assert_eq!(json["tags"], serde_json::json!(["standard"]));
    }
}
