// src/editor/core.rs

use std::path::{Path, PathBuf};

use log::{error, info};
use rand_chacha::ChaCha8Rng;

use crate::config::DesignerSettings;
use crate::document::{Document, ExportRecord};
use crate::editor::generator::{GeneratedRoom, RoomGenerator};
use crate::editor::limits::Limits;
use crate::editor::template::RoomTemplate;
use crate::error::{Result, RoomError};
use crate::map::{FeatureCatalogue, FeatureColor, Grid};

/// The core `Editor` struct: the template being edited, the feature
/// catalogue, the current room and the saved-room library.
pub struct Editor {
    template: RoomTemplate,
    catalogue: FeatureCatalogue,
    document: Document,

    /// The last generated layout. Replaced, never mutated.
    room: Option<GeneratedRoom>,
    generator: RoomGenerator<ChaCha8Rng>,
    export_dir: PathBuf,

    /// Messages or status for UI.
    pub status_message: String,
    pub error_message: Option<String>,

    /// Whether the getting-started banner is shown.
    pub show_tips: bool,
}

impl Editor {
    /// Create an editor from the given settings.
    pub fn new(settings: DesignerSettings) -> Self {
        let generator = match settings.seed {
            Some(seed) => RoomGenerator::seeded(seed),
            None => RoomGenerator::from_entropy(),
        };
        let mut editor = Self {
            template: settings.default_template,
            catalogue: FeatureCatalogue::new(),
            document: Document::new(),
            room: None,
            generator,
            export_dir: settings.export_dir,
            status_message: String::new(),
            error_message: None,
            show_tips: settings.show_tips,
        };
        // re-apply the form clamps in case the settings file was generous
        let config = editor.template.config.clone();
        editor.template.set_size(config.size);
        editor.template.set_doors(config.door_count);
        editor.template.set_features(config.feature_count);
        editor.sync_alphabet();
        editor
    }

    // ----------------- Template -----------------

    pub fn template(&self) -> &RoomTemplate {
        &self.template
    }

    pub fn limits(&self) -> Limits {
        self.template.config.limits()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.template.name = name.into();
    }

    pub fn set_size(&mut self, size: usize) {
        self.template.set_size(size);
    }

    pub fn set_doors(&mut self, doors: usize) {
        self.template.set_doors(doors);
    }

    pub fn set_features(&mut self, features: usize) {
        self.template.set_features(features);
    }

    pub fn set_tags(&mut self, tags: &str) {
        self.template.set_tags_from_str(tags);
    }

    // ----------------- Features -----------------

    pub fn catalogue(&self) -> &FeatureCatalogue {
        &self.catalogue
    }

    pub fn add_custom_feature(&mut self, name: &str, symbol: char, color: FeatureColor) -> Result<()> {
        self.catalogue.add(name, symbol, color)?;
        self.sync_alphabet();
        Ok(())
    }

    pub fn remove_custom_feature(&mut self, index: usize) -> bool {
        let removed = self.catalogue.remove(index).is_some();
        self.sync_alphabet();
        removed
    }

    /// Description of a cell symbol for tooltips and the legend.
    pub fn describe(&self, symbol: char) -> String {
        self.catalogue.describe(symbol)
    }

    fn sync_alphabet(&mut self) {
        self.template.config.feature_symbols = self.catalogue.alphabet();
    }

    // ----------------- Rooms -----------------

    pub fn room(&self) -> Option<&Grid> {
        self.room.as_ref().map(|room| &room.grid)
    }

    pub fn generated(&self) -> Option<&GeneratedRoom> {
        self.room.as_ref()
    }

    /// Generates a fresh layout from the current template.
    pub fn generate_room(&mut self) -> Result<&Grid> {
        let room = self.generator.generate_room(&self.template.config)?;
        self.status_message = format!(
            "Generated {0}x{0} room: {1} doors, {2} features",
            room.grid.size(),
            room.doors.len(),
            room.features.len()
        );
        Ok(&self.room.insert(room).grid)
    }

    /// Stores the current room in the library and returns its id.
    pub fn save_room(&mut self) -> Result<u64> {
        let grid = self.room.as_ref().map(|room| &room.grid).ok_or(RoomError::NoRoom)?;
        let id = self.document.save_room(&self.template, grid);
        self.status_message = format!("Saved '{}'", self.template.name);
        Ok(id)
    }

    /// Writes the current room into the export directory.
    pub fn export_room(&mut self) -> Result<PathBuf> {
        let export_dir = self.export_dir.clone();
        self.export_room_to(&export_dir)
    }

    pub fn export_room_to(&mut self, dir: &Path) -> Result<PathBuf> {
        let grid = self.room().ok_or(RoomError::NoRoom)?;
        let path = ExportRecord::new(&self.template, grid).write_to_dir(dir)?;
        self.status_message = format!("Exported to {}", path.display());
        Ok(path)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Makes a saved room current again: its template and its layout.
    pub fn open_saved(&mut self, id: u64) -> bool {
        let Some(saved) = self.document.find(id) else {
            return false;
        };
        self.template = saved.template.clone();
        self.room = Some(GeneratedRoom {
            grid: saved.layout.clone(),
            doors: Vec::new(),
            features: Vec::new(),
        });
        // the catalogue owns the alphabet, not the snapshot
        self.sync_alphabet();
        self.status_message = format!("Opened '{}'", self.template.name);
        info!("Opened saved room #{}", id);
        true
    }

    pub fn delete_saved(&mut self, id: u64) -> bool {
        self.document.remove_room(id).is_some()
    }

    // ----------------- UI wrappers -----------------

    pub fn generate_room_wrapper(&mut self) {
        if let Err(err) = self.generate_room() {
            self.report(err);
        } else {
            self.error_message = None;
        }
    }

    pub fn save_room_wrapper(&mut self) {
        if let Err(err) = self.save_room() {
            self.report(err);
        } else {
            self.error_message = None;
        }
    }

    pub fn export_room_wrapper(&mut self) {
        if let Err(err) = self.export_room() {
            self.report(err);
        } else {
            self.error_message = None;
        }
    }

    pub fn add_custom_feature_wrapper(&mut self, name: &str, symbol: char, color: FeatureColor) {
        match self.add_custom_feature(name, symbol, color) {
            Ok(()) => {
                self.status_message = format!("Added feature '{}'", name.trim());
                self.error_message = None;
            }
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: RoomError) {
        error!("{}", err);
        self.error_message = Some(err.to_string());
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DesignerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn seeded_editor(seed: u64) -> Editor {
        Editor::new(DesignerSettings {
            seed: Some(seed),
            ..DesignerSettings::default()
        })
    }

    #[test]
    fn test_save_and_export_need_a_room() {
        let mut editor = seeded_editor(1);
        assert!(matches!(editor.save_room(), Err(RoomError::NoRoom)));
        assert!(matches!(editor.export_room(), Err(RoomError::NoRoom)));

        editor.save_room_wrapper();
        assert!(editor.error_message.is_some());
    }

    #[test]
    fn test_generate_uses_template() {
        let mut editor = seeded_editor(2);
        editor.set_size(12);
        editor.set_doors(3);
        let grid = editor.generate_room().unwrap();
        assert_eq!(grid.size(), 12);
        assert!(editor.generated().unwrap().doors.len() <= 3);
        assert!(editor.status_message.starts_with("Generated 12x12"));
    }

    #[test]
    fn test_seeded_editors_agree() {
        let mut a = seeded_editor(99);
        let mut b = seeded_editor(99);
        assert_eq!(a.generate_room().unwrap(), b.generate_room().unwrap());
    }

    #[test]
    fn test_custom_features_flow_into_generation() {
        let mut editor = seeded_editor(3);
        editor.add_custom_feature("Altar", '♥', FeatureColor::Pink).unwrap();
        assert_eq!(editor.template().config.feature_symbols, vec!['$', 'M', '*', '♥']);

        editor.set_size(20);
        editor.set_features(129);
        editor.generate_room().unwrap();
        let features = &editor.generated().unwrap().features;
        assert!(features.iter().any(|f| f.symbol == '♥'));
        assert_eq!(editor.describe('♥'), "Altar");

        assert!(editor.remove_custom_feature(0));
        assert!(!editor.remove_custom_feature(0));
        assert_eq!(editor.template().config.feature_symbols, vec!['$', 'M', '*']);
        // the current room is a snapshot and keeps its symbols
        assert!(editor.room().unwrap().count('♥') > 0);
    }

    #[test]
    fn test_bad_custom_feature_reports_error() {
        let mut editor = seeded_editor(4);
        editor.add_custom_feature_wrapper("Gate", '#', FeatureColor::Blue);
        assert!(editor.error_message.as_deref().unwrap().contains("reserved"));
        assert!(editor.catalogue().custom().is_empty());
    }

    #[test]
    fn test_save_open_delete_cycle() {
        let mut editor = seeded_editor(5);
        editor.set_name("Vault");
        editor.generate_room().unwrap();
        let saved_grid = editor.room().unwrap().clone();
        let id = editor.save_room().unwrap();

        editor.set_name("Other");
        editor.set_size(5);
        editor.generate_room().unwrap();

        assert!(editor.open_saved(id));
        assert_eq!(editor.template().name, "Vault");
        assert_eq!(editor.room().unwrap(), &saved_grid);

        assert!(editor.delete_saved(id));
        assert!(!editor.open_saved(id));
        assert!(editor.document().is_empty());
    }

    #[test]
    fn test_open_saved_keeps_catalogue_alphabet() {
        let mut editor = seeded_editor(7);
        editor.add_custom_feature("Idol", '@', FeatureColor::Teal).unwrap();
        editor.generate_room().unwrap();
        let id = editor.save_room().unwrap();
        assert_eq!(
            editor.document().find(id).unwrap().template.config.feature_symbols,
            vec!['$', 'M', '*', '@']
        );

        assert!(editor.remove_custom_feature(0));
        assert!(editor.open_saved(id));
        assert_eq!(editor.template().config.feature_symbols, editor.catalogue().alphabet());
        assert_eq!(editor.template().config.feature_symbols, vec!['$', 'M', '*']);

        editor.set_size(20);
        editor.set_features(129);
        let grid = editor.generate_room().unwrap();
        assert_eq!(grid.count('@'), 0);
    }

    #[test]
    fn test_export_writes_named_file() {
        let dir = env::temp_dir().join(format!("room_designer_editor_{}", std::process::id()));
        let mut editor = seeded_editor(6);
        editor.set_name("Spider Den");
        editor.generate_room().unwrap();

        let path = editor.export_room_to(&dir).unwrap();
        assert_eq!(path.file_name().unwrap(), "spider-den.json");
        let record = ExportRecord::read_from_path(&path).unwrap();
        assert_eq!(record.template.name, "Spider Den");
        assert_eq!(&record.layout, editor.room().unwrap());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_settings_template_is_clamped() {
        let mut settings = DesignerSettings::default();
        settings.default_template.config.size = 40;
        settings.default_template.config.feature_count = 10_000;
        let editor = Editor::new(settings);
        assert_eq!(editor.template().config.size, 20);
        assert_eq!(editor.template().config.feature_count, 129);
    }
}
