// src/ui/side_panel.rs

use std::sync::Arc;

use eframe::egui::{self, Context, Ui};
use parking_lot::RwLock;

use crate::editor::template::{MAX_ROOM_SIZE, MIN_FORM_DOORS, MIN_ROOM_SIZE};
use crate::editor::Editor;
use crate::ui::dialog::color32;

/// Manages the left-side panel with the room form, custom features and saved rooms.
pub struct SidePanel {
    editor: Arc<RwLock<Editor>>,
    pub show_side_panel: bool, // Whether this panel is currently visible
    /// Set when the user asks for the "Add Custom Feature" dialog.
    pub feature_dialog_requested: bool,
    tags_text: String,
}

impl SidePanel {
    /// Create a new SidePanel, by providing an `Editor`.
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        let tags_text = editor.read().template().tags_string();
        Self {
            editor,
            show_side_panel: true,
            feature_dialog_requested: false,
            tags_text,
        }
    }

    /// Called each frame, updates the side panel UI if it's visible.
    pub fn update(&mut self, ctx: &Context) {
        if !self.show_side_panel {
            return; // Early exit if user has hidden it
        }

        egui::SidePanel::left("designer_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.show_form(ui);
                ui.separator();
                self.show_features(ui);
                ui.separator();
                self.show_saved_rooms(ui);
            });
    }

    /// Size, door and feature controls, each clamped to the size's limits.
    fn show_form(&mut self, ui: &mut Ui) {
        ui.heading("Template");
        let mut editor = self.editor.write();
        let config = editor.template().config.clone();
        let limits = editor.limits();

        let mut size = config.size;
        if ui
            .add(egui::Slider::new(&mut size, MIN_ROOM_SIZE..=MAX_ROOM_SIZE).text("Room size"))
            .changed()
        {
            editor.set_size(size);
        }

        let mut doors = config.door_count;
        if ui
            .add(egui::Slider::new(&mut doors, MIN_FORM_DOORS..=limits.max_doors).text("Doors"))
            .changed()
        {
            editor.set_doors(doors);
        }

        let mut features = config.feature_count;
        if ui
            .add(egui::Slider::new(&mut features, 0..=limits.max_features).text("Features"))
            .changed()
        {
            editor.set_features(features);
        }
        ui.small(format!("max: {} doors, {} features", limits.max_doors, limits.max_features));

        ui.horizontal(|ui| {
            ui.label("Tags");
            if ui.text_edit_singleline(&mut self.tags_text).lost_focus() {
                editor.set_tags(&self.tags_text);
                self.tags_text = editor.template().tags_string();
            }
        });

        ui.horizontal(|ui| {
            if ui.button("🔀 Generate").clicked() {
                editor.generate_room_wrapper();
            }
            if ui.button("💾 Save").clicked() {
                editor.save_room_wrapper();
            }
            if ui.button("⬇ Export").clicked() {
                editor.export_room_wrapper();
            }
        });
    }

    /// Lists custom features with remove buttons, plus the add button.
    fn show_features(&mut self, ui: &mut Ui) {
        ui.heading("Custom Features");
        let mut remove = None;
        {
            let editor = self.editor.read();
            for (index, feature) in editor.catalogue().custom().iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(feature.symbol.to_string())
                            .monospace()
                            .color(color32(feature.color)),
                    );
                    ui.label(feature.name.as_str());
                    if ui.small_button("✖").clicked() {
                        remove = Some(index);
                    }
                });
            }
        }
        if let Some(index) = remove {
            self.editor.write().remove_custom_feature(index);
        }
        if ui.button("➕ Add Custom Feature").clicked() {
            self.feature_dialog_requested = true;
        }
    }

    /// Saved rooms with open and delete actions.
    fn show_saved_rooms(&mut self, ui: &mut Ui) {
        ui.heading("Saved Rooms");
        let mut open = None;
        let mut delete = None;
        {
            let editor = self.editor.read();
            if editor.document().is_empty() {
                ui.label("Nothing saved yet.");
            }
            for room in editor.document().rooms() {
                ui.horizontal(|ui| {
                    ui.label(format!("{0} ({1}x{1})", room.template.name, room.layout.size()));
                    if ui.small_button("Open").clicked() {
                        open = Some(room.id);
                    }
                    if ui.small_button("Delete").clicked() {
                        delete = Some(room.id);
                    }
                });
            }
        }

        let mut editor = self.editor.write();
        if let Some(id) = open {
            editor.open_saved(id);
            self.tags_text = editor.template().tags_string();
        }
        if let Some(id) = delete {
            editor.delete_saved(id);
        }
    }
}
