// src/ui/menu.rs

use std::sync::Arc;

use eframe::egui::{self, Context};
use parking_lot::RwLock;

use crate::editor::Editor;

/// Menu actions that belong to the window rather than the editor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuRequests {
    pub add_feature: bool,
    pub toggle_side_panel: bool,
    pub exit: bool,
}

pub struct MenuBar {
    editor: Arc<RwLock<Editor>>,
}

impl MenuBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    pub fn update(&mut self, ctx: &Context) -> MenuRequests {
        let mut requests = MenuRequests::default();
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Room", |ui| {
                    if ui.button("Generate New Layout").clicked() {
                        self.editor.write().generate_room_wrapper();
                        ui.close_menu();
                    }
                    if ui.button("Save Room").clicked() {
                        self.editor.write().save_room_wrapper();
                        ui.close_menu();
                    }
                    if ui.button("Export JSON").clicked() {
                        self.editor.write().export_room_wrapper();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        requests.exit = true;
                        ui.close_menu();
                    }
                });

                ui.menu_button("Features", |ui| {
                    if ui.button("Add Custom Feature...").clicked() {
                        requests.add_feature = true;
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Side Panel").clicked() {
                        requests.toggle_side_panel = true;
                        ui.close_menu();
                    }
                    let mut editor = self.editor.write();
                    if ui.checkbox(&mut editor.show_tips, "Tips").clicked() {
                        ui.close_menu();
                    }
                });
            });
        });
        requests
    }
}
