// src/ui/status_bar.rs

use std::sync::Arc;

use eframe::egui::{self, Color32, Context};
use parking_lot::RwLock;

use crate::editor::Editor;

pub struct StatusBar {
    editor: Arc<RwLock<Editor>>,
}

impl StatusBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let editor = self.editor.read(); // Keep the read lock short.
            let config = &editor.template().config;

            ui.horizontal(|ui| {
                match &editor.error_message {
                    Some(err) => ui.colored_label(Color32::from_rgb(0xdc, 0x26, 0x26), err.as_str()),
                    None => ui.label(editor.status_message.as_str()),
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{0}x{0} | {1} doors | {2} features | {3} saved",
                        config.size,
                        config.door_count,
                        config.feature_count,
                        editor.document().len()
                    ));
                });
            });
        });
    }
}
