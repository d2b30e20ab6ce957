//! # Main Window Module
//!
//! This module provides the desktop user interface using eframe/egui.
//! It defines a `DesignerApp` that wires the UI components around one shared `Editor`:
//! - A top menu bar for room and feature actions.
//! - A left side panel with the room form, custom features and saved rooms.
//! - A central view with the rendered room and its legend.
//! - A bottom status bar for messages.
//!
//! The module also provides a helper function `run_main_window()` to launch
//! the UI as a standalone egui application.

use std::error::Error;
use std::sync::Arc;

use eframe::egui;
use log::info;
use parking_lot::RwLock;

use crate::config::DesignerSettings;
use crate::editor::Editor;
use crate::ui::central_panel::CentralPanel;
use crate::ui::dialog::{DialogManager, DialogResult};
use crate::ui::menu::MenuBar;
use crate::ui::side_panel::SidePanel;
use crate::ui::status_bar::StatusBar;

/// DesignerApp holds the state of the UI.
pub struct DesignerApp {
    editor: Arc<RwLock<Editor>>,
    menu: MenuBar,
    side_panel: SidePanel,
    central_panel: CentralPanel,
    status_bar: StatusBar,
    dialogs: DialogManager,
}

impl DesignerApp {
    pub fn new(editor: Editor) -> Self {
        let editor = Arc::new(RwLock::new(editor));
        Self {
            menu: MenuBar::new(Arc::clone(&editor)),
            side_panel: SidePanel::new(Arc::clone(&editor)),
            central_panel: CentralPanel::new(Arc::clone(&editor)),
            status_bar: StatusBar::new(Arc::clone(&editor)),
            dialogs: DialogManager::new(),
            editor,
        }
    }
}

impl eframe::App for DesignerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let requests = self.menu.update(ctx);
        if requests.toggle_side_panel {
            self.side_panel.show_side_panel = !self.side_panel.show_side_panel;
        }
        if requests.exit {
            frame.close();
        }

        // Panels must be added before the central panel.
        self.status_bar.update(ctx);
        self.side_panel.update(ctx);
        self.central_panel.update(ctx);

        if requests.add_feature || std::mem::take(&mut self.side_panel.feature_dialog_requested) {
            self.dialogs.show_add_feature_dialog();
        }
        if let Some(DialogResult::AddFeature { name, symbol, color }) = self.dialogs.update(ctx) {
            self.editor.write().add_custom_feature_wrapper(&name, symbol, color);
        }
    }
}

/// Runs the designer as a standalone egui application.
pub fn run_main_window(settings: DesignerSettings) -> Result<(), Box<dyn Error>> {
    let editor = Editor::new(settings);
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1100.0, 760.0)),
        ..Default::default()
    };
    info!("Opening designer window");
    eframe::run_native(
        "ASCII Dungeon Room Designer",
        native_options,
        Box::new(|_cc| Box::new(DesignerApp::new(editor))),
    );
    // Since run_native returns (), we simply return Ok.
    Ok(())
}
