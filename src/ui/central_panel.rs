//! Central panel UI module: the tips banner, the rendered room grid with
//! per-cell hover descriptions, and the tile legend.

use std::sync::Arc;

use eframe::egui::{self, Align2, Color32, Context, FontId, Sense, Stroke, Ui, Vec2};
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::map::tile::{DOOR, WALL};
use crate::map::{FeatureCatalogue, Grid};
use crate::ui::dialog::color32;
use crate::utils::Position;

/// Edge length of one rendered cell, in points.
const CELL_SIZE: f32 = 28.0;

const WALL_BG: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
const DOOR_BG: Color32 = Color32::from_rgb(0xdb, 0xea, 0xfe);
const FLOOR_BG: Color32 = Color32::from_rgb(0xf9, 0xfa, 0xfb);
const INK: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);

/// Background and glyph colour for a cell symbol.
fn tile_colors(symbol: char, catalogue: &FeatureCatalogue) -> (Color32, Color32) {
    if let Some(custom) = catalogue.find(symbol) {
        return (FLOOR_BG, color32(custom.color));
    }
    match symbol {
        WALL => (WALL_BG, INK),
        DOOR => (DOOR_BG, INK),
        '$' => (FLOOR_BG, Color32::from_rgb(0xca, 0x8a, 0x04)),
        'M' => (FLOOR_BG, Color32::from_rgb(0xdc, 0x26, 0x26)),
        '*' => (FLOOR_BG, Color32::from_rgb(0x93, 0x33, 0xea)),
        _ => (FLOOR_BG, INK),
    }
}

/// The `CentralPanel` struct provides the main view of the designer.
pub struct CentralPanel {
    editor: Arc<RwLock<Editor>>,
    /// The cell under the pointer during the last frame.
    hovered: Option<Position>,
}

impl CentralPanel {
    /// Create a new central panel instance.
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor, hovered: None }
    }

    /// Called each frame to update the central panel.
    pub fn update(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_tips(ui);

            let mut editor = self.editor.write();
            let mut name = editor.template().name.clone();
            ui.horizontal(|ui| {
                ui.heading("Room");
                if ui.text_edit_singleline(&mut name).changed() {
                    editor.set_name(name);
                }
            });
            ui.separator();
            drop(editor);

            egui::ScrollArea::both().show(ui, |ui| {
                self.show_room(ui);
                ui.separator();
                self.show_legend(ui);
            });
        });
    }

    fn show_tips(&self, ui: &mut Ui) {
        let mut editor = self.editor.write();
        if !editor.show_tips {
            return;
        }
        egui::Frame::group(ui.style())
            .fill(Color32::from_rgb(0xef, 0xf6, 0xff))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        "Start by adjusting the room size, then add doors and features to create your perfect dungeon room.",
                    );
                    if ui.small_button("✖").clicked() {
                        editor.show_tips = false;
                    }
                });
            });
        ui.add_space(8.0);
    }

    fn show_room(&mut self, ui: &mut Ui) {
        let editor = self.editor.read();
        let Some(grid) = editor.room() else {
            ui.label("No room yet. Press Generate to roll a new layout.");
            return;
        };

        let side = grid.size() as f32 * CELL_SIZE;
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
        let painter = ui.painter_at(rect);
        self.paint_grid(&painter, rect.min, grid, editor.catalogue());

        self.hovered = response.hover_pos().and_then(|pos| {
            let local = pos - rect.min;
            let row = (local.y / CELL_SIZE).floor();
            let col = (local.x / CELL_SIZE).floor();
            (row >= 0.0 && col >= 0.0).then(|| Position::new(row as usize, col as usize))
        });
        if let Some(symbol) = self.hovered.and_then(|pos| grid.get(pos)) {
            response.on_hover_text(editor.describe(symbol));
        }
    }

    fn paint_grid(&self, painter: &egui::Painter, origin: egui::Pos2, grid: &Grid, catalogue: &FeatureCatalogue) {
        let font = FontId::monospace(CELL_SIZE * 0.65);
        for (pos, symbol) in grid.cells() {
            let min = origin + Vec2::new(pos.col as f32 * CELL_SIZE, pos.row as f32 * CELL_SIZE);
            let cell = egui::Rect::from_min_size(min, Vec2::splat(CELL_SIZE));
            let (bg, fg) = tile_colors(symbol, catalogue);
            painter.rect_filled(cell, 0.0, bg);
            if self.hovered == Some(pos) {
                painter.rect_stroke(cell, 0.0, Stroke::new(1.5, Color32::from_rgb(0x3b, 0x82, 0xf6)));
            }
            painter.text(cell.center(), Align2::CENTER_CENTER, symbol, font.clone(), fg);
        }
    }

    fn show_legend(&self, ui: &mut Ui) {
        let editor = self.editor.read();
        let catalogue = editor.catalogue();
        ui.strong("Legend");
        egui::Grid::new("legend").num_columns(2).show(ui, |ui| {
            for (symbol, name) in catalogue.legend() {
                let (_, fg) = tile_colors(symbol, catalogue);
                ui.label(egui::RichText::new(symbol.to_string()).monospace().color(fg));
                ui.label(name);
                ui.end_row();
            }
        });
    }
}
