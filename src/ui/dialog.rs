// src/ui/dialog.rs

use eframe::egui::{self, Color32, Context};

use crate::map::feature::SYMBOL_PALETTE;
use crate::map::FeatureColor;

/// The types of dialogs you may show.
#[derive(Debug, PartialEq, Eq)]
pub enum Dialog {
    AddFeature,
}

/// The possible outcomes when a dialog is closed.
#[derive(Debug, PartialEq, Eq)]
pub enum DialogResult {
    AddFeature {
        name: String,
        symbol: char,
        color: FeatureColor,
    },
    Cancel,
}

/// The in-progress custom feature while the dialog is open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeatureDraft {
    pub name: String,
    pub symbol: Option<char>,
    pub color: Option<FeatureColor>,
}

impl FeatureDraft {
    /// Name, symbol and colour must all be chosen.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.symbol.is_some() && self.color.is_some()
    }

    fn take_result(&mut self) -> Option<DialogResult> {
        let draft = std::mem::take(self);
        match (draft.symbol, draft.color) {
            (Some(symbol), Some(color)) if !draft.name.trim().is_empty() => Some(DialogResult::AddFeature {
                name: draft.name,
                symbol,
                color,
            }),
            _ => None,
        }
    }
}

pub(crate) fn color32(color: FeatureColor) -> Color32 {
    let [r, g, b] = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// Manages the currently active dialog (if any) and its result.
#[derive(Default)]
pub struct DialogManager {
    active_dialog: Option<Dialog>,
    result: Option<DialogResult>,
    draft: FeatureDraft,
}

impl DialogManager {
    /// Create a new DialogManager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a dialog by setting it as active.
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    pub fn show_add_feature_dialog(&mut self) {
        self.draft = FeatureDraft::default();
        self.show_dialog(Dialog::AddFeature);
    }

    /// Call this method on every UI frame to render the active dialog (if any).
    /// When the user responds, the method returns `Some(DialogResult)` and clears the active dialog.
    pub fn update(&mut self, ctx: &Context) -> Option<DialogResult> {
        if let Some(dialog) = &self.active_dialog {
            match dialog {
                Dialog::AddFeature => {
                    egui::Window::new("Add Custom Feature")
                        .collapsible(false)
                        .resizable(false)
                        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                        .show(ctx, |ui| {
                            ui.label("Feature Name");
                            ui.text_edit_singleline(&mut self.draft.name);
                            ui.add_space(6.0);

                            let symbol_text = self
                                .draft
                                .symbol
                                .map(|s| s.to_string())
                                .unwrap_or_else(|| "Select a symbol".to_string());
                            egui::ComboBox::from_label("Symbol")
                                .selected_text(symbol_text)
                                .show_ui(ui, |ui| {
                                    for symbol in SYMBOL_PALETTE {
                                        ui.selectable_value(&mut self.draft.symbol, Some(symbol), symbol.to_string());
                                    }
                                });

                            let color_text = self
                                .draft
                                .color
                                .map(|c| c.name().to_string())
                                .unwrap_or_else(|| "Select a color".to_string());
                            egui::ComboBox::from_label("Color")
                                .selected_text(color_text)
                                .show_ui(ui, |ui| {
                                    for color in FeatureColor::ALL {
                                        let label = egui::RichText::new(format!("■ {}", color.name()))
                                            .color(color32(color));
                                        ui.selectable_value(&mut self.draft.color, Some(color), label);
                                    }
                                });
                            ui.add_space(6.0);

                            ui.horizontal(|ui| {
                                let complete = self.draft.is_complete();
                                if ui.add_enabled(complete, egui::Button::new("Add Feature")).clicked() {
                                    self.result = self.draft.take_result();
                                }
                                if ui.button("Cancel").clicked() {
                                    self.result = Some(DialogResult::Cancel);
                                }
                            });
                        });
                }
            }
            // If the user has made a selection, retrieve the result and clear the dialog.
            if let Some(result) = self.result.take() {
                self.active_dialog = None;
                return Some(result);
            }
        }
        None
    }
}
