use eframe::egui::{self, ScrollArea, Ui};

use crate::data::loader::Artifacts;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WaterQualityApp {
    /// Read-only for the lifetime of the window.
    pub artifacts: Artifacts,
    pub state: AppState,
}

impl WaterQualityApp {
    pub fn new(artifacts: Artifacts) -> Self {
        Self {
            artifacts,
            state: AppState::default(),
        }
    }
}

impl eframe::App for WaterQualityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: branding header ----
        egui::TopBottomPanel::top("header").show(ctx, |ui: &mut Ui| {
            ui.add_space(6.0);
            panels::header(ui);
            ui.add_space(4.0);
        });

        // ---- Bottom panel: artifact summary ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui: &mut Ui| {
            panels::footer(ui, &self.artifacts);
        });

        // ---- Central panel: form and results ----
        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::input_form(ui, &mut self.state, &self.artifacts);
                    panels::results(ui, &mut self.state);
                });
        });
    }
}
