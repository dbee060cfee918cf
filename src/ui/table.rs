use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::ALERT_COLOR;
use crate::data::model::Pollutant;
use crate::data::pipeline::Report;

// ---------------------------------------------------------------------------
// Results table
// ---------------------------------------------------------------------------

/// One-row table of predicted concentrations; the row maximum is highlighted
/// and values outside their safe limit are tinted.
pub fn results_table(ui: &mut Ui, report: &Report) {
    let max = report.result.max_pollutant();

    TableBuilder::new(ui)
        .id_salt("results_table")
        .striped(true)
        .column(Column::auto().at_least(160.0))
        .columns(Column::auto().at_least(70.0), Pollutant::ALL.len())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("");
            });
            for p in Pollutant::ALL {
                header.col(|ui| {
                    ui.strong(p.column());
                });
            }
        })
        .body(|mut body| {
            body.row(20.0, |mut row| {
                row.col(|ui| {
                    ui.label(report.input.row_label());
                });
                for (p, value) in report.result.iter() {
                    row.col(|ui| {
                        let mut text = RichText::new(format!("{value:.4}"));
                        if p == max {
                            text = text.strong().background_color(ui.visuals().selection.bg_fill);
                        }
                        if report.alerts.contains(p) {
                            text = text.color(ALERT_COLOR);
                        }
                        ui.label(text);
                    });
                }
            });
        });
}
