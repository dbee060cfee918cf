use eframe::egui::{self, CornerRadius, DragValue, Frame, Margin, RichText, Ui};

use crate::color::{severity_color, HEADER_BG, HEADER_SUBTITLE, HEADER_TITLE};
use crate::data::loader::Artifacts;
use crate::data::model::{Pollutant, YEAR_MAX, YEAR_MIN};
use crate::data::pipeline::Report;
use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    Frame::new()
        .fill(HEADER_BG)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(10))
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.heading(
                    RichText::new("Water Quality Prediction App")
                        .color(HEADER_TITLE)
                        .strong(),
                );
                ui.label(RichText::new("Powered by Machine Learning").color(HEADER_SUBTITLE));
            });
        });
    ui.add_space(6.0);
    ui.label("Predict the water pollutants based on Year and Station ID");
}

// ---------------------------------------------------------------------------
// Input form
// ---------------------------------------------------------------------------

/// Render the year / station inputs and handle the Predict button.
pub fn input_form(ui: &mut Ui, state: &mut AppState, artifacts: &Artifacts) {
    egui::Grid::new("input_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Enter Year");
            ui.add(DragValue::new(&mut state.year).range(YEAR_MIN..=YEAR_MAX));
            ui.end_row();

            ui.label("Enter Station ID");
            ui.text_edit_singleline(&mut state.station_id);
            ui.end_row();
        });

    let stations = artifacts.schema.known_stations();
    if !stations.is_empty() {
        ui.label(
            RichText::new(format!("Known stations: {}", stations.join(", ")))
                .small()
                .weak(),
        );
    }

    ui.add_space(4.0);
    if ui.button("Predict").clicked() {
        state.submit(artifacts);
    }

    if let Some(msg) = &state.warning {
        ui.colored_label(ui.visuals().warn_fg_color, format!("⚠ {msg}"));
    }
    if let Some(msg) = &state.status_message {
        ui.colored_label(ui.visuals().error_fg_color, msg);
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Everything shown after a successful prediction.
pub fn results(ui: &mut Ui, state: &mut AppState) {
    let Some(report) = state.report.clone() else {
        return;
    };

    ui.separator();
    if !report.known_station {
        ui.colored_label(
            ui.visuals().warn_fg_color,
            format!(
                "Station {} was not seen during training; predicting without a station indicator.",
                report.input.station_id
            ),
        );
    }

    ui.heading("Predicted Pollutant Levels (mg/L)");
    table::results_table(ui, &report);
    ui.add_space(8.0);

    ui.heading("Pollutant Levels - Bar Chart");
    plot::pollutant_chart(ui, &report);
    ui.add_space(8.0);

    if ui.button("Download Prediction as CSV").clicked() {
        save_csv_dialog(state, &report);
    }
    ui.add_space(8.0);

    pollutant_info(ui);
    ui.add_space(8.0);

    alert_summary(ui, &report);
}

fn pollutant_info(ui: &mut Ui) {
    egui::CollapsingHeader::new("What Do These Pollutants Mean?")
        .id_salt("pollutant_info")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for p in Pollutant::ALL {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    ui.strong(format!("{}:", p.display_name()));
                    ui.label(p.description());
                });
            }
        });
}

fn alert_summary(ui: &mut Ui, report: &Report) {
    ui.heading("Pollution Alert Analysis");
    if report.alerts.is_empty() {
        ui.colored_label(
            severity_color(report.severity),
            "All predicted pollutant levels are within safe environmental limits.",
        );
    } else {
        ui.colored_label(
            ui.visuals().error_fg_color,
            "Some pollutant levels exceed safe limits:",
        );
        for alert in report.alerts.alerts() {
            ui.label(format!("  • {}", alert.message()));
        }
    }

    ui.add_space(8.0);
    ui.heading("Pollution Severity Score");
    ui.label(
        RichText::new(format!("Water Quality Status: {}", report.severity))
            .strong()
            .color(severity_color(report.severity)),
    );
    ui.label(RichText::new(format!("Pollution Score: {}", report.alerts.score())).strong());
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_csv_dialog(state: &mut AppState, report: &Report) {
    let file = rfd::FileDialog::new()
        .set_title("Download prediction")
        .set_file_name(report.input.csv_file_name())
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_csv(&path) {
            log::error!("Failed to export CSV: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui, artifacts: &Artifacts) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!(
                "{} model · {} features · {} stations",
                artifacts.model.kind(),
                artifacts.schema.len(),
                artifacts.schema.known_stations().len()
            ))
            .small()
            .weak(),
        );
    });
}
