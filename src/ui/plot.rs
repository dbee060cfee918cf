use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{pollutant_color, ALERT_COLOR};
use crate::data::model::Pollutant;
use crate::data::pipeline::Report;

// ---------------------------------------------------------------------------
// Pollutant bar chart
// ---------------------------------------------------------------------------

/// One bar per pollutant, in canonical order; bars over the limit turn red.
pub fn pollutant_chart(ui: &mut Ui, report: &Report) {
    let bars: Vec<Bar> = report
        .result
        .iter()
        .map(|(p, value)| {
            let color = if report.alerts.contains(p) {
                ALERT_COLOR
            } else {
                pollutant_color(p)
            };
            Bar::new(p.index() as f64, value)
                .name(p.display_name())
                .fill(color)
                .width(0.6)
        })
        .collect();

    let chart = BarChart::new(bars).name("Concentration (mg/L)");

    Plot::new("pollutant_chart")
        .legend(Legend::default())
        .height(260.0)
        .x_axis_label("Pollutant")
        .y_axis_label("Concentration (mg/L)")
        .x_axis_formatter(|mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            Pollutant::ALL
                .get(idx as usize)
                .map(|p| p.display_name().to_string())
                .unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
