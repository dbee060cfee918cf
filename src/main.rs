use eframe::egui;

use water_quality_predictor::app::WaterQualityApp;
use water_quality_predictor::config::AppConfig;
use water_quality_predictor::data::loader::Artifacts;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::load()?;
    let artifacts = Artifacts::load(&config.schema_path, &config.model_path).inspect_err(|e| {
        log::error!("Failed to load artifacts: {e:#}");
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Water Quality Predictor",
        options,
        Box::new(|_cc| Ok(Box::new(WaterQualityApp::new(artifacts)))),
    )
    .map_err(|e| anyhow::anyhow!("running window: {e}"))
}
