use std::path::Path;

use anyhow::{Context, Result};

use crate::data::alerts::SafeLimitTable;
use crate::data::export::to_csv;
use crate::data::loader::Artifacts;
use crate::data::model::{InputRecord, DEFAULT_STATION_ID, DEFAULT_YEAR, YEAR_MAX, YEAR_MIN};
use crate::data::pipeline::{self, Report};
use crate::error::PredictError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Year field, kept within [`YEAR_MIN`, `YEAR_MAX`].
    pub year: i32,

    /// Station id field, as typed.
    pub station_id: String,

    /// Result of the last successful prediction.
    pub report: Option<Report>,

    /// User-facing warning (e.g. empty station id).
    pub warning: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    limits: SafeLimitTable,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            station_id: DEFAULT_STATION_ID.to_string(),
            report: None,
            warning: None,
            status_message: None,
            limits: SafeLimitTable::default(),
        }
    }
}

impl AppState {
    pub fn input(&self) -> InputRecord {
        InputRecord::new(self.year.clamp(YEAR_MIN, YEAR_MAX), self.station_id.clone())
    }

    /// Handle a click on "Predict".
    pub fn submit(&mut self, artifacts: &Artifacts) {
        self.warning = None;
        self.status_message = None;

        match pipeline::run(&self.input(), &artifacts.schema, &artifacts.model, &self.limits) {
            Ok(report) => self.report = Some(report),
            Err(PredictError::EmptyStationId) => {
                self.report = None;
                self.warning = Some(PredictError::EmptyStationId.to_string());
            }
            Err(e) => {
                log::error!("{e}");
                self.report = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Write the current report as CSV to `path`.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let Some(report) = &self.report else {
            anyhow::bail!("no prediction to export");
        };
        let bytes = to_csv(report).context("encoding CSV")?;
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Exported prediction to {}", path.display());
        Ok(())
    }
}
