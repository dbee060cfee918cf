use super::alerts::{evaluate, AlertSet, SafeLimitTable, Severity};
use super::features::align;
use super::model::{FeatureSchema, InputRecord, PredictionResult};
use super::regressor::Regressor;
use crate::error::PredictError;

/// Everything one successful prediction produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub input: InputRecord,
    pub result: PredictionResult,
    pub alerts: AlertSet,
    pub severity: Severity,
    /// False when the station id matched no indicator column.
    pub known_station: bool,
}

/// Align, predict, and evaluate one form submission.
///
/// An empty station id stops before the model is touched. Model failures
/// fail the request as a whole.
pub fn run<R: Regressor + ?Sized>(
    input: &InputRecord,
    schema: &FeatureSchema,
    model: &R,
    limits: &SafeLimitTable,
) -> Result<Report, PredictError> {
    if input.station_id.is_empty() {
        return Err(PredictError::EmptyStationId);
    }

    let vector = align(input, schema);
    let raw = model.predict_row(vector.values())?;
    let result = PredictionResult::try_from(raw)?;
    let alerts = evaluate(&result, limits);
    let severity = alerts.severity();

    log::info!(
        "{}: {:?} -> {} ({})",
        input.row_label(),
        result.values(),
        severity,
        alerts.score()
    );

    Ok(Report {
        input: input.clone(),
        result,
        alerts,
        severity,
        known_station: vector.has_station_indicator(),
    })
}
