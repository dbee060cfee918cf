use super::model::{FeatureSchema, FeatureVector, InputRecord};

// ---------------------------------------------------------------------------
// One-hot alignment
// ---------------------------------------------------------------------------

/// Build the model input row for `input`, columns in `schema` order.
///
/// * `year` carries the input year.
/// * `id_<station>` is 1 when that column exists in the schema.
/// * Every other column is 0.
///
/// A station that never appeared during training has no column, so the row
/// ends up with no indicator set at all. This is not an error.
pub fn align(input: &InputRecord, schema: &FeatureSchema) -> FeatureVector {
    let indicator = FeatureSchema::indicator_column(&input.station_id);

    let values: Vec<f64> = schema
        .columns()
        .iter()
        .map(|col| {
            if col == FeatureSchema::YEAR_COLUMN {
                f64::from(input.year)
            } else if *col == indicator {
                1.0
            } else {
                0.0
            }
        })
        .collect();

    let vector = FeatureVector::from_parts(schema.columns().to_vec(), values);
    if !vector.has_station_indicator() {
        log::warn!(
            "Station '{}' has no '{indicator}' column; predicting without a station indicator",
            input.station_id
        );
    }
    vector
}
