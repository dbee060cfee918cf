use water_quality_predictor::data::alerts::{LimitDirection, SafeLimitTable, Severity};
use water_quality_predictor::data::export::{from_csv, to_csv};
use water_quality_predictor::data::features::align;
use water_quality_predictor::data::model::{FeatureSchema, InputRecord, Pollutant};
use water_quality_predictor::data::pipeline::run;
use water_quality_predictor::data::regressor::Regressor;
use water_quality_predictor::error::ModelError;

/// Returns fixed outputs and records the row it was given.
struct Fixed {
    out: [f64; 6],
    seen: std::cell::RefCell<Vec<Vec<f64>>>,
}

impl Fixed {
    fn new(out: [f64; 6]) -> Self {
        Self {
            out,
            seen: Default::default(),
        }
    }
}

impl Regressor for Fixed {
    fn n_features(&self) -> usize {
        3
    }

    fn n_outputs(&self) -> usize {
        6
    }

    fn predict_row(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        self.seen.borrow_mut().push(row.to_vec());
        Ok(self.out.to_vec())
    }
}

fn schema() -> FeatureSchema {
    FeatureSchema::new(vec!["year".into(), "id_1".into(), "id_2".into()])
}

#[test]
fn clean_water_is_good() {
    let model = Fixed::new([6.0, 5.0, 0.05, 100.0, 0.05, 50.0]);
    let report = run(
        &InputRecord::new(2022, "1"),
        &schema(),
        &model,
        &SafeLimitTable::default(),
    )
    .unwrap();

    assert_eq!(model.seen.borrow().as_slice(), &[vec![2022.0, 1.0, 0.0]]);
    assert!(report.alerts.is_empty());
    assert_eq!(report.severity, Severity::Good);
    assert_eq!(report.alerts.score(), "0 / 6");
    assert!(report.known_station);
}

#[test]
fn low_oxygen_and_nitrate_is_moderate() {
    let model = Fixed::new([3.0, 15.0, 0.05, 100.0, 0.05, 50.0]);
    let report = run(
        &InputRecord::new(2022, "1"),
        &schema(),
        &model,
        &SafeLimitTable::default(),
    )
    .unwrap();

    let alerts = report.alerts.alerts();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].pollutant, Pollutant::O2);
    assert_eq!(alerts[0].direction, LimitDirection::Minimum);
    assert_eq!(alerts[1].pollutant, Pollutant::No3);
    assert_eq!(alerts[1].direction, LimitDirection::Maximum);
    assert_eq!(report.severity, Severity::Moderate);
    assert_eq!(report.alerts.score(), "2 / 6");
}

#[test]
fn unknown_station_has_zero_indicators() {
    let v = align(&InputRecord::new(2050, "7"), &schema());
    assert_eq!(v.indicator_sum(), 0.0);
    assert_eq!(v.get("year"), Some(2050.0));
}

#[test]
fn exported_csv_round_trips() {
    let model = Fixed::new([3.0, 15.0, 0.05, 100.0, 0.05, 50.0]);
    let report = run(
        &InputRecord::new(2031, "2"),
        &schema(),
        &model,
        &SafeLimitTable::default(),
    )
    .unwrap();

    assert_eq!(report.input.csv_file_name(), "prediction_2_2031.csv");
    let bytes = to_csv(&report).unwrap();
    assert!(std::str::from_utf8(&bytes).is_ok());

    let (label, result) = from_csv(&bytes).unwrap();
    assert_eq!(label, "Station 2, Year 2031");
    assert_eq!(result, report.result);
}
