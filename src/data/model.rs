use std::fmt;

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// Form constants
// ---------------------------------------------------------------------------

/// Smallest year accepted by the form.
pub const YEAR_MIN: i32 = 2000;
/// Largest year accepted by the form.
pub const YEAR_MAX: i32 = 2100;
/// Year pre-filled in the form.
pub const DEFAULT_YEAR: i32 = 2022;
/// Station id pre-filled in the form.
pub const DEFAULT_STATION_ID: &str = "1";

// ---------------------------------------------------------------------------
// Pollutant – one predicted output
// ---------------------------------------------------------------------------

/// The six pollutants predicted by the model, in canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pollutant {
    O2,
    No3,
    No2,
    So4,
    Po4,
    Cl,
}

impl Pollutant {
    /// All pollutants in the order the model emits them.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::O2,
        Pollutant::No3,
        Pollutant::No2,
        Pollutant::So4,
        Pollutant::Po4,
        Pollutant::Cl,
    ];

    /// Column name used in tables and CSV exports.
    pub fn column(self) -> &'static str {
        match self {
            Pollutant::O2 => "O2",
            Pollutant::No3 => "NO3",
            Pollutant::No2 => "NO2",
            Pollutant::So4 => "SO4",
            Pollutant::Po4 => "PO4",
            Pollutant::Cl => "CL",
        }
    }

    /// Chemical formula with subscripts, for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Pollutant::O2 => "O₂",
            Pollutant::No3 => "NO₃",
            Pollutant::No2 => "NO₂",
            Pollutant::So4 => "SO₄",
            Pollutant::Po4 => "PO₄",
            Pollutant::Cl => "Cl",
        }
    }

    /// Short explanation shown in the info section.
    pub fn description(self) -> &'static str {
        match self {
            Pollutant::O2 => {
                "Dissolved oxygen. Essential for aquatic life; low levels (<5 mg/L) can harm fish."
            }
            Pollutant::No3 => {
                "Nitrate. From fertilizers and sewage; causes algal growth and health risks."
            }
            Pollutant::No2 => {
                "Nitrite. Toxic at low levels; indicates pollution and nitrogen imbalance."
            }
            Pollutant::So4 => "Sulfate. High levels affect taste and corrode pipes.",
            Pollutant::Po4 => "Phosphate. Promotes eutrophication and algal blooms.",
            Pollutant::Cl => {
                "Chloride. High chloride harms freshwater life and affects water taste."
            }
        }
    }

    /// Position of this pollutant in the model output.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// InputRecord – one form submission
// ---------------------------------------------------------------------------

/// The user-supplied inputs for a single prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub year: i32,
    pub station_id: String,
}

impl InputRecord {
    pub fn new(year: i32, station_id: impl Into<String>) -> Self {
        Self {
            year,
            station_id: station_id.into(),
        }
    }

    /// Row label used by the results table and the CSV export.
    pub fn row_label(&self) -> String {
        format!("Station {}, Year {}", self.station_id, self.year)
    }

    /// Suggested file name for the CSV download.
    pub fn csv_file_name(&self) -> String {
        format!("prediction_{}_{}.csv", self.station_id, self.year)
    }
}

// ---------------------------------------------------------------------------
// FeatureSchema – the column contract fixed at training time
// ---------------------------------------------------------------------------

/// Ordered list of feature columns the model expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Name of the numeric year column.
    pub const YEAR_COLUMN: &'static str = "year";
    /// Prefix of one-hot station indicator columns.
    pub const STATION_PREFIX: &'static str = "id_";

    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Indicator column name for a station id.
    pub fn indicator_column(station_id: &str) -> String {
        format!("{}{station_id}", Self::STATION_PREFIX)
    }

    /// All one-hot station columns, in schema order.
    pub fn indicator_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| c.starts_with(Self::STATION_PREFIX))
    }

    /// Station ids seen during training, in schema order.
    pub fn known_stations(&self) -> Vec<&str> {
        self.indicator_columns()
            .filter_map(|c| c.strip_prefix(Self::STATION_PREFIX))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// FeatureVector – one aligned model input row
// ---------------------------------------------------------------------------

/// A numeric row whose columns match a [`FeatureSchema`] exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Pair columns with values. Both must have the same length.
    pub(crate) fn from_parts(columns: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in schema order, as handed to the regressor.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    /// Sum over all station indicator columns.
    pub fn indicator_sum(&self) -> f64 {
        self.columns
            .iter()
            .zip(&self.values)
            .filter(|(c, _)| c.starts_with(FeatureSchema::STATION_PREFIX))
            .map(|(_, v)| v)
            .sum()
    }

    /// Whether any station indicator is set.
    pub fn has_station_indicator(&self) -> bool {
        self.indicator_sum() > 0.0
    }
}

// ---------------------------------------------------------------------------
// PredictionResult – the six model outputs
// ---------------------------------------------------------------------------

/// Predicted concentrations (mg/L) in canonical pollutant order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    values: [f64; 6],
}

impl PredictionResult {
    pub fn new(values: [f64; 6]) -> Self {
        Self { values }
    }

    pub fn get(&self, pollutant: Pollutant) -> f64 {
        self.values[pollutant.index()]
    }

    pub fn values(&self) -> &[f64; 6] {
        &self.values
    }

    /// (pollutant, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.iter().map(|&p| (p, self.get(p)))
    }

    /// The pollutant with the largest predicted value.
    pub fn max_pollutant(&self) -> Pollutant {
        self.iter()
            .fold((Pollutant::O2, f64::NEG_INFINITY), |best, (p, v)| {
                if v > best.1 {
                    (p, v)
                } else {
                    best
                }
            })
            .0
    }
}

impl TryFrom<Vec<f64>> for PredictionResult {
    type Error = ModelError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let got = values.len();
        let values: [f64; 6] = values.try_into().map_err(|_| ModelError::OutputWidth {
            expected: Pollutant::ALL.len(),
            got,
        })?;
        Ok(Self { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pollutant_order_matches_model_output() {
        let cols: Vec<&str> = Pollutant::ALL.iter().map(|p| p.column()).collect();
        assert_eq!(cols, ["O2", "NO3", "NO2", "SO4", "PO4", "CL"]);
        for (i, p) in Pollutant::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn input_labels() {
        let input = InputRecord::new(2022, "17");
        assert_eq!(input.row_label(), "Station 17, Year 2022");
        assert_eq!(input.csv_file_name(), "prediction_17_2022.csv");
    }

    #[test]
    fn known_stations_keep_schema_order() {
        let schema = FeatureSchema::new(
            ["year", "id_10", "id_2", "id_A"].map(String::from).to_vec(),
        );
        assert_eq!(schema.known_stations(), ["10", "2", "A"]);
        assert!(schema.contains("year"));
        assert!(!schema.contains("id_3"));
    }

    #[test]
    fn prediction_result_requires_six_values() {
        let ok = PredictionResult::try_from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(ok.get(Pollutant::So4), 4.0);
        assert_eq!(ok.max_pollutant(), Pollutant::Cl);

        let err = PredictionResult::try_from(vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ModelError::OutputWidth { expected: 6, got: 2 }));
    }
}
