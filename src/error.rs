use thiserror::Error;

/// Failures inside the pre-fit model: malformed artifacts or rows of the
/// wrong width.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model has no {0}")]
    Empty(&'static str),

    #[error("model expects {expected} features, got {got}")]
    FeatureWidth { expected: usize, got: usize },

    #[error("model produced {got} outputs, expected {expected}")]
    OutputWidth { expected: usize, got: usize },

    #[error("tree {tree}, node {node}: {reason}")]
    InvalidTree {
        tree: usize,
        node: usize,
        reason: String,
    },
}

/// Why a single prediction request did not produce a report.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The only recoverable case: nothing is computed.
    #[error("please enter a valid station id")]
    EmptyStationId,

    #[error("prediction failed: {0}")]
    Model(#[from] ModelError),
}

/// Problems writing or reading a prediction CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv buffer: {0}")]
    Buffer(String),

    #[error("expected columns {expected:?}, found {found:?}")]
    Header {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("csv contains no prediction row")]
    MissingRow,

    #[error("column {column}: '{value}' is not a number")]
    Value { column: String, value: String },
}
