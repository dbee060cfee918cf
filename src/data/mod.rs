//! Data layer: core types, feature alignment, prediction, and alerting.
//!
//! Architecture:
//! ```text
//!  model_columns.json      pollution_model.json
//!        │                        │
//!        ▼                        ▼
//!   ┌──────────────────────────────────┐
//!   │  loader    parse → Artifacts      │
//!   └──────────────────────────────────┘
//!        │
//!  InputRecord (year, station id)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ features  │  one-hot station id, align to FeatureSchema
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ regressor │  opaque predict → PredictionResult (6 pollutants)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  alerts   │  safe-limit checks → AlertSet, Severity
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  export   │  Report → CSV bytes
//!   └──────────┘
//! ```

pub mod alerts;
pub mod export;
pub mod features;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod regressor;
