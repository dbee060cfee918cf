//! Water pollutant predictor: one-hot feature alignment, a pre-fit
//! multi-output regressor, safe-limit alerting, and an egui front end.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
