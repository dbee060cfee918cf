//! egui rendering. Widgets read from and write to [`crate::state::AppState`];
//! no logic lives here beyond layout.

pub mod panels;
pub mod plot;
pub mod table;
