//! Interactive supermarket sales dashboard.
//!
//! The [`data`] layer loads the sales sheet, filters it by city, customer type
//! and gender, and aggregates the selection. [`app`] and [`ui`] draw it with egui.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
