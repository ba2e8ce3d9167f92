//! Superstore sales dashboard.
//!
//! [`data`] holds the load → aggregate → filter pipeline; the remaining
//! modules are the egui front end that renders it.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
