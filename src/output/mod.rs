//! Output writers for latency curve reports.
//!
//! This module handles writing data to disk in various formats:
//! - JSON reports
//! - CSV curves
//! - Text tables

pub mod csv;
pub mod json;
pub mod table;

// Re-export main functions
pub use csv::{curve_to_csv, write_curve_csv};
pub use json::{read_report, validate_path, write_report};
pub use table::render_table;
