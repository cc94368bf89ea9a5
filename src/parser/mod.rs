//! Sample parsing and schema definitions.
//!
//! This module handles:
//! - Reading JSON and CSV sample files
//! - Validating sample values
//! - Defining the report schema

pub mod samples;
pub mod schema;

// Re-export main types
pub use schema::{CurvePoint, LatencyCurveReport, SampleRecord};
pub use samples::{parse_samples_csv, parse_samples_json, read_samples, to_report, SampleFormat};
