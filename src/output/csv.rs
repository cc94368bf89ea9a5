//! CSV curve writer.
//!
//! One row per curve point, latencies in milliseconds:
//! `KEYS,MIN-LATENCY-MS,AVG-LATENCY-MS,MAX-LATENCY-MS`

use super::json::create_output_file;
use crate::parser::schema::CurvePoint;
use crate::utils::config::CURVE_CSV_HEADER;
use crate::utils::error::OutputError;
use log::info;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write curve points to a CSV file
///
/// **Public** - used by the aggregate command when `--csv` is given
pub fn write_curve_csv(
    points: &[CurvePoint],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!(
        "Writing {} curve rows to: {}",
        points.len(),
        output_path.display()
    );

    let file = create_output_file(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(curve_to_csv(points).as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Render curve points as CSV text
///
/// **Public** - useful for tests and piping
pub fn curve_to_csv(points: &[CurvePoint]) -> String {
    let mut out = CURVE_CSV_HEADER.join(",");
    out.push('\n');

    for point in points {
        out.push_str(&format!(
            "{},{:.3},{:.3},{:.3}\n",
            point.count, point.min_latency_ms, point.avg_latency_ms, point.max_latency_ms
        ));
    }

    out
}
