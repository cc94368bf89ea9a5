//! Fixed-width text rendering of a latency curve.

use crate::parser::schema::CurvePoint;

/// Render up to `limit` curve points as a text table
///
/// **Public** - used by `--summary`
pub fn render_table(points: &[CurvePoint], limit: usize) -> String {
    let mut out = format!(
        "{:>12}  {:>12}  {:>12}  {:>12}\n",
        "REQUESTS", "MIN (ms)", "AVG (ms)", "MAX (ms)"
    );
    out.push_str(&"-".repeat(54));
    out.push('\n');

    for point in points.iter().take(limit) {
        out.push_str(&format!(
            "{:>12}  {:>12.3}  {:>12.3}  {:>12.3}\n",
            point.count, point.min_latency_ms, point.avg_latency_ms, point.max_latency_ms
        ));
    }

    if points.len() > limit {
        out.push_str(&format!("... {} more rows\n", points.len() - limit));
    }

    out
}
