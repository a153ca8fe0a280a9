//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use camino::Utf8Path;
use trustlens::dashboard::animation::format_counter;
use trustlens::dashboard::{CounterAnimation, PanelState};
use trustlens::{AnalysisError, Projection};

fn io_error(error: &io::Error) -> AnalysisError {
    AnalysisError::Io {
        message: error.to_string(),
    }
}

fn settled(counter: &CounterAnimation) -> String {
    format_counter(counter.target(), counter.target())
}

/// Writes a summary of the scan to stdout.
pub fn write_summary(projection: &Projection) -> Result<(), AnalysisError> {
    let mut stdout = io::stdout().lock();
    write_summary_to(&mut stdout, projection)
}

/// Writes a summary of the scan to the given writer.
///
/// Counters are printed at their final values; there is no animation
/// outside the dashboard.
pub fn write_summary_to<W: Write>(
    writer: &mut W,
    projection: &Projection,
) -> Result<(), AnalysisError> {
    let meta = &projection.meta;
    writeln!(
        writer,
        "Product: {} ({})\nAnalysed: {}",
        meta.identifier,
        meta.marketplace,
        meta.timestamp_label()
    )
    .map_err(|e| io_error(&e))?;

    match &projection.metrics {
        PanelState::Ready(metrics) => writeln!(
            writer,
            "Reviews: {}  Fake: {}%  Genuine: {}%  Avg confidence: {}%",
            settled(&metrics.total_reviews),
            settled(&metrics.fake_percent),
            settled(&metrics.trust_percent),
            settled(&metrics.avg_confidence),
        ),
        PanelState::Unavailable { reason } => writeln!(writer, "Metrics unavailable: {reason}"),
    }
    .map_err(|e| io_error(&e))?;

    match &projection.gauge {
        PanelState::Ready(gauge) => writeln!(
            writer,
            "Risk: {} ({}), trust score {}",
            gauge.tier,
            gauge.verdict(),
            settled(&gauge.trust_score),
        ),
        PanelState::Unavailable { reason } => writeln!(writer, "Risk unavailable: {reason}"),
    }
    .map_err(|e| io_error(&e))?;

    match &projection.distribution {
        PanelState::Ready(distribution) => {
            let bars = distribution
                .chart
                .series
                .iter()
                .map(|series| format!("{} {}", series.label, series.value))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(writer, "Distribution: {bars}")
        }
        PanelState::Unavailable { reason } => {
            writeln!(writer, "Distribution unavailable: {reason}")
        }
    }
    .map_err(|e| io_error(&e))?;

    Ok(())
}

/// Writes the location of an exported CSV file to stdout.
pub fn write_export_path(path: &Utf8Path) -> Result<(), AnalysisError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "CSV written to {path}").map_err(|e| io_error(&e))
}
