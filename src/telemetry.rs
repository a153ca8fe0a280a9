//! Application telemetry events and sinks.
//!
//! TrustLens keeps no analytics of its own, but scan outcomes are worth
//! capturing as structured lines when debugging against a live analysis
//! service.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by TrustLens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A scan finished and its result was projected.
    AnalysisCompleted {
        /// Identifier shown in the metadata strip.
        identifier: String,
        /// Number of reviews the service classified.
        total_reviews: u64,
        /// Number of reviews flagged fake.
        flagged_reviews: u64,
    },
    /// A scan was rejected or failed.
    AnalysisFailed {
        /// Stable error kind, see [`crate::AnalysisError::kind`].
        kind: String,
        /// User-facing message.
        message: String,
    },
    /// The cached scan was written as CSV.
    CsvExported {
        /// Name of the written file.
        file_name: String,
        /// Number of data rows, excluding the header.
        rows: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Intended for local debugging; nothing is transmitted.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Sink that keeps events in memory for assertions.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordingTelemetrySink {
    events: std::sync::Mutex<Vec<TelemetryEvent>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingTelemetrySink {
    /// Drains the recorded events.
    ///
    /// # Panics
    ///
    /// Panics if the event mutex was poisoned by a panicking recorder.
    #[must_use]
    #[expect(clippy::expect_used, reason = "test helper; poisoning is a test bug")]
    pub fn take(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .expect("events mutex should be available")
            .drain(..)
            .collect()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl TelemetrySink for RecordingTelemetrySink {
    #[expect(clippy::expect_used, reason = "test helper; poisoning is a test bug")]
    fn record(&self, event: TelemetryEvent) {
        self.events
            .lock()
            .expect("events mutex should be available")
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{RecordingTelemetrySink, TelemetryEvent, TelemetrySink};

    #[rstest]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::CsvExported {
            file_name: "trustlens_analysis_B000123456.csv".to_owned(),
            rows: 2,
        });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::CsvExported {
                file_name: "trustlens_analysis_B000123456.csv".to_owned(),
                rows: 2,
            }]
        );
        assert!(sink.take().is_empty(), "take should drain the sink");
    }

    #[rstest]
    fn events_serialise_with_snake_case_tag() {
        let event = TelemetryEvent::AnalysisFailed {
            kind: "empty_identifier".to_owned(),
            message: "Please enter an ASIN or URL".to_owned(),
        };

        let json = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(json["type"], "analysis_failed");
        assert_eq!(json["kind"], "empty_identifier");
    }
}
