//! CLI operation mode handlers.
//!
//! - [`scan`]: Run one scan, print a summary and optionally write the CSV
//! - [`dashboard_tui`]: Interactive terminal dashboard
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use trustlens::TrustlensConfig;
use trustlens::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};

pub mod dashboard_tui;
pub mod output;
pub mod scan;

/// Telemetry sink selected by the `telemetry` setting.
pub fn telemetry_sink(config: &TrustlensConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}
