//! Single-scan operation.

use std::sync::Arc;

use trustlens::{AnalysisError, Dashboard, HttpAnalysisGateway, TrustlensConfig};

use super::output::{write_export_path, write_summary};
use super::telemetry_sink;

/// Scans the configured identifier and prints a summary.
///
/// When `csv` is set the scan is also written to the output directory.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyIdentifier`] if no identifier is configured,
/// the gateway's errors if the scan fails, and [`AnalysisError::Io`] if the
/// summary or CSV cannot be written.
pub async fn run(config: &TrustlensConfig) -> Result<(), AnalysisError> {
    let identifier = config.require_asin()?;
    let gateway = HttpAnalysisGateway::new(&config.gateway_config())?;
    let mut dashboard = Dashboard::new(Arc::new(gateway), config.dashboard_settings()?)
        .with_telemetry(telemetry_sink(config));

    let projection = dashboard.analyze(identifier).await?;
    write_summary(projection)?;

    if config.csv {
        let path = dashboard.export_to_dir(&config.export_dir())?;
        write_export_path(&path)?;
    }
    Ok(())
}
