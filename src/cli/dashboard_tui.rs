//! TUI mode for the interactive dashboard.
//!
//! This module provides the entry point for the terminal dashboard that
//! runs scans, animates the results and exports CSV files.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use trustlens::tui::{DashboardApp, DashboardContext, set_dashboard_context};
use trustlens::{AnalysisError, HttpAnalysisGateway, TrustlensConfig};

/// Runs the dashboard TUI.
///
/// # Errors
///
/// Returns an error if:
/// - The service URL or thresholds are invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &TrustlensConfig) -> Result<(), AnalysisError> {
    let gateway = HttpAnalysisGateway::new(&config.gateway_config())?;
    let mut context = DashboardContext::new(Arc::new(gateway));
    context.settings = config.dashboard_settings()?;
    context.output_dir = config.export_dir();
    context.initial_identifier.clone_from(&config.asin);

    // Store the context for DashboardApp::init() to retrieve. If already
    // set (e.g. re-running the TUI in the same process), the existing
    // context remains.
    let _already_set = set_dashboard_context(context);

    run_tui().await.map_err(|error| AnalysisError::Configuration {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
