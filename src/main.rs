//! TrustLens CLI entrypoint for review-authenticity scans.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use trustlens::{AnalysisError, OperationMode, TrustlensConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AnalysisError> {
    let config = load_config()?;
    config.validate()?;

    match config.operation_mode() {
        OperationMode::SingleScan => cli::scan::run(&config).await,
        OperationMode::Dashboard => cli::dashboard_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AnalysisError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<TrustlensConfig, AnalysisError> {
    TrustlensConfig::load().map_err(|error| AnalysisError::Configuration {
        message: error.to_string(),
    })
}
