//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.trustlens.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `TRUSTLENS_API_URL`, `TRUSTLENS_ASIN`, ...
//! 4. **Command-line arguments** – `--api-url`/`-u`, `--asin`/`-a`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "http://127.0.0.1:5000"
//! asin = "B000123456"
//! pages = 2
//! feed_limit = 50
//! low_risk_max = 20.0
//! moderate_risk_max = 50.0
//! output_dir = "exports"
//! ```

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::analysis::gateway::{DEFAULT_API_URL, analyze_endpoint};
use crate::analysis::{AnalysisError, HttpAnalysisGatewayConfig};
use crate::dashboard::feed::DEFAULT_FEED_LIMIT;
use crate::dashboard::risk::{DEFAULT_LOW_RISK_MAX, DEFAULT_MODERATE_RISK_MAX};
use crate::dashboard::settings::{
    DEFAULT_COUNTER_DURATION_MS, DEFAULT_GAUGE_DURATION_MS, DEFAULT_PAGES,
};
use crate::dashboard::{DashboardSettings, RiskThresholds};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal dashboard.
    Dashboard,
    /// Scan one identifier, print the summary and exit.
    SingleScan,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use trustlens::TrustlensConfig;
///
/// let config = TrustlensConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// let settings = config.dashboard_settings().expect("valid thresholds");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TRUSTLENS",
    discovery(
        dotfile_name = ".trustlens.toml",
        config_file_name = "trustlens.toml",
        app_name = "trustlens"
    )
)]
pub struct TrustlensConfig {
    /// Base URL of the analysis service.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `TRUSTLENS_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: String,

    /// ASIN or product URL to scan.
    ///
    /// Can be provided via:
    /// - CLI: `--asin <ASIN>` or `-a <ASIN>`
    /// - Environment: `TRUSTLENS_ASIN`
    /// - Config file: `asin = "..."`
    #[ortho_config(cli_short = 'a')]
    pub asin: Option<String>,

    /// Number of review pages the service should fetch.
    #[ortho_config()]
    pub pages: u32,

    /// Maximum number of cards in the review feed.
    #[ortho_config()]
    pub feed_limit: usize,

    /// Highest fake percentage still rated low risk.
    #[ortho_config()]
    pub low_risk_max: f64,

    /// Highest fake percentage still rated moderate risk.
    #[ortho_config()]
    pub moderate_risk_max: f64,

    /// Duration of the metric counter animations, in milliseconds.
    #[ortho_config()]
    pub counter_duration_ms: u64,

    /// Duration of the trust gauge animation, in milliseconds.
    #[ortho_config()]
    pub gauge_duration_ms: u64,

    /// Writes the scan as CSV after a single scan.
    ///
    /// Note: like other boolean switches, this is read from the CLI and
    /// configuration files but not from the environment.
    #[ortho_config()]
    pub csv: bool,

    /// Directory that receives CSV exports. Defaults to the working
    /// directory.
    ///
    /// Can be provided via:
    /// - CLI: `--output-dir <DIR>` or `-o <DIR>`
    /// - Environment: `TRUSTLENS_OUTPUT_DIR`
    /// - Config file: `output_dir = "..."`
    #[ortho_config(cli_short = 'o')]
    pub output_dir: Option<Utf8PathBuf>,

    /// Launches the interactive dashboard.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Emits telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for TrustlensConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            asin: None,
            pages: DEFAULT_PAGES,
            feed_limit: DEFAULT_FEED_LIMIT,
            low_risk_max: DEFAULT_LOW_RISK_MAX,
            moderate_risk_max: DEFAULT_MODERATE_RISK_MAX,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            gauge_duration_ms: DEFAULT_GAUGE_DURATION_MS,
            csv: false,
            output_dir: None,
            tui: false,
            telemetry: false,
        }
    }
}

impl TrustlensConfig {
    /// Determines the operation mode.
    ///
    /// A configured identifier without `--tui` runs a single scan; anything
    /// else opens the dashboard, pre-filled with the identifier if given.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.asin.is_some() && !self.tui {
            OperationMode::SingleScan
        } else {
            OperationMode::Dashboard
        }
    }

    /// Returns the identifier to scan or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyIdentifier`] when no identifier is
    /// configured or it is blank.
    pub fn require_asin(&self) -> Result<&str, AnalysisError> {
        self.asin
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AnalysisError::EmptyIdentifier)
    }

    /// Validates that configuration values are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when the API URL is not an
    /// http(s) URL, `pages` or `feed_limit` is zero, or the risk thresholds
    /// are out of range or order.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        analyze_endpoint(&self.api_url)?;
        if self.pages == 0 {
            return Err(AnalysisError::Configuration {
                message: "pages must be at least 1".to_owned(),
            });
        }
        if self.feed_limit == 0 {
            return Err(AnalysisError::Configuration {
                message: "feed_limit must be at least 1".to_owned(),
            });
        }
        self.risk_thresholds()?;
        Ok(())
    }

    /// Builds the risk thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] for invalid thresholds.
    pub fn risk_thresholds(&self) -> Result<RiskThresholds, AnalysisError> {
        RiskThresholds::new(self.low_risk_max, self.moderate_risk_max)
    }

    /// Collects the dashboard presentation settings.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] for invalid thresholds.
    pub fn dashboard_settings(&self) -> Result<DashboardSettings, AnalysisError> {
        Ok(DashboardSettings {
            thresholds: self.risk_thresholds()?,
            feed_limit: self.feed_limit,
            counter_duration: Duration::from_millis(self.counter_duration_ms),
            gauge_duration: Duration::from_millis(self.gauge_duration_ms),
            pages: Some(self.pages),
        })
    }

    /// Builds the HTTP gateway configuration.
    #[must_use]
    pub fn gateway_config(&self) -> HttpAnalysisGatewayConfig {
        HttpAnalysisGatewayConfig::new(self.api_url.clone())
    }

    /// Directory that receives CSV exports.
    #[must_use]
    pub fn export_dir(&self) -> Utf8PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests;
