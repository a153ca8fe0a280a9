//! Terminal dashboard for review-authenticity scans.
//!
//! This module drives [`crate::Dashboard`] from an interactive terminal UI
//! built on the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: One render function per panel in [`components`]
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Analysis requests run as command futures, so the screen keeps rendering
//! while a scan is in flight. A frame-tick command re-renders the counters
//! until every animation has settled.
//!
//! # Startup context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway, settings and output directory are handed over
//! through module-level storage. Call [`set_dashboard_context`] before
//! starting the program; `DashboardApp::init()` reads it back.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use camino::Utf8PathBuf;

use crate::analysis::{AnalysisError, AnalysisGateway, AnalysisResult, AnalyzeRequest};
use crate::dashboard::DashboardSettings;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::DashboardApp;

/// Global storage for the startup context.
///
/// This is set before the TUI program starts and read by
/// `DashboardApp::init()`.
static DASHBOARD_CONTEXT: OnceLock<DashboardContext> = OnceLock::new();

/// Everything the dashboard needs that cannot be passed to `init()`.
#[derive(Clone)]
pub struct DashboardContext {
    /// Gateway used for every scan.
    pub gateway: Arc<dyn AnalysisGateway>,
    /// Thresholds, feed limit and animation timings.
    pub settings: DashboardSettings,
    /// Directory CSV exports are written to.
    pub output_dir: Utf8PathBuf,
    /// Identifier pre-filled into the input line.
    pub initial_identifier: Option<String>,
    /// Sink for analysis and export events.
    pub telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for DashboardContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardContext")
            .field("settings", &self.settings)
            .field("output_dir", &self.output_dir)
            .field("initial_identifier", &self.initial_identifier)
            .finish_non_exhaustive()
    }
}

impl DashboardContext {
    /// Context with default settings, the current directory for exports and
    /// no telemetry.
    #[must_use]
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self {
            gateway,
            settings: DashboardSettings::default(),
            output_dir: Utf8PathBuf::from("."),
            initial_identifier: None,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Context used when none was configured: every scan fails with a
    /// configuration error.
    fn unconfigured() -> Self {
        Self::new(Arc::new(UnconfiguredGateway))
    }
}

/// Sets the startup context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_dashboard_context(context: DashboardContext) -> bool {
    DASHBOARD_CONTEXT.set(context).is_ok()
}

/// Returns the stored context, or an unconfigured one.
pub(crate) fn dashboard_context() -> DashboardContext {
    DASHBOARD_CONTEXT
        .get()
        .cloned()
        .unwrap_or_else(DashboardContext::unconfigured)
}

struct UnconfiguredGateway;

#[async_trait]
impl AnalysisGateway for UnconfiguredGateway {
    async fn analyze(&self, _request: &AnalyzeRequest) -> Result<AnalysisResult, AnalysisError> {
        Err(AnalysisError::Configuration {
            message: "dashboard context not configured".to_owned(),
        })
    }
}
