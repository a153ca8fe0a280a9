//! Dashboard state and view-models.
//!
//! [`Dashboard`] ties the request lifecycle, the result projection and the
//! single-slot scan cache together. The panel view-models it produces are
//! plain data; the TUI renders them and tests assert on them directly.
//!
//! A failed request changes nothing but the busy state and the last error:
//! the previous projection stays on screen and the cached scan stays
//! exportable.

pub mod animation;
pub mod cache;
pub mod chart;
pub mod distribution;
pub mod feed;
pub mod gauge;
pub mod metrics;
pub mod orchestrator;
pub mod palette;
pub mod projector;
pub mod risk;
pub mod settings;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};

pub use animation::{CounterAnimation, FRAME_INTERVAL, FrameClock, MonotonicClock, VirtualClock};
pub use cache::{CachedScan, ScanCache};
pub use chart::{ChartHandle, ChartInstance, ChartKind, ChartSeries, ChartSpec};
pub use distribution::DistributionView;
pub use feed::{FeedCard, FeedView};
pub use gauge::GaugeView;
pub use metrics::{MetricsView, ProgressBar};
pub use orchestrator::{BusyView, PendingAnalysis, RequestOrchestrator};
pub use palette::Tone;
pub use projector::{MetaStrip, PanelState, Projection, ResultProjector};
pub use risk::{RiskThresholds, RiskTier};
pub use settings::DashboardSettings;

use crate::analysis::{AnalysisError, AnalysisGateway, AnalysisResult};
use crate::export::CsvExport;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

#[expect(
    clippy::cast_precision_loss,
    reason = "review counts stay far below 2^52"
)]
pub(crate) const fn count_as_value(count: u64) -> f64 {
    count as f64
}

/// State holder behind the dashboard screen.
pub struct Dashboard {
    orchestrator: RequestOrchestrator,
    projector: ResultProjector,
    cache: ScanCache,
    projection: Option<Projection>,
    last_error: Option<AnalysisError>,
    clock: Arc<dyn FrameClock>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("orchestrator", &self.orchestrator)
            .field("projector", &self.projector)
            .field("cache", &self.cache)
            .field("projection", &self.projection)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Creates an idle dashboard with nothing shown or cached.
    #[must_use]
    pub fn new(gateway: Arc<dyn AnalysisGateway>, settings: DashboardSettings) -> Self {
        Self {
            orchestrator: RequestOrchestrator::new(gateway, settings.pages),
            projector: ResultProjector::new(settings),
            cache: ScanCache::new(),
            projection: None,
            last_error: None,
            clock: Arc::new(MonotonicClock::new()),
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Replaces the frame clock used to anchor animations.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn FrameClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Validates `raw` and enters the busy state.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyIdentifier`] or
    /// [`AnalysisError::RequestInFlight`]; the error is also kept as the
    /// last error.
    pub fn submit(&mut self, raw: &str) -> Result<PendingAnalysis, AnalysisError> {
        match self.orchestrator.begin(raw) {
            Ok(pending) => {
                self.last_error = None;
                Ok(pending)
            }
            Err(error) => Err(self.record_failure(error)),
        }
    }

    /// Applies the outcome of a submitted request.
    ///
    /// On success the projection and the cache are both replaced. On
    /// failure only the busy state and the last error change.
    ///
    /// # Errors
    ///
    /// Returns the error carried by `outcome`.
    pub fn complete(
        &mut self,
        pending: &PendingAnalysis,
        outcome: Result<AnalysisResult, AnalysisError>,
        analysed_at: DateTime<Utc>,
    ) -> Result<&Projection, AnalysisError> {
        let result = match self.orchestrator.finish(outcome) {
            Ok(result) => result,
            Err(error) => return Err(self.record_failure(error)),
        };

        let projection = self.projector.project(
            &pending.identifier,
            &result,
            analysed_at,
            self.clock.now(),
        );
        self.telemetry.record(TelemetryEvent::AnalysisCompleted {
            identifier: projection.meta.identifier.clone(),
            total_reviews: result.summary.total_reviews,
            flagged_reviews: result.chart_data.fake,
        });
        self.cache.store(CachedScan::new(
            pending.identifier.as_str(),
            result.results,
        ));
        Ok(&*self.projection.insert(projection))
    }

    /// Submits `raw`, awaits the gateway and applies the outcome.
    ///
    /// # Errors
    ///
    /// Returns validation, transport, server and decoding errors.
    pub async fn analyze(&mut self, raw: &str) -> Result<&Projection, AnalysisError> {
        let pending = self.submit(raw)?;
        let outcome = self.orchestrator.gateway().analyze(&pending.request).await;
        self.complete(&pending, outcome, Utc::now())
    }

    /// Formats the cached scan as CSV.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingScan`] before the first success.
    pub fn export_csv(&self) -> Result<CsvExport, AnalysisError> {
        CsvExport::from_scan(self.cache.require()?)
    }

    /// Writes the cached scan into `dir` and returns the file path.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingScan`] before the first success and
    /// [`AnalysisError::Io`] when the file cannot be written.
    pub fn export_to_dir(&self, dir: &Utf8Path) -> Result<Utf8PathBuf, AnalysisError> {
        let export = self.export_csv()?;
        let path = export.write_to_dir(dir)?;
        self.telemetry.record(TelemetryEvent::CsvExported {
            file_name: export.file_name.clone(),
            rows: export.rows,
        });
        Ok(path)
    }

    fn record_failure(&mut self, error: AnalysisError) -> AnalysisError {
        tracing::warn!(kind = error.kind(), "analysis failed: {error}");
        self.telemetry.record(TelemetryEvent::AnalysisFailed {
            kind: error.kind().to_owned(),
            message: error.to_string(),
        });
        self.last_error = Some(error.clone());
        error
    }

    /// Projection of the last successful scan.
    #[must_use]
    pub const fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    /// Error of the last failed action, cleared by the next submission.
    #[must_use]
    pub const fn last_error(&self) -> Option<&AnalysisError> {
        self.last_error.as_ref()
    }

    /// Cache of the last successful scan.
    #[must_use]
    pub const fn cache(&self) -> &ScanCache {
        &self.cache
    }

    /// Projector and its chart handles.
    #[must_use]
    pub const fn projector(&self) -> &ResultProjector {
        &self.projector
    }

    /// Returns `true` once a scan can be exported.
    #[must_use]
    pub const fn export_enabled(&self) -> bool {
        self.cache.latest().is_some()
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.orchestrator.is_busy()
    }

    /// Trigger and panel appearance for the current state.
    #[must_use]
    pub const fn busy_view(&self) -> BusyView {
        self.orchestrator.busy_view()
    }

    /// Gateway used for requests.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn AnalysisGateway> {
        self.orchestrator.gateway()
    }

    /// Current frame-clock time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Returns `true` while any counter of the shown projection moves.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let now = self.now();
        self.projection
            .as_ref()
            .is_some_and(|projection| projection.is_animating(now))
    }
}
