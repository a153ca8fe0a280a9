//! Fans one analysis result out into the dashboard panels.
//!
//! Each panel is built on its own; a panel that cannot be built becomes
//! [`PanelState::Unavailable`] without affecting the others. The projector
//! owns the two chart handles so that every projection replaces, rather
//! than adds to, the charts of the previous scan.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::analysis::{AnalysisResult, ProductIdentifier, identifier::extract_asin};

use super::chart::ChartHandle;
use super::distribution::{DistributionView, distribution_chart_spec};
use super::feed::FeedView;
use super::gauge::{GaugeView, gauge_chart_spec, gauge_score, gauge_view};
use super::metrics::MetricsView;
use super::settings::DashboardSettings;

/// A panel that either rendered or explains why it could not.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    /// Panel content.
    Ready(T),
    /// Panel could not be built from the result.
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
}

impl<T> PanelState<T> {
    fn from_result(panel: &'static str, result: Result<T, String>) -> Self {
        match result {
            Ok(view) => Self::Ready(view),
            Err(reason) => {
                tracing::warn!(panel, %reason, "panel unavailable");
                Self::Unavailable { reason }
            }
        }
    }

    /// Panel content, when ready.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(view) => Some(view),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Identifier, marketplace and time of the shown scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaStrip {
    /// Identifier echoed by the service, else the submitted one.
    pub identifier: String,
    /// ASIN found in the identifier.
    pub asin: Option<String>,
    /// Marketplace domain of a submitted URL.
    pub marketplace: String,
    /// When the result arrived.
    pub analysed_at: DateTime<Utc>,
}

impl MetaStrip {
    /// Analysis time as `HH:MM:SS UTC`.
    #[must_use]
    pub fn timestamp_label(&self) -> String {
        self.analysed_at.format("%H:%M:%S UTC").to_string()
    }
}

/// Everything the dashboard shows for one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Metadata strip under the input line.
    pub meta: MetaStrip,
    /// Metric counters.
    pub metrics: PanelState<MetricsView>,
    /// Trust gauge.
    pub gauge: PanelState<GaugeView>,
    /// Distribution chart.
    pub distribution: PanelState<DistributionView>,
    /// Review feed.
    pub feed: PanelState<FeedView>,
}

impl Projection {
    /// Returns `true` while any counter is still moving.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        let metrics_moving = self
            .metrics
            .ready()
            .is_some_and(|metrics| !metrics.is_settled(now));
        let gauge_moving = self.gauge.ready().is_some_and(|gauge| !gauge.is_settled(now));
        metrics_moving || gauge_moving
    }
}

/// Builds [`Projection`]s and owns the chart instances behind them.
#[derive(Debug, Clone)]
pub struct ResultProjector {
    settings: DashboardSettings,
    gauge_chart: ChartHandle,
    distribution_chart: ChartHandle,
}

impl ResultProjector {
    /// Creates a projector with no charts drawn yet.
    #[must_use]
    pub const fn new(settings: DashboardSettings) -> Self {
        Self {
            settings,
            gauge_chart: ChartHandle::new("gauge"),
            distribution_chart: ChartHandle::new("distribution"),
        }
    }

    /// Settings used for every projection.
    #[must_use]
    pub const fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Handle of the gauge doughnut.
    #[must_use]
    pub const fn gauge_chart(&self) -> &ChartHandle {
        &self.gauge_chart
    }

    /// Handle of the distribution bars.
    #[must_use]
    pub const fn distribution_chart(&self) -> &ChartHandle {
        &self.distribution_chart
    }

    /// Projects `result`, animating from clock time `started_at`.
    pub fn project(
        &mut self,
        submitted: &ProductIdentifier,
        result: &AnalysisResult,
        analysed_at: DateTime<Utc>,
        started_at: Duration,
    ) -> Projection {
        let settings = self.settings;
        let identifier = result.identifier_or(submitted.as_str()).to_owned();
        let asin = extract_asin(&identifier)
            .or_else(|| submitted.asin())
            .map(str::to_owned);
        let meta = MetaStrip {
            identifier,
            asin,
            marketplace: submitted.marketplace().to_owned(),
            analysed_at,
        };

        let metrics = PanelState::from_result(
            "metrics",
            MetricsView::build(&result.summary, settings.counter_duration, started_at),
        );
        let gauge = PanelState::from_result("gauge", self.build_gauge(result, started_at));

        let distribution_instance = self.distribution_chart.replace(distribution_chart_spec(
            result.chart_data,
            settings.counter_duration,
        ));
        let distribution = PanelState::Ready(DistributionView {
            genuine: result.chart_data.genuine,
            fake: result.chart_data.fake,
            chart: distribution_instance.spec.clone(),
            chart_id: distribution_instance.id,
        });

        let feed = PanelState::Ready(FeedView::build(&result.results, settings.feed_limit));

        Projection {
            meta,
            metrics,
            gauge,
            distribution,
            feed,
        }
    }

    fn build_gauge(
        &mut self,
        result: &AnalysisResult,
        started_at: Duration,
    ) -> Result<GaugeView, String> {
        let thresholds = self.settings.thresholds;
        let score = match gauge_score(result.summary.fake_percent) {
            Ok(score) => score,
            Err(reason) => {
                self.gauge_chart.dispose();
                return Err(reason);
            }
        };
        let tier = thresholds.classify(score);
        let instance = self.gauge_chart.replace(gauge_chart_spec(
            score,
            tier,
            self.settings.gauge_duration,
        ));
        Ok(gauge_view(
            score,
            &thresholds,
            instance.spec.clone(),
            instance.id,
            started_at,
        ))
    }
}
