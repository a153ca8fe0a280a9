//! Presentation settings shared by the projector and orchestrator.

use std::time::Duration;

use super::feed::DEFAULT_FEED_LIMIT;
use super::risk::RiskThresholds;

/// Default number of review pages requested from the service.
pub const DEFAULT_PAGES: u32 = 2;
/// Default duration of the metric counters, in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 1500;
/// Default duration of the trust gauge counter, in milliseconds.
pub const DEFAULT_GAUGE_DURATION_MS: u64 = 2000;

/// Tunables for projecting a scan onto the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSettings {
    /// Risk tier boundaries.
    pub thresholds: RiskThresholds,
    /// Maximum number of feed cards.
    pub feed_limit: usize,
    /// Duration of the metric counters and the distribution chart.
    pub counter_duration: Duration,
    /// Duration of the trust gauge counter and doughnut.
    pub gauge_duration: Duration,
    /// Page hint sent with each request.
    pub pages: Option<u32>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            thresholds: RiskThresholds::default(),
            feed_limit: DEFAULT_FEED_LIMIT,
            counter_duration: Duration::from_millis(DEFAULT_COUNTER_DURATION_MS),
            gauge_duration: Duration::from_millis(DEFAULT_GAUGE_DURATION_MS),
            pages: Some(DEFAULT_PAGES),
        }
    }
}
