//! Trust gauge: risk tier, doughnut and trust-score counter.

use std::time::Duration;

use super::animation::CounterAnimation;
use super::chart::{ChartKind, ChartSeries, ChartSpec};
use super::palette::Tone;
use super::risk::{RiskThresholds, RiskTier};

/// Gauge panel content.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    /// Tier picked from the fake percentage.
    pub tier: RiskTier,
    /// Fake percentage, clamped to `0..=100`.
    pub fake_score: f64,
    /// Counts up to `100 - fake_score`.
    pub trust_score: CounterAnimation,
    /// Doughnut split between fake risk and the authentic remainder.
    pub chart: ChartSpec,
    /// Id of the live chart instance drawn from `chart`.
    pub chart_id: u64,
}

impl GaugeView {
    /// Verdict badge text for the tier.
    #[must_use]
    pub const fn verdict(&self) -> &'static str {
        self.tier.verdict()
    }

    /// Returns `true` once the trust counter rests on its target.
    #[must_use]
    pub const fn is_settled(&self, now: Duration) -> bool {
        self.trust_score.is_settled(now)
    }
}

/// Checks the fake percentage and clamps it for drawing.
///
/// # Errors
///
/// Returns a reason when the percentage is not a finite number.
pub fn gauge_score(fake_percent: f64) -> Result<f64, String> {
    if fake_percent.is_finite() {
        Ok(fake_percent.clamp(0.0, 100.0))
    } else {
        Err(format!("fake_percent is not a number ({fake_percent})"))
    }
}

/// Doughnut spec for a clamped fake score.
#[must_use]
pub fn gauge_chart_spec(fake_score: f64, tier: RiskTier, duration: Duration) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        series: vec![
            ChartSeries::new("Fake Risk", fake_score, tier.tone()),
            ChartSeries::new("Authentic", 100.0 - fake_score, Tone::Slate),
        ],
        animation: duration,
    }
}

/// Assembles the gauge once its chart instance exists.
#[must_use]
pub fn gauge_view(
    fake_score: f64,
    thresholds: &RiskThresholds,
    chart: ChartSpec,
    chart_id: u64,
    started_at: Duration,
) -> GaugeView {
    GaugeView {
        tier: thresholds.classify(fake_score),
        fake_score,
        trust_score: CounterAnimation::count_up(100.0 - fake_score, chart.animation)
            .starting_at(started_at),
        chart,
        chart_id,
    }
}
