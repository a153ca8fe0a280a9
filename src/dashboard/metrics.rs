//! Headline metric counters and progress bars.

use std::time::Duration;

use crate::analysis::ScanSummary;

use super::animation::CounterAnimation;
use super::count_as_value;

/// Percentage bar clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    percent: f64,
}

impl ProgressBar {
    /// Creates a bar, clamping the percentage.
    #[must_use]
    pub const fn new(percent: f64) -> Self {
        Self {
            percent: percent.clamp(0.0, 100.0),
        }
    }

    /// Clamped percentage.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Number of filled cells when the bar is drawn `width` cells wide.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "percent is clamped to 0..=100 and widths are terminal-sized"
    )]
    pub fn filled_cells(&self, width: usize) -> usize {
        let filled = (self.percent / 100.0 * width as f64).round() as usize;
        filled.min(width)
    }
}

/// Metrics panel: four counters and two bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsView {
    /// Reviews classified.
    pub total_reviews: CounterAnimation,
    /// Share of fake reviews.
    pub fake_percent: CounterAnimation,
    /// Share of genuine reviews, shown as the trust percentage.
    pub trust_percent: CounterAnimation,
    /// Mean classifier confidence.
    pub avg_confidence: CounterAnimation,
    /// Bar sized by the fake share.
    pub fake_bar: ProgressBar,
    /// Bar sized by the genuine share.
    pub trust_bar: ProgressBar,
}

impl MetricsView {
    /// Builds the counters, all starting at `started_at`.
    ///
    /// # Errors
    ///
    /// Returns a reason when any percentage is not a finite number.
    pub fn build(
        summary: &ScanSummary,
        duration: Duration,
        started_at: Duration,
    ) -> Result<Self, String> {
        let percentages = [
            ("fake_percent", summary.fake_percent),
            ("genuine_percent", summary.genuine_percent),
            ("avg_confidence", summary.avg_confidence),
        ];
        if let Some((name, value)) = percentages.iter().find(|(_, value)| !value.is_finite()) {
            return Err(format!("{name} is not a number ({value})"));
        }

        let counter =
            |target: f64| CounterAnimation::count_up(target, duration).starting_at(started_at);
        Ok(Self {
            total_reviews: counter(count_as_value(summary.total_reviews)),
            fake_percent: counter(summary.fake_percent),
            trust_percent: counter(summary.genuine_percent),
            avg_confidence: counter(summary.avg_confidence),
            fake_bar: ProgressBar::new(summary.fake_percent),
            trust_bar: ProgressBar::new(summary.genuine_percent),
        })
    }

    /// Returns `true` once all four counters rest on their targets.
    #[must_use]
    pub fn is_settled(&self, now: Duration) -> bool {
        [
            self.total_reviews,
            self.fake_percent,
            self.trust_percent,
            self.avg_confidence,
        ]
        .iter()
        .all(|counter| counter.is_settled(now))
    }
}
