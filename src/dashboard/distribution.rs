//! Genuine versus fake distribution bars.

use std::time::Duration;

use crate::analysis::ChartData;

use super::chart::{ChartKind, ChartSeries, ChartSpec};
use super::count_as_value;
use super::palette::Tone;

/// Label of the genuine bar.
pub const GENUINE_LABEL: &str = "Genuine Accounts";
/// Label of the fake bar.
pub const FAKE_LABEL: &str = "AI/Bot Generators";

/// Distribution panel content.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionView {
    /// Genuine review count.
    pub genuine: u64,
    /// Fake review count.
    pub fake: u64,
    /// Bar chart drawn from the counts.
    pub chart: ChartSpec,
    /// Id of the live chart instance drawn from `chart`.
    pub chart_id: u64,
}

/// Bar spec for the verdict counts.
#[must_use]
pub fn distribution_chart_spec(counts: ChartData, duration: Duration) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        series: vec![
            ChartSeries::new(GENUINE_LABEL, count_as_value(counts.genuine), Tone::Emerald),
            ChartSeries::new(FAKE_LABEL, count_as_value(counts.fake), Tone::Red),
        ],
        animation: duration,
    }
}
