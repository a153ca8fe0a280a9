//! Metrics panel: the four headline counters and the two percentage bars.

use std::time::Duration;

use crate::dashboard::{MetricsView, PanelState, ProgressBar, Tone};

use super::text_fit::{bar, fit_width};
use super::render_unavailable;

const BAR_WIDTH: usize = 30;

/// Renders the metrics panel at frame time `now`.
#[must_use]
pub fn render_metrics(panel: &PanelState<MetricsView>, now: Duration, width: usize) -> String {
    let metrics = match panel {
        PanelState::Ready(metrics) => metrics,
        PanelState::Unavailable { reason } => return render_unavailable("Metrics", reason, width),
    };

    let mut output = String::new();
    let counters = format!(
        "Total Reviews: {}  Fake: {}%  Trust: {}%  Avg Confidence: {}%",
        metrics.total_reviews.display_at(now),
        metrics.fake_percent.display_at(now),
        metrics.trust_percent.display_at(now),
        metrics.avg_confidence.display_at(now),
    );
    output.push_str(&fit_width(&counters, width));
    output.push('\n');
    output.push_str(&render_bar("Fake ", metrics.fake_bar, Tone::Red, width));
    output.push_str(&render_bar("Trust", metrics.trust_bar, Tone::Emerald, width));
    output
}

fn render_bar(label: &str, progress: ProgressBar, tone: Tone, width: usize) -> String {
    let bar_width = BAR_WIDTH.min(width.saturating_sub(label.len() + 10));
    let cells = bar(progress.filled_cells(bar_width), bar_width);
    format!("{label} {} {:>5.1}%\n", tone.paint(&cells), progress.percent())
}
