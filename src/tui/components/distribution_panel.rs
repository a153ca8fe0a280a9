//! Distribution panel: horizontal bars for genuine and fake review counts.

use unicode_width::UnicodeWidthStr;

use crate::dashboard::{DistributionView, PanelState};

use super::render_unavailable;
use super::text_fit::bar;

const MAX_BAR_WIDTH: usize = 36;

/// Renders the distribution panel.
#[must_use]
pub fn render_distribution(panel: &PanelState<DistributionView>, width: usize) -> String {
    let distribution = match panel {
        PanelState::Ready(distribution) => distribution,
        PanelState::Unavailable { reason } => {
            return render_unavailable("Distribution", reason, width);
        }
    };

    let label_width = distribution
        .chart
        .series
        .iter()
        .map(|series| series.label.width())
        .max()
        .unwrap_or(0);
    let bar_width = MAX_BAR_WIDTH.min(width.saturating_sub(label_width + 10));
    let max_value = distribution.chart.max_value();

    let mut output = String::new();
    for series in &distribution.chart.series {
        let cells = bar(scaled_cells(series.value, max_value, bar_width), bar_width);
        output.push_str(&format!(
            "{:<label_width$} {} {}\n",
            series.label,
            series.tone.paint(&cells),
            series.value
        ));
    }
    output
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "ratios are clamped to 0..=1 and widths are terminal-sized"
)]
fn scaled_cells(value: f64, max_value: f64, width: usize) -> usize {
    if max_value <= 0.0 {
        return 0;
    }
    ((value / max_value).clamp(0.0, 1.0) * width as f64).round() as usize
}
