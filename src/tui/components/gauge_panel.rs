//! Trust gauge panel.
//!
//! The doughnut chart is drawn as a single arc-like bar: the fake-risk share
//! in the tier colour followed by the authentic share in slate.

use std::time::Duration;

use crate::dashboard::{GaugeView, PanelState};

use super::render_unavailable;

const GAUGE_WIDTH: usize = 40;

/// Renders the gauge panel at frame time `now`.
#[must_use]
pub fn render_gauge(panel: &PanelState<GaugeView>, now: Duration, width: usize) -> String {
    let gauge = match panel {
        PanelState::Ready(gauge) => gauge,
        PanelState::Unavailable { reason } => {
            return render_unavailable("Trust gauge", reason, width);
        }
    };

    let heading = format!(
        "Trust Score: {}%  {}  [{}]",
        gauge.trust_score.display_at(now),
        gauge.tier.tone().paint(gauge.tier.label()),
        gauge.verdict(),
    );
    format!("{heading}\n{}\n", render_arc(gauge, width))
}

fn render_arc(gauge: &GaugeView, width: usize) -> String {
    let arc_width = GAUGE_WIDTH.min(width);
    let total = gauge.chart.total();
    let mut arc = String::new();
    let mut drawn = 0_usize;
    for (position, series) in gauge.chart.series.iter().enumerate() {
        let cells = if position + 1 == gauge.chart.series.len() {
            arc_width.saturating_sub(drawn)
        } else {
            share_cells(series.value, total, arc_width)
        };
        drawn = drawn.saturating_add(cells);
        arc.push_str(&series.tone.paint(&"●".repeat(cells)));
    }
    arc
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "shares are clamped to 0..=1 and widths are terminal-sized"
)]
fn share_cells(value: f64, total: f64, width: usize) -> usize {
    if total <= 0.0 {
        return 0;
    }
    let share = (value / total).clamp(0.0, 1.0);
    ((share * width as f64).round() as usize).min(width)
}
