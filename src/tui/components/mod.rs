//! Render functions for the dashboard panels.
//!
//! Each panel is a pure function from its view-model to terminal text, so a
//! panel that could not be built renders its own placeholder and leaves the
//! rest of the screen intact.

mod chrome;
mod distribution_panel;
mod feed_panel;
mod gauge_panel;
mod metrics_panel;
mod text_fit;

pub use chrome::{
    InputLineContext, StatusLine, TITLE, render_header, render_input_line, render_meta_strip,
    render_skeleton, render_status_bar,
};
pub use distribution_panel::render_distribution;
pub use feed_panel::{FeedViewContext, render_feed};
pub use gauge_panel::render_gauge;
pub use metrics_panel::render_metrics;

use crate::dashboard::Tone;

/// Placeholder for a panel that could not be built from the result.
fn render_unavailable(panel: &str, reason: &str, width: usize) -> String {
    let line = text_fit::fit_width(&format!("{panel} unavailable: {reason}"), width);
    format!("{}\n", Tone::Amber.paint(&line))
}
