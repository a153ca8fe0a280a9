//! Rendering logic for the dashboard TUI application.
//!
//! These are pure query methods that read state without modification. The
//! feed gets whatever rows are left once the fixed panels are laid out.

use super::DashboardApp;
use crate::dashboard::Projection;
use crate::tui::components::{
    FeedViewContext, InputLineContext, render_distribution, render_feed, render_gauge,
    render_header, render_input_line, render_meta_strip, render_metrics, render_skeleton,
    render_status_bar,
};
use crate::tui::input::InputContext;

const WELCOME: &str = "Enter an Amazon ASIN or product URL and press Enter to run an analysis.";
const SKELETON_ROWS: usize = 6;

impl DashboardApp {
    /// Renders the whole screen before viewport normalisation.
    pub(super) fn render_screen(&self) -> String {
        let width = self.terminal_width();
        let mut output = String::new();

        output.push_str(&render_header(self.dashboard.is_busy(), width));
        output.push_str(&render_input_line(&InputLineContext {
            input: &self.input,
            busy: self.dashboard.busy_view(),
            focused: self.focus == InputContext::Editing,
            max_width: width,
        }));
        output.push('\n');

        if self.dashboard.busy_view().skeleton {
            output.push_str(&render_skeleton(width, SKELETON_ROWS));
        } else if let Some(projection) = self.dashboard.projection() {
            output.push_str(&self.render_projection(projection, output.lines().count()));
        } else {
            output.push_str(WELCOME);
            output.push('\n');
        }

        let status_rows = 1;
        let used = output.lines().count().saturating_add(status_rows);
        let padding = usize::from(self.height).saturating_sub(used);
        output.push_str(&"\n".repeat(padding));
        output.push_str(&render_status_bar(&self.status_line(), width));
        output
    }

    fn render_projection(&self, projection: &Projection, rows_above: usize) -> String {
        let width = self.terminal_width();
        let now = self.dashboard.now();
        let mut output = String::new();

        output.push_str(&render_meta_strip(&projection.meta, width));
        output.push('\n');
        output.push_str(&render_metrics(&projection.metrics, now, width));
        output.push('\n');
        output.push_str(&render_gauge(&projection.gauge, now, width));
        output.push('\n');
        output.push_str(&render_distribution(&projection.distribution, width));
        output.push('\n');

        let status_rows = 1;
        let feed_height = usize::from(self.height)
            .saturating_sub(rows_above)
            .saturating_sub(output.lines().count())
            .saturating_sub(status_rows)
            .max(1);
        output.push_str(&render_feed(&FeedViewContext {
            feed: &projection.feed,
            selected: self.selected,
            expanded: &self.expanded,
            focused: self.focus == InputContext::Browsing,
            max_width: width,
            max_height: feed_height,
        }));
        output
    }

    /// Usable columns, keeping the last one free to avoid autowrap.
    pub(super) fn terminal_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }
}
