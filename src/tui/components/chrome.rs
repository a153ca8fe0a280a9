//! Header, input line, metadata strip and status bar.

use crate::dashboard::{BusyView, MetaStrip, Tone};

use super::text_fit::fit_width;

/// Title shown in the header bar.
pub const TITLE: &str = "TrustLens - Review Authenticity";
const INPUT_LABEL: &str = "ASIN or URL: ";

/// What the status bar should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Key hints for the focused area.
    Hints(&'static str),
    /// Outcome of a successful action.
    Success(String),
    /// Error of the last failed action.
    Error(String),
}

/// Renders the header bar.
#[must_use]
pub fn render_header(busy: bool, width: usize) -> String {
    let indicator = if busy { " [Scanning...]" } else { "" };
    let title = fit_width(&format!("{TITLE}{indicator}"), width);
    format!("{}\n", Tone::Cyan.paint(&title))
}

/// Input line state for rendering.
#[derive(Debug, Clone, Copy)]
pub struct InputLineContext<'a> {
    /// Current identifier text.
    pub input: &'a str,
    /// Trigger appearance.
    pub busy: BusyView,
    /// Whether the input line has keyboard focus.
    pub focused: bool,
    /// Available columns.
    pub max_width: usize,
}

/// Renders the identifier input and the trigger.
#[must_use]
pub fn render_input_line(ctx: &InputLineContext<'_>) -> String {
    let trigger = format!("[{} {}]", ctx.busy.trigger_icon, ctx.busy.trigger_label);
    let trigger_styled = if ctx.busy.trigger_enabled {
        Tone::Emerald.paint(&trigger)
    } else {
        Tone::Slate.paint(&trigger)
    };
    let cursor = if ctx.focused { "_" } else { "" };
    let prompt = if ctx.focused { "> " } else { "  " };
    let input_width = ctx
        .max_width
        .saturating_sub(prompt.len() + INPUT_LABEL.len())
        .saturating_sub(trigger.chars().count())
        .saturating_sub(2);
    let field = fit_width(&format!("{}{cursor}", ctx.input), input_width);
    format!("{prompt}{INPUT_LABEL}{field}  {trigger_styled}\n")
}

/// Renders the identifier, marketplace and analysis time of the shown scan.
#[must_use]
pub fn render_meta_strip(meta: &MetaStrip, width: usize) -> String {
    let line = format!(
        "Product: {}  Marketplace: {}  Analysed: {}",
        meta.identifier,
        meta.marketplace,
        meta.timestamp_label()
    );
    format!("{}\n", fit_width(&line, width))
}

/// Renders the placeholder shown while a scan is in flight.
#[must_use]
pub fn render_skeleton(width: usize, rows: usize) -> String {
    let shimmer = "░".repeat(width.min(48));
    let mut output = String::new();
    for _ in 0..rows {
        output.push_str(&Tone::Slate.paint(&shimmer));
        output.push('\n');
    }
    output
}

/// Renders the status bar.
#[must_use]
pub fn render_status_bar(status: &StatusLine, width: usize) -> String {
    let line = match status {
        StatusLine::Hints(hints) => fit_width(hints, width),
        StatusLine::Success(message) => Tone::Emerald.paint(&fit_width(message, width)),
        StatusLine::Error(message) => {
            Tone::Red.paint(&fit_width(&format!("Error: {message}"), width))
        }
    };
    format!("{line}\n")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn input_line_shows_idle_trigger() {
        let line = render_input_line(&InputLineContext {
            input: "B000123456",
            busy: BusyView::IDLE,
            focused: true,
            max_width: 80,
        });

        assert!(line.contains("B000123456_"));
        assert!(line.contains("Run Analysis"));
    }

    #[rstest]
    fn input_line_shows_busy_trigger() {
        let line = render_input_line(&InputLineContext {
            input: "B000123456",
            busy: BusyView::BUSY,
            focused: false,
            max_width: 80,
        });

        assert!(line.contains("Analyzing Data..."));
        assert!(!line.contains("B000123456_"));
    }

    #[rstest]
    fn meta_strip_lists_identifier_marketplace_and_time() {
        let meta = MetaStrip {
            identifier: "B000123456".to_owned(),
            asin: Some("B000123456".to_owned()),
            marketplace: "amazon.com".to_owned(),
            analysed_at: Utc
                .with_ymd_and_hms(2024, 5, 1, 14, 3, 9)
                .single()
                .expect("valid time"),
        };

        assert_eq!(
            render_meta_strip(&meta, 120),
            "Product: B000123456  Marketplace: amazon.com  Analysed: 14:03:09 UTC\n"
        );
    }

    #[rstest]
    fn error_status_is_prefixed() {
        let line = render_status_bar(&StatusLine::Error("Server error occurred".to_owned()), 80);

        assert!(line.contains("Error: Server error occurred"));
    }
}
