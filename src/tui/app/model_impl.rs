//! `Model` trait implementation for the dashboard TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `DashboardApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::DashboardApp;
use crate::dashboard::palette::ANSI_RESET;
use crate::tui::input::map_key_to_message_with_context;
use crate::tui::messages::AppMsg;

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new(crate::tui::dashboard_context());

        // Emit an immediate startup message to trigger the first render
        // cycle and any pre-filled scan.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let mapped = map_key_to_message_with_context(key_msg, self.focus);
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        self.normalise_viewport(&self.render_screen())
    }
}

impl DashboardApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale trailing cells after
    /// a resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = self.terminal_width();
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Pads or truncates `line` to exactly `width` visible columns, skipping
/// over ANSI escape sequences.
fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible = 0_usize;
    let mut escape = EscapeState::default();

    for ch in line.chars() {
        if escape.in_escape {
            output.push(ch);
            escape.consume(ch);
            continue;
        }
        if ch == '\x1b' {
            escape.begin();
            output.push(ch);
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible = visible.saturating_add(char_width);
    }

    if escape.had_ansi && !escape.ended_with_reset {
        output.push_str(ANSI_RESET);
    }
    output.push_str(&" ".repeat(width.saturating_sub(visible)));
    output
}

/// Tracks escape sequences seen while fitting a line.
///
/// Only an SGR sequence with no parameters or a lone `0` counts as a reset.
#[derive(Default)]
struct EscapeState {
    in_escape: bool,
    had_ansi: bool,
    ended_with_reset: bool,
    params: String,
}

impl EscapeState {
    fn begin(&mut self) {
        self.in_escape = true;
        self.had_ansi = true;
        self.ended_with_reset = false;
        self.params.clear();
    }

    fn consume(&mut self, ch: char) {
        if !ch.is_ascii_alphabetic() {
            self.params.push(ch);
            return;
        }
        self.in_escape = false;
        self.ended_with_reset = ch == 'm' && matches!(self.params.as_str(), "[" | "[0");
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::fit_line;
    use crate::dashboard::Tone;
    use crate::dashboard::palette::ANSI_RESET;

    #[rstest]
    #[case("abc", 5, "abc  ")]
    #[case("abcdef", 3, "abc")]
    #[case("你好", 3, "你 ")]
    fn plain_lines_are_padded_or_cut(#[case] line: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit_line(line, width), expected);
    }

    #[rstest]
    fn escape_sequences_take_no_columns() {
        assert_eq!(fit_line("\x1b[31mred\x1b[0m", 5), "\x1b[31mred\x1b[0m  ");
    }

    #[rstest]
    fn cut_styled_lines_are_reset() {
        assert_eq!(fit_line("\x1b[31mredder", 3), "\x1b[31mred\x1b[0m");
    }

    #[rstest]
    fn painted_line_cut_before_its_reset_does_not_bleed() {
        let flags = Tone::Amber.paint("! Generic phrasing  ! Bot-like timestamps");

        let fitted = fit_line(&flags, 10);

        assert_eq!(fitted, format!("\x1b[33m! Generic {ANSI_RESET}"));
    }

    #[rstest]
    #[case("\x1b[31mred\x1b[m", "\x1b[31mred\x1b[m  ")]
    #[case("\x1b[31mred\x1b[0m", "\x1b[31mred\x1b[0m  ")]
    #[case("\x1b[31mre\x1b[0md\x1b[1m", "\x1b[31mre\x1b[0md\x1b[1m\x1b[0m  ")]
    fn only_plain_resets_end_the_styling(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(fit_line(line, 5), expected);
    }
}
