//! Width-aware helpers for fitting text into terminal cells.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so
//! wide characters in review text do not break panel alignment.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

enum WidthDecision {
    Empty,
    Unchanged,
    DotFallback,
    Ellipsis,
}

fn width_decision(text: &str, max_width: usize) -> WidthDecision {
    if max_width == 0 {
        WidthDecision::Empty
    } else if text.width() <= max_width {
        WidthDecision::Unchanged
    } else if max_width <= ELLIPSIS.len() {
        WidthDecision::DotFallback
    } else {
        WidthDecision::Ellipsis
    }
}

/// Truncates text to the provided display width and appends an ellipsis.
pub(crate) fn fit_width(text: &str, max_width: usize) -> String {
    match width_decision(text, max_width) {
        WidthDecision::Empty => String::new(),
        WidthDecision::Unchanged => text.to_owned(),
        WidthDecision::DotFallback => ".".repeat(max_width),
        WidthDecision::Ellipsis => {
            let mut truncated = take_columns(text, max_width.saturating_sub(ELLIPSIS.len()));
            truncated.push_str(ELLIPSIS);
            truncated
        }
    }
}

/// Longest prefix of `text` that fits into `columns`.
fn take_columns(text: &str, columns: usize) -> String {
    let mut taken = String::new();
    let mut used = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > columns {
            break;
        }
        taken.push(ch);
        used = used.saturating_add(char_width);
    }
    taken
}

/// Word-wraps `text` to `max_width` columns.
///
/// Existing line breaks are kept. Words wider than a line are hard-wrapped.
pub(crate) fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(str::to_owned).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            push_word(&mut lines, &mut current, word, max_width);
        }
        lines.push(current);
    }
    lines
}

fn push_word(lines: &mut Vec<String>, current: &mut String, word: &str, max_width: usize) {
    let needed = if current.is_empty() {
        word.width()
    } else {
        current.width().saturating_add(1).saturating_add(word.width())
    };
    if needed <= max_width {
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        return;
    }

    if !current.is_empty() {
        lines.push(std::mem::take(current));
    }
    let mut rest = word;
    while rest.width() > max_width {
        let head = take_columns(rest, max_width);
        if head.is_empty() {
            break;
        }
        rest = rest.get(head.len()..).unwrap_or_default();
        lines.push(head);
    }
    current.push_str(rest);
}

/// Draws a bar of `filled` solid cells followed by light cells up to `width`.
pub(crate) fn bar(filled: usize, width: usize) -> String {
    let solid = filled.min(width);
    format!("{}{}", "█".repeat(solid), "░".repeat(width.saturating_sub(solid)))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("hello", 10, "hello")]
    #[case("abcdef", 0, "")]
    #[case("abcdef", 2, "..")]
    #[case("abcdef", 3, "...")]
    #[case("abcdefgh", 6, "abc...")]
    #[case("你好世界", 5, "你...")]
    fn fit_width_respects_columns(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit_width(text, width), expected);
    }

    #[rstest]
    fn wrap_words_breaks_at_spaces() {
        assert_eq!(
            wrap_words("the quick brown fox", 10),
            vec!["the quick".to_owned(), "brown fox".to_owned()]
        );
    }

    #[rstest]
    fn wrap_words_keeps_line_breaks() {
        assert_eq!(
            wrap_words("one\ntwo", 20),
            vec!["one".to_owned(), "two".to_owned()]
        );
    }

    #[rstest]
    fn wrap_words_hard_wraps_long_words() {
        assert_eq!(
            wrap_words("abcdefghij", 4),
            vec!["abcd".to_owned(), "efgh".to_owned(), "ij".to_owned()]
        );
    }

    #[rstest]
    #[case(0, 4, "░░░░")]
    #[case(3, 4, "███░")]
    #[case(9, 4, "████")]
    fn bar_fills_from_the_left(#[case] filled: usize, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(bar(filled, width), expected);
    }
}
