//! Review feed panel.
//!
//! Each card shows a verdict badge, the confidence and either the preview or,
//! when expanded, the full word-wrapped text. Flag reasons are listed under
//! fake verdicts only.

use std::collections::BTreeSet;

use crate::analysis::Prediction;
use crate::dashboard::{FeedCard, FeedView, PanelState, Tone};

use super::render_unavailable;
use super::text_fit::{fit_width, wrap_words};

const CARD_INDENT: &str = "    ";

/// Parameters for rendering the feed.
#[derive(Debug, Clone, Copy)]
pub struct FeedViewContext<'a> {
    /// Feed panel state.
    pub feed: &'a PanelState<FeedView>,
    /// Index of the selected card.
    pub selected: usize,
    /// Indices of expanded cards.
    pub expanded: &'a BTreeSet<usize>,
    /// Whether the feed has keyboard focus.
    pub focused: bool,
    /// Available columns.
    pub max_width: usize,
    /// Available rows; zero means unlimited.
    pub max_height: usize,
}

/// Renders the feed panel.
#[must_use]
pub fn render_feed(ctx: &FeedViewContext<'_>) -> String {
    let feed = match ctx.feed {
        PanelState::Ready(feed) => feed,
        PanelState::Unavailable { reason } => {
            return render_unavailable("Review feed", reason, ctx.max_width);
        }
    };

    let mut lines = match feed {
        FeedView::Empty { message } => vec![(*message).to_owned()],
        FeedView::Cards { cards, hidden } => {
            let mut rows = card_lines(cards, ctx);
            if *hidden > 0 {
                rows.push(Tone::Slate.paint(&format!("... {hidden} more reviews not shown")));
            }
            rows
        }
    };
    clip_to_selection(&mut lines, ctx);

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn card_lines(cards: &[FeedCard], ctx: &FeedViewContext<'_>) -> Vec<String> {
    cards
        .iter()
        .flat_map(|card| {
            let selected = ctx.focused && card.index == ctx.selected;
            render_card(card, selected, ctx.expanded.contains(&card.index), ctx.max_width)
        })
        .collect()
}

fn render_card(card: &FeedCard, selected: bool, expanded: bool, width: usize) -> Vec<String> {
    let marker = if selected { ">" } else { " " };
    let badge_tone = match card.prediction {
        Prediction::Fake => Tone::Red,
        Prediction::Genuine => Tone::Emerald,
    };
    let toggle = match (card.truncated, expanded) {
        (false, _) => "",
        (true, false) => "  [+] Read more",
        (true, true) => "  [-] Show less",
    };
    let mut lines = vec![format!(
        "{marker} #{} {} {} confidence{toggle}",
        card.index + 1,
        badge_tone.paint(&format!("[{}]", card.prediction)),
        card.confidence_label,
    )];

    let text_width = width.saturating_sub(CARD_INDENT.len());
    if expanded {
        lines.extend(
            wrap_words(card.text(true), text_width)
                .into_iter()
                .map(|line| format!("{CARD_INDENT}{line}")),
        );
    } else {
        lines.push(format!("{CARD_INDENT}{}", fit_width(card.text(false), text_width)));
    }

    if !card.flags.is_empty() {
        let flags = card
            .flags
            .iter()
            .map(|flag| format!("! {flag}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(format!("{CARD_INDENT}{}", Tone::Amber.paint(&flags)));
    }
    lines
}

/// Keeps the selected card's header in view when the feed is taller than
/// the space available.
fn clip_to_selection(lines: &mut Vec<String>, ctx: &FeedViewContext<'_>) {
    if ctx.max_height == 0 || lines.len() <= ctx.max_height {
        return;
    }
    let header = format!("> #{} ", ctx.selected + 1);
    let anchor = lines
        .iter()
        .position(|line| line.starts_with(&header))
        .unwrap_or(0);
    let start = anchor.min(lines.len().saturating_sub(ctx.max_height));
    lines.drain(..start);
    lines.truncate(ctx.max_height);
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::analysis::ReviewResults;

    #[fixture]
    fn results() -> ReviewResults {
        ReviewResults {
            review: vec!["Great!".to_owned(), "x".repeat(250)],
            prediction: vec![Prediction::Genuine, Prediction::Fake],
            confidence: vec![91.2, 80.0],
        }
    }

    fn render(feed: &PanelState<FeedView>, selected: usize, expanded: &BTreeSet<usize>) -> String {
        render_feed(&FeedViewContext {
            feed,
            selected,
            expanded,
            focused: true,
            max_width: 80,
            max_height: 0,
        })
    }

    #[rstest]
    fn cards_show_badge_and_confidence(results: ReviewResults) {
        let feed = PanelState::Ready(FeedView::build(&results, 50));

        let output = render(&feed, 0, &BTreeSet::new());

        assert!(output.contains("> #1"));
        assert!(output.contains("[Genuine]"));
        assert!(output.contains("91.2% confidence"));
        assert!(output.contains("Great!"));
    }

    #[rstest]
    fn long_reviews_offer_expansion(results: ReviewResults) {
        let feed = PanelState::Ready(FeedView::build(&results, 50));

        let collapsed = render(&feed, 1, &BTreeSet::new());
        let expanded = render(&feed, 1, &BTreeSet::from([1]));

        assert!(collapsed.contains("[+] Read more"));
        assert!(expanded.contains("[-] Show less"));
        assert!(expanded.lines().count() > collapsed.lines().count());
    }

    #[rstest]
    fn only_fake_cards_list_flags(results: ReviewResults) {
        let feed = PanelState::Ready(FeedView::build(&results, 50));

        let output = render(&feed, 0, &BTreeSet::new());

        assert_eq!(output.matches("! ").count(), 2);
    }

    #[rstest]
    fn capped_feed_reports_hidden_reviews(results: ReviewResults) {
        let feed = PanelState::Ready(FeedView::build(&results, 1));

        let output = render(&feed, 0, &BTreeSet::new());

        assert!(output.contains("1 more reviews not shown"));
    }

    #[rstest]
    fn empty_feed_shows_message() {
        let feed = PanelState::Ready(FeedView::build(&ReviewResults::default(), 50));

        assert_eq!(render(&feed, 0, &BTreeSet::new()), "No reviews parsed.\n");
    }

    #[rstest]
    fn selection_stays_visible_in_short_panels(results: ReviewResults) {
        let feed = PanelState::Ready(FeedView::build(&results, 50));

        let output = render_feed(&FeedViewContext {
            feed: &feed,
            selected: 1,
            expanded: &BTreeSet::new(),
            focused: true,
            max_width: 80,
            max_height: 2,
        });

        assert!(output.starts_with("> #2"));
        assert_eq!(output.lines().count(), 2);
    }
}
