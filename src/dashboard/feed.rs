//! Review feed cards.
//!
//! Review text comes from arbitrary web pages, so it is sanitised before it
//! reaches the terminal: control characters and bidi overrides are replaced,
//! which keeps a review from emitting escape sequences of its own.

use crate::analysis::{Prediction, ReviewRecord, ReviewResults};

/// Default cap on the number of cards.
pub const DEFAULT_FEED_LIMIT: usize = 50;
/// Characters kept in a collapsed card preview.
pub const PREVIEW_CHARS: usize = 200;
/// Marker appended to a truncated preview.
pub const ELLIPSIS: &str = "...";
/// Text of the empty feed.
pub const EMPTY_FEED_MESSAGE: &str = "No reviews parsed.";

const FLAG_REASONS: [&str; 5] = [
    "High semantic similarity",
    "Over-praising adjectives",
    "Repetitive sentence structure",
    "Bot-like timestamps",
    "Generic phrasing",
];
const FLAGS_PER_CARD: usize = 2;
const REPLACEMENT: char = '\u{FFFD}';

/// One review as shown in the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedCard {
    /// Position of the review in the result arrays.
    pub index: usize,
    /// Verdict for the review.
    pub prediction: Prediction,
    /// Classifier confidence, 0-100.
    pub confidence: f64,
    /// Confidence with one decimal and a percent sign.
    pub confidence_label: String,
    /// Single-line preview, truncated with [`ELLIPSIS`] when long.
    pub preview: String,
    /// Full sanitised text, newlines kept.
    pub full_text: String,
    /// Whether the preview omits part of the text.
    pub truncated: bool,
    /// Heuristic tags; only fake cards carry any.
    pub flags: Vec<&'static str>,
}

impl FeedCard {
    /// Builds the card for one review.
    #[must_use]
    pub fn from_record(record: &ReviewRecord<'_>) -> Self {
        let full_text = sanitise_text(record.text);
        let (preview, truncated) = preview(&full_text);
        let flags = if record.prediction.is_fake() {
            flags_for(record.index)
        } else {
            Vec::new()
        };
        Self {
            index: record.index,
            prediction: record.prediction,
            confidence: record.confidence,
            confidence_label: format!("{:.1}%", record.confidence),
            preview,
            full_text,
            truncated,
            flags,
        }
    }

    /// Text shown for the card, depending on whether it is expanded.
    #[must_use]
    pub fn text(&self, expanded: bool) -> &str {
        if expanded {
            &self.full_text
        } else {
            &self.preview
        }
    }
}

/// Feed panel content.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedView {
    /// The scan returned no reviews.
    Empty {
        /// Message shown in place of cards.
        message: &'static str,
    },
    /// At least one card.
    Cards {
        /// Cards in result order.
        cards: Vec<FeedCard>,
        /// Reviews left out because of the cap.
        hidden: usize,
    },
}

impl FeedView {
    /// Builds the feed, keeping at most `limit` cards.
    #[must_use]
    pub fn build(results: &ReviewResults, limit: usize) -> Self {
        if results.is_empty() {
            return Self::Empty {
                message: EMPTY_FEED_MESSAGE,
            };
        }
        let cards: Vec<FeedCard> = results
            .records()
            .take(limit)
            .map(|record| FeedCard::from_record(&record))
            .collect();
        let hidden = results.len().saturating_sub(cards.len());
        Self::Cards { cards, hidden }
    }

    /// Cards in the feed; empty for [`FeedView::Empty`].
    #[must_use]
    pub fn cards(&self) -> &[FeedCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards { cards, .. } => cards,
        }
    }
}

/// Replaces control characters and bidi overrides, keeping newlines.
#[must_use]
pub fn sanitise_text(text: &str) -> String {
    text.chars()
        .map(|character| match character {
            '\n' => '\n',
            '\t' => ' ',
            '\r' => ' ',
            other if other.is_control() || is_bidi_control(other) => REPLACEMENT,
            other => other,
        })
        .collect()
}

const fn is_bidi_control(character: char) -> bool {
    matches!(character, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}

fn preview(text: &str) -> (String, bool) {
    let single_line = text.replace('\n', " ");
    let mut chars = single_line.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        (format!("{head}{ELLIPSIS}"), true)
    } else {
        (head, false)
    }
}

fn flags_for(index: usize) -> Vec<&'static str> {
    FLAG_REASONS
        .iter()
        .copied()
        .cycle()
        .skip(index)
        .take(FLAGS_PER_CARD)
        .collect()
}
