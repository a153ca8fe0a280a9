//! Wire models for the analysis service.
//!
//! The service answers `POST /api/analyze` with a summary, chart counts and
//! the per-review verdicts as three parallel arrays. These types mirror that
//! shape exactly; view-specific derivations live in the dashboard.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AnalysisError;

/// Verdict assigned to a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    /// Review flagged as computer-generated.
    Fake,
    /// Review judged to be written by a person.
    Genuine,
}

impl Prediction {
    /// Wire label, as it appears in responses and CSV rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fake => "Fake",
            Self::Genuine => "Genuine",
        }
    }

    /// Returns `true` for [`Prediction::Fake`].
    #[must_use]
    pub const fn is_fake(self) -> bool {
        matches!(self, Self::Fake)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate figures for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Number of reviews the service classified.
    pub total_reviews: u64,
    /// Share of reviews flagged fake, 0-100.
    pub fake_percent: f64,
    /// Share of reviews judged genuine, 0-100.
    pub genuine_percent: f64,
    /// Mean classifier confidence, 0-100.
    pub avg_confidence: f64,
}

/// Verdict counts used by the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartData {
    /// Reviews judged genuine.
    pub genuine: u64,
    /// Reviews flagged fake.
    pub fake: u64,
}

/// Per-review verdicts as parallel arrays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewResults {
    /// Review texts.
    pub review: Vec<String>,
    /// Verdict for the review at the same index.
    pub prediction: Vec<Prediction>,
    /// Confidence (0-100) for the review at the same index.
    pub confidence: Vec<f64>,
}

impl ReviewResults {
    /// Number of reviews, valid once [`Self::ensure_parallel`] has passed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.review.len()
    }

    /// Returns `true` when the scan produced no reviews.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.review.is_empty()
    }

    /// Checks that the three arrays have equal length.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MalformedResponse`] naming the mismatched
    /// lengths.
    pub fn ensure_parallel(&self) -> Result<(), AnalysisError> {
        let reviews = self.review.len();
        let predictions = self.prediction.len();
        let confidences = self.confidence.len();
        if reviews == predictions && reviews == confidences {
            return Ok(());
        }
        Err(AnalysisError::MalformedResponse {
            message: format!(
                "result arrays differ in length (review={reviews}, prediction={predictions}, \
                 confidence={confidences})"
            ),
        })
    }

    /// Iterates the arrays in lockstep.
    pub fn records(&self) -> impl Iterator<Item = ReviewRecord<'_>> {
        self.review
            .iter()
            .zip(&self.prediction)
            .zip(&self.confidence)
            .enumerate()
            .map(|(index, ((text, prediction), confidence))| ReviewRecord {
                index,
                text: text.as_str(),
                prediction: *prediction,
                confidence: *confidence,
            })
    }
}

/// One review with its verdict, borrowed from [`ReviewResults`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewRecord<'a> {
    /// Position in the result arrays.
    pub index: usize,
    /// Review text as returned by the service.
    pub text: &'a str,
    /// Verdict for the review.
    pub prediction: Prediction,
    /// Classifier confidence, 0-100.
    pub confidence: f64,
}

/// Complete response of a successful analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Identifier echoed by the service, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    /// Aggregate figures.
    pub summary: ScanSummary,
    /// Verdict counts for the distribution chart.
    pub chart_data: ChartData,
    /// Per-review verdicts.
    pub results: ReviewResults,
}

impl AnalysisResult {
    /// Identifier to display and export under: the echoed `asin`, or the
    /// identifier that was submitted.
    #[must_use]
    pub fn identifier_or<'a>(&'a self, submitted: &'a str) -> &'a str {
        self.asin
            .as_deref()
            .map(str::trim)
            .filter(|asin| !asin.is_empty())
            .unwrap_or(submitted)
    }
}
