//! Builders and fakes shared by unit and integration tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::analysis::{
    AnalysisError, AnalysisGateway, AnalysisResult, AnalyzeRequest, ChartData, Prediction,
    ReviewResults, ScanSummary,
};
use crate::dashboard::count_as_value;

/// The reference scan: 100 reviews, 30% fake, one sample review.
#[must_use]
pub fn scenario_result() -> AnalysisResult {
    AnalysisResult {
        asin: None,
        summary: ScanSummary {
            total_reviews: 100,
            fake_percent: 30.0,
            genuine_percent: 70.0,
            avg_confidence: 88.5,
        },
        chart_data: ChartData {
            genuine: 70,
            fake: 30,
        },
        results: ReviewResults {
            review: vec!["Great!".to_owned()],
            prediction: vec![Prediction::Genuine],
            confidence: vec![91.2],
        },
    }
}

/// [`scenario_result`] as the service would send it.
#[must_use]
pub fn scenario_json() -> Value {
    json!({
        "summary": {
            "total_reviews": 100,
            "fake_percent": 30,
            "genuine_percent": 70,
            "avg_confidence": 88.5
        },
        "chart_data": { "genuine": 70, "fake": 30 },
        "results": {
            "review": ["Great!"],
            "prediction": ["Genuine"],
            "confidence": [91.2]
        }
    })
}

/// Builds a consistent result from `(text, prediction, confidence)` rows.
#[must_use]
pub fn sample_result(reviews: &[(&str, Prediction, f64)]) -> AnalysisResult {
    let count = |len: usize| u64::try_from(len).unwrap_or(u64::MAX);
    let total = count(reviews.len());
    let fake = count(
        reviews
            .iter()
            .filter(|(_, prediction, _)| prediction.is_fake())
            .count(),
    );
    let genuine = total - fake;
    let percent = |part: u64| {
        if total == 0 {
            0.0
        } else {
            count_as_value(part) * 100.0 / count_as_value(total)
        }
    };
    let avg_confidence = if reviews.is_empty() {
        0.0
    } else {
        reviews.iter().map(|(_, _, confidence)| confidence).sum::<f64>() / count_as_value(total)
    };

    AnalysisResult {
        asin: None,
        summary: ScanSummary {
            total_reviews: total,
            fake_percent: percent(fake),
            genuine_percent: percent(genuine),
            avg_confidence,
        },
        chart_data: ChartData { genuine, fake },
        results: ReviewResults {
            review: reviews.iter().map(|(text, _, _)| (*text).to_owned()).collect(),
            prediction: reviews.iter().map(|(_, prediction, _)| *prediction).collect(),
            confidence: reviews.iter().map(|(_, _, confidence)| *confidence).collect(),
        },
    }
}

/// Gateway that answers every request with the same outcome and records
/// what it was asked.
#[derive(Debug)]
pub struct StaticAnalysisGateway {
    outcome: Result<AnalysisResult, AnalysisError>,
    requests: Mutex<Vec<AnalyzeRequest>>,
}

impl StaticAnalysisGateway {
    /// Answers with `result`.
    #[must_use]
    pub const fn succeeding(result: AnalysisResult) -> Self {
        Self {
            outcome: Ok(result),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers with `error`.
    #[must_use]
    pub const fn failing(error: AnalysisError) -> Self {
        Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<AnalyzeRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AnalysisGateway for StaticAnalysisGateway {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, AnalysisError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.outcome.clone()
    }
}
