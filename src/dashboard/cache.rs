//! Single-slot cache of the last successful scan.

use crate::analysis::{AnalysisError, ReviewRecord, ReviewResults};

/// Owned copy of the per-review verdicts of one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedScan {
    identifier: String,
    results: ReviewResults,
}

impl CachedScan {
    /// Captures `results` under the identifier the user submitted.
    #[must_use]
    pub fn new(identifier: impl Into<String>, results: ReviewResults) -> Self {
        Self {
            identifier: identifier.into(),
            results,
        }
    }

    /// Identifier the scan was submitted with.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Number of cached reviews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` when the scan had no reviews.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Reviews in result order.
    pub fn rows(&self) -> impl Iterator<Item = ReviewRecord<'_>> {
        self.results.records()
    }
}

/// Holds at most one [`CachedScan`]; every store replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct ScanCache {
    slot: Option<CachedScan>,
}

impl ScanCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Stores `scan`, returning the one it replaced.
    pub fn store(&mut self, scan: CachedScan) -> Option<CachedScan> {
        self.slot.replace(scan)
    }

    /// Latest scan, if any succeeded.
    #[must_use]
    pub const fn latest(&self) -> Option<&CachedScan> {
        self.slot.as_ref()
    }

    /// Latest scan or the error shown when nothing can be exported.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingScan`] before the first success.
    pub fn require(&self) -> Result<&CachedScan, AnalysisError> {
        self.slot.as_ref().ok_or(AnalysisError::MissingScan)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::analysis::Prediction;

    fn scan(identifier: &str, reviews: usize) -> CachedScan {
        CachedScan::new(
            identifier,
            ReviewResults {
                review: vec!["text".to_owned(); reviews],
                prediction: vec![Prediction::Genuine; reviews],
                confidence: vec![75.0; reviews],
            },
        )
    }

    #[rstest]
    fn empty_cache_reports_missing_scan() {
        let cache = ScanCache::new();

        assert_eq!(cache.require(), Err(AnalysisError::MissingScan));
    }

    #[rstest]
    fn later_store_wins() {
        let mut cache = ScanCache::new();

        assert!(cache.store(scan("B000000001", 3)).is_none());
        let replaced = cache.store(scan("B000000002", 0));

        assert_eq!(replaced.map(|prior| prior.len()), Some(3));
        let latest = cache.require().expect("cached");
        assert_eq!(latest.identifier(), "B000000002");
        assert!(latest.is_empty());
    }
}
