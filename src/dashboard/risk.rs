//! Risk tiers derived from the share of fake reviews.

use std::fmt;

use crate::analysis::AnalysisError;

use super::palette::Tone;

/// Highest fake percentage still rated low risk by default.
pub const DEFAULT_LOW_RISK_MAX: f64 = 20.0;
/// Highest fake percentage still rated moderate risk by default.
pub const DEFAULT_MODERATE_RISK_MAX: f64 = 50.0;

/// Three-level risk rating shown by the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    /// Few or no fake reviews.
    Low,
    /// A noticeable share of fake reviews.
    Moderate,
    /// Fake reviews dominate.
    Critical,
}

impl RiskTier {
    /// Gauge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::Critical => "Critical Risk",
        }
    }

    /// Colour of the gauge arc and badge.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Emerald,
            Self::Moderate => Tone::Amber,
            Self::Critical => Tone::Red,
        }
    }

    /// Verdict badge text.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Low => "Safe to Buy",
            Self::Moderate | Self::Critical => "Action Required",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bounds (inclusive) of the low and moderate tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    low_max: f64,
    moderate_max: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_max: DEFAULT_LOW_RISK_MAX,
            moderate_max: DEFAULT_MODERATE_RISK_MAX,
        }
    }
}

impl RiskThresholds {
    /// Builds thresholds, checking `0 <= low_max <= moderate_max <= 100`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when the bounds are not
    /// finite, out of range, or out of order.
    pub fn new(low_max: f64, moderate_max: f64) -> Result<Self, AnalysisError> {
        let in_range = |value: f64| value.is_finite() && (0.0..=100.0).contains(&value);
        if !in_range(low_max) || !in_range(moderate_max) {
            return Err(AnalysisError::Configuration {
                message: format!(
                    "risk thresholds must lie within 0-100 (low={low_max}, moderate={moderate_max})"
                ),
            });
        }
        if low_max >= moderate_max {
            return Err(AnalysisError::Configuration {
                message: format!(
                    "low risk threshold {low_max} must be below moderate risk threshold {moderate_max}"
                ),
            });
        }
        Ok(Self {
            low_max,
            moderate_max,
        })
    }

    /// Inclusive upper bound of the low tier.
    #[must_use]
    pub const fn low_max(&self) -> f64 {
        self.low_max
    }

    /// Inclusive upper bound of the moderate tier.
    #[must_use]
    pub const fn moderate_max(&self) -> f64 {
        self.moderate_max
    }

    /// Picks exactly one tier for a fake percentage.
    #[must_use]
    pub const fn classify(&self, fake_percent: f64) -> RiskTier {
        if fake_percent <= self.low_max {
            RiskTier::Low
        } else if fake_percent <= self.moderate_max {
            RiskTier::Moderate
        } else {
            RiskTier::Critical
        }
    }
}
