//! Client side of the review-analysis service.
//!
//! This module validates what the user typed, posts it to the external
//! analysis endpoint, and decodes the verdict. Failures are mapped into
//! [`AnalysisError`] variants that the dashboard can show verbatim.

pub mod error;
pub mod gateway;
pub mod identifier;
pub mod model;

pub use error::{AnalysisError, GENERIC_SERVER_ERROR};
pub use gateway::{
    AnalysisGateway, AnalyzeRequest, HttpAnalysisGateway, HttpAnalysisGatewayConfig,
};
pub use identifier::{DEFAULT_MARKETPLACE, ProductIdentifier};
pub use model::{AnalysisResult, ChartData, Prediction, ReviewRecord, ReviewResults, ScanSummary};

#[cfg(test)]
pub use gateway::MockAnalysisGateway;
