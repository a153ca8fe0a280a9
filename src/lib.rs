//! TrustLens library crate for review-authenticity scans.
//!
//! The library submits product identifiers to an external analysis service,
//! projects the JSON verdict into terminal dashboard panels (metrics, risk
//! gauge, distribution chart and review feed), and exports the last scan as
//! CSV. The classifier itself lives behind the service; nothing here judges
//! reviews.

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod telemetry;
pub mod tui;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use analysis::{
    AnalysisError, AnalysisGateway, AnalysisResult, AnalyzeRequest, ChartData, HttpAnalysisGateway,
    HttpAnalysisGatewayConfig, Prediction, ProductIdentifier, ReviewRecord, ReviewResults,
    ScanSummary,
};
pub use config::{OperationMode, TrustlensConfig};
pub use dashboard::{
    CachedScan, Dashboard, DashboardSettings, Projection, RequestOrchestrator, ResultProjector,
    RiskThresholds, RiskTier, ScanCache,
};
pub use export::{CsvExport, export_file_name, write_csv};
