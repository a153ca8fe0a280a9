//! Error types exposed by the analysis client and dashboard.

use thiserror::Error;

/// Fallback shown when the service fails without explaining why.
pub const GENERIC_SERVER_ERROR: &str = "Server error occurred";

/// Errors surfaced while validating input, calling the analysis service, or
/// exporting a scan.
///
/// Every variant is terminal for the current action only: callers reset the
/// busy state and keep whatever was rendered before.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The identifier was blank after trimming.
    #[error("Please enter an ASIN or URL")]
    EmptyIdentifier,

    /// A second analysis was triggered while one is still running.
    #[error("an analysis is already running")]
    RequestInFlight,

    /// Networking failed while calling the analysis service.
    #[error("could not reach the analysis service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The service answered with a body that could not be understood.
    #[error("unexpected response from the analysis service: {message}")]
    MalformedResponse {
        /// What was wrong with the body.
        message: String,
    },

    /// The service reported a failure, either through its status code or an
    /// explicit `error` field.
    #[error("{message}")]
    Server {
        /// HTTP status code returned with the failure.
        status: u16,
        /// Message supplied by the service, or a generic fallback.
        message: String,
    },

    /// CSV export was requested before any analysis succeeded.
    #[error("No data available to download.")]
    MissingScan,

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl AnalysisError {
    /// Short machine-readable name of the error kind, used in telemetry.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyIdentifier => "empty_identifier",
            Self::RequestInFlight => "request_in_flight",
            Self::Network { .. } => "network",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::Server { .. } => "server",
            Self::MissingScan => "missing_scan",
            Self::Io { .. } => "io",
            Self::Configuration { .. } => "configuration",
        }
    }
}

/// Converts an I/O error to an [`AnalysisError::Io`].
pub(crate) fn io_error(error: &std::io::Error) -> AnalysisError {
    AnalysisError::Io {
        message: error.to_string(),
    }
}
