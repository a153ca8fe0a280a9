//! Gateway to the external analysis service.
//!
//! The trait-based design lets the dashboard run against a mock in tests
//! while [`HttpAnalysisGateway`] performs the real `POST /api/analyze`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::error::{AnalysisError, GENERIC_SERVER_ERROR};
use super::identifier::ProductIdentifier;
use super::model::AnalysisResult;

/// Base URL of a locally running analysis service.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const ANALYZE_PATH: &str = "api/analyze";

/// JSON body of an analyse request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    /// Trimmed identifier or product URL.
    pub asin: String,
    /// Optional hint for how many review pages the service should fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl AnalyzeRequest {
    /// Builds a request for a validated identifier.
    #[must_use]
    pub fn new(identifier: &ProductIdentifier, pages: Option<u32>) -> Self {
        Self {
            asin: identifier.as_str().to_owned(),
            pages,
        }
    }
}

/// Gateway that can run one analysis.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Submit the request and wait for the verdict.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// Configuration for [`HttpAnalysisGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAnalysisGatewayConfig {
    /// Base URL of the service (e.g., `http://127.0.0.1:5000`).
    pub base_url: String,
}

impl Default for HttpAnalysisGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

impl HttpAnalysisGatewayConfig {
    /// Constructs configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Analysis gateway that talks HTTP through reqwest.
#[derive(Debug, Clone)]
pub struct HttpAnalysisGateway {
    client: Client,
    endpoint: Url,
}

impl HttpAnalysisGateway {
    /// Creates a gateway for the configured service.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when the base URL does not
    /// parse or the HTTP client cannot be built.
    pub fn new(config: &HttpAnalysisGatewayConfig) -> Result<Self, AnalysisError> {
        let endpoint = analyze_endpoint(&config.base_url)?;
        let client = Client::builder()
            .build()
            .map_err(|error| AnalysisError::Configuration {
                message: format!("failed to configure analysis HTTP client: {error}"),
            })?;
        Ok(Self { client, endpoint })
    }

    /// Full URL that requests are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, AnalysisError> {
        tracing::debug!(endpoint = %self.endpoint, asin = %request.asin, "posting analysis request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|error| AnalysisError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| AnalysisError::Network {
                message: format!("failed to read response body: {error}"),
            })?;

        let outcome = interpret_response(status.as_u16(), status.is_success(), &body);
        if let Err(error) = &outcome {
            tracing::warn!(status = status.as_u16(), "analysis request failed: {error}");
        }
        outcome
    }
}

/// Resolves `<base>/api/analyze`, tolerating a trailing slash on the base.
///
/// # Errors
///
/// Returns [`AnalysisError::Configuration`] for unparseable or non-HTTP URLs.
pub(crate) fn analyze_endpoint(base_url: &str) -> Result<Url, AnalysisError> {
    let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|error| AnalysisError::Configuration {
        message: format!("analysis API URL '{base_url}' is invalid: {error}"),
    })?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(AnalysisError::Configuration {
            message: format!("analysis API URL '{base_url}' must use http or https"),
        });
    }
    base.join(ANALYZE_PATH)
        .map_err(|error| AnalysisError::Configuration {
            message: format!("analysis API URL '{base_url}' is invalid: {error}"),
        })
}

/// Maps status and body of a response onto the analysis outcome.
///
/// A non-success status or an `error` field in the body are both failure
/// signals. The service message is passed through; when it is missing the
/// generic fallback is used.
pub(crate) fn interpret_response(
    status: u16,
    success: bool,
    body: &str,
) -> Result<AnalysisResult, AnalysisError> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        if success {
            return Err(AnalysisError::MalformedResponse {
                message: "response body is not JSON".to_owned(),
            });
        }
        return Err(server_error(status, None));
    };

    if let Some(message) = error_field(&value) {
        return Err(server_error(status, Some(message)));
    }
    if !success {
        return Err(server_error(status, None));
    }

    let result: AnalysisResult =
        serde_json::from_value(value).map_err(|error| AnalysisError::MalformedResponse {
            message: error.to_string(),
        })?;
    result.results.ensure_parallel()?;
    Ok(result)
}

fn error_field(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn server_error(status: u16, message: Option<String>) -> AnalysisError {
    let message = message
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_owned());
    AnalysisError::Server { status, message }
}
