//! Busy/idle lifecycle around the analysis request.

use std::fmt;
use std::sync::Arc;

use crate::analysis::{
    AnalysisError, AnalysisGateway, AnalysisResult, AnalyzeRequest, ProductIdentifier,
};

/// Trigger label while idle.
pub const IDLE_LABEL: &str = "Run Analysis";
/// Trigger label while a request is in flight.
pub const BUSY_LABEL: &str = "Analyzing Data...";
const IDLE_ICON: &str = "✦";
const BUSY_ICON: &str = "◌";

/// How the trigger and panels look in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyView {
    /// Whether the trigger accepts input.
    pub trigger_enabled: bool,
    /// Trigger text.
    pub trigger_label: &'static str,
    /// Glyph shown before the label.
    pub trigger_icon: &'static str,
    /// Whether panels render as loading skeletons.
    pub skeleton: bool,
}

impl BusyView {
    /// Appearance while idle.
    pub const IDLE: Self = Self {
        trigger_enabled: true,
        trigger_label: IDLE_LABEL,
        trigger_icon: IDLE_ICON,
        skeleton: false,
    };

    /// Appearance while a request is in flight.
    pub const BUSY: Self = Self {
        trigger_enabled: false,
        trigger_label: BUSY_LABEL,
        trigger_icon: BUSY_ICON,
        skeleton: true,
    };
}

/// A validated submission waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnalysis {
    /// Identifier as submitted.
    pub identifier: ProductIdentifier,
    /// Body posted to the service.
    pub request: AnalyzeRequest,
}

/// Validates submissions and guards against overlapping requests.
pub struct RequestOrchestrator {
    gateway: Arc<dyn AnalysisGateway>,
    pages: Option<u32>,
    in_flight: Option<ProductIdentifier>,
}

impl fmt::Debug for RequestOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOrchestrator")
            .field("pages", &self.pages)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl RequestOrchestrator {
    /// Creates an idle orchestrator.
    #[must_use]
    pub fn new(gateway: Arc<dyn AnalysisGateway>, pages: Option<u32>) -> Self {
        Self {
            gateway,
            pages,
            in_flight: None,
        }
    }

    /// Gateway used for requests.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn AnalysisGateway> {
        Arc::clone(&self.gateway)
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Trigger and panel appearance for the current state.
    #[must_use]
    pub const fn busy_view(&self) -> BusyView {
        if self.is_busy() {
            BusyView::BUSY
        } else {
            BusyView::IDLE
        }
    }

    /// Validates `raw` and enters the busy state.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyIdentifier`] for blank input and
    /// [`AnalysisError::RequestInFlight`] while another request runs. The
    /// state is unchanged in both cases.
    pub fn begin(&mut self, raw: &str) -> Result<PendingAnalysis, AnalysisError> {
        let identifier = ProductIdentifier::parse(raw)?;
        if let Some(current) = &self.in_flight {
            tracing::debug!(%current, rejected = %identifier, "analysis already in flight");
            return Err(AnalysisError::RequestInFlight);
        }
        tracing::info!(%identifier, pages = ?self.pages, "starting analysis");
        let request = AnalyzeRequest::new(&identifier, self.pages);
        self.in_flight = Some(identifier.clone());
        Ok(PendingAnalysis {
            identifier,
            request,
        })
    }

    /// Returns to idle and passes the outcome through.
    ///
    /// # Errors
    ///
    /// Returns the error carried by `outcome`.
    pub fn finish(
        &mut self,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Result<AnalysisResult, AnalysisError> {
        if let Some(identifier) = self.in_flight.take() {
            tracing::debug!(%identifier, succeeded = outcome.is_ok(), "analysis finished");
        }
        outcome
    }

    /// Runs `begin`, the gateway call and `finish` in sequence.
    ///
    /// # Errors
    ///
    /// Returns validation, transport, server and decoding errors.
    pub async fn analyze(
        &mut self,
        raw: &str,
    ) -> Result<(PendingAnalysis, AnalysisResult), AnalysisError> {
        let pending = self.begin(raw)?;
        let outcome = self.gateway.analyze(&pending.request).await;
        let result = self.finish(outcome)?;
        Ok((pending, result))
    }
}
