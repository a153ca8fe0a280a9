//! Scan lifecycle handlers for the dashboard TUI.
//!
//! Submitting validates the input and returns a command future that calls
//! the gateway; the answer comes back as [`AppMsg::AnalysisFinished`]. While
//! counters are moving a single frame-tick command keeps the screen
//! re-rendering.

use std::any::Any;

use bubbletea_rs::Cmd;
use chrono::{DateTime, Utc};

use super::{DashboardApp, SUCCESS_MESSAGE};
use crate::analysis::{AnalysisError, AnalysisResult};
use crate::dashboard::{FRAME_INTERVAL, PendingAnalysis};
use crate::tui::components::StatusLine;
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches scan lifecycle messages to their handlers.
    pub(super) fn handle_analysis_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Submit => self.handle_submit(),
            AppMsg::AnalysisFinished {
                pending,
                outcome,
                analysed_at,
            } => self.handle_analysis_finished(pending, outcome.clone(), *analysed_at),
            AppMsg::FrameTick => self.handle_frame_tick(),
            AppMsg::Export => self.handle_export(),
            _ => {
                debug_assert!(false, "non-analysis message routed to handle_analysis_msg");
                None
            }
        }
    }

    /// Validates the input and starts the gateway call.
    pub(super) fn handle_submit(&mut self) -> Option<Cmd> {
        match self.dashboard.submit(&self.input) {
            Ok(pending) => {
                self.status = None;
                Some(self.analysis_cmd(pending))
            }
            Err(error) => {
                self.status = Some(StatusLine::Error(error.to_string()));
                None
            }
        }
    }

    fn analysis_cmd(&self, pending: PendingAnalysis) -> Cmd {
        let gateway = self.dashboard.gateway();
        Box::pin(async move {
            let outcome = gateway.analyze(&pending.request).await;
            Some(Box::new(AppMsg::AnalysisFinished {
                pending,
                outcome,
                analysed_at: Utc::now(),
            }) as Box<dyn Any + Send>)
        })
    }

    fn handle_analysis_finished(
        &mut self,
        pending: &PendingAnalysis,
        outcome: Result<AnalysisResult, AnalysisError>,
        analysed_at: DateTime<Utc>,
    ) -> Option<Cmd> {
        let applied = self
            .dashboard
            .complete(pending, outcome, analysed_at)
            .map(|_| ());
        match applied {
            Ok(()) => {
                self.selected = 0;
                self.expanded.clear();
                self.status = Some(StatusLine::Success(SUCCESS_MESSAGE.to_owned()));
                self.arm_frame_tick()
            }
            Err(error) => {
                self.status = Some(StatusLine::Error(error.to_string()));
                None
            }
        }
    }

    fn handle_frame_tick(&mut self) -> Option<Cmd> {
        self.frame_tick_armed = false;
        if self.dashboard.is_animating() {
            self.arm_frame_tick()
        } else {
            None
        }
    }

    /// Creates a command that re-renders after one frame, unless one is
    /// already pending.
    fn arm_frame_tick(&mut self) -> Option<Cmd> {
        if self.frame_tick_armed {
            return None;
        }
        self.frame_tick_armed = true;
        Some(Box::pin(async {
            tokio::time::sleep(FRAME_INTERVAL).await;
            Some(Box::new(AppMsg::FrameTick) as Box<dyn Any + Send>)
        }))
    }

    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_export(&mut self) -> Option<Cmd> {
        self.status = Some(match self.dashboard.export_to_dir(&self.output_dir) {
            Ok(path) => StatusLine::Success(format!("Exported {path}")),
            Err(error) => StatusLine::Error(error.to_string()),
        });
        None
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle without
    /// waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
