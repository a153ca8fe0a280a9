//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state and update dispatch for the
//! dashboard screen. Scan state itself lives in [`Dashboard`]; the app adds
//! the input line, focus, feed selection and the status bar.
//!
//! # Module Structure
//!
//! - `analysis_handlers`: Submitting scans, applying results, frame ticks
//!   and export
//! - `feed_navigation`: Card selection and expansion
//! - `model_impl`: The `bubbletea_rs::Model` implementation
//! - `rendering`: View rendering methods for terminal output

use std::collections::BTreeSet;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use camino::Utf8PathBuf;

use crate::dashboard::{Dashboard, FrameClock};

use super::DashboardContext;
use super::components::StatusLine;
use super::input::InputContext;
use super::messages::AppMsg;

mod analysis_handlers;
mod feed_navigation;
mod model_impl;
mod rendering;

/// Status message shown after a scan is applied.
pub const SUCCESS_MESSAGE: &str = "Analysis completed successfully!";

const EDITING_HINTS: &str = "Enter:analyse  Tab:feed  Ctrl+U:clear  Ctrl+S:export  Ctrl+C:quit";
const BROWSING_HINTS: &str = "j/k:select  Enter:expand  e:export  r:re-run  Tab:input  q:quit";

/// Main application model for the dashboard TUI.
#[derive(Debug)]
pub struct DashboardApp {
    dashboard: Dashboard,
    /// Identifier being typed.
    pub(crate) input: String,
    /// Which area receives key presses.
    pub(crate) focus: InputContext,
    /// Index of the selected feed card.
    pub(crate) selected: usize,
    /// Indices of expanded feed cards.
    pub(crate) expanded: BTreeSet<usize>,
    /// Outcome of the last action, replacing the key hints.
    pub(crate) status: Option<StatusLine>,
    output_dir: Utf8PathBuf,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    frame_tick_armed: bool,
    autorun: bool,
}

impl DashboardApp {
    /// Creates the application from its startup context.
    ///
    /// A pre-filled identifier is analysed as soon as the program starts.
    #[must_use]
    pub fn new(context: DashboardContext) -> Self {
        let dashboard = Dashboard::new(context.gateway, context.settings)
            .with_telemetry(context.telemetry);
        let input = context.initial_identifier.unwrap_or_default();
        Self {
            dashboard,
            autorun: !input.trim().is_empty(),
            input,
            focus: InputContext::Editing,
            selected: 0,
            expanded: BTreeSet::new(),
            status: None,
            output_dir: context.output_dir,
            width: 80,
            height: 24,
            frame_tick_armed: false,
        }
    }

    /// Replaces the frame clock used to anchor animations.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn FrameClock>) -> Self {
        self.dashboard = self.dashboard.with_clock(clock);
        self
    }

    /// Dashboard state behind the screen.
    #[must_use]
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Current identifier input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Status bar content for the current state.
    #[must_use]
    pub fn status_line(&self) -> StatusLine {
        self.status
            .clone()
            .unwrap_or_else(|| StatusLine::Hints(self.hints()))
    }

    const fn hints(&self) -> &'static str {
        match self.focus {
            InputContext::Editing => EDITING_HINTS,
            InputContext::Browsing => BROWSING_HINTS,
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category to keep cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_input() {
            return self.handle_input_msg(msg);
        }
        if msg.is_feed() {
            return self.handle_feed_msg(msg);
        }
        if msg.is_analysis() {
            return self.handle_analysis_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches input line messages to their handlers.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_input_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InputChar(character) => self.input.push(*character),
            AppMsg::InputBackspace => {
                self.input.pop();
            }
            AppMsg::InputClear => self.input.clear(),
            AppMsg::ToggleFocus => {
                self.focus = match self.focus {
                    InputContext::Editing => InputContext::Browsing,
                    InputContext::Browsing => InputContext::Editing,
                };
                self.status = None;
            }
            _ => {
                debug_assert!(false, "non-input message routed to handle_input_msg");
            }
        }
        None
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    /// Runs the pre-filled identifier once, on the first startup message.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if !self.autorun {
            return None;
        }
        self.autorun = false;
        self.handle_submit()
    }
}
