//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use chrono::{DateTime, Utc};

use crate::analysis::{AnalysisError, AnalysisResult};
use crate::dashboard::PendingAnalysis;

/// Messages for the dashboard TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Input line
    /// Append a character to the identifier input.
    InputChar(char),
    /// Remove the last character of the identifier input.
    InputBackspace,
    /// Clear the identifier input.
    InputClear,
    /// Switch focus between the input line and the review feed.
    ToggleFocus,

    // Feed navigation
    /// Select the previous review card.
    CursorUp,
    /// Select the next review card.
    CursorDown,
    /// Expand or collapse the selected review card.
    ToggleExpand,

    // Analysis lifecycle
    /// Run an analysis for the current input.
    Submit,
    /// The gateway answered a submitted request.
    AnalysisFinished {
        /// The request that was submitted.
        pending: PendingAnalysis,
        /// What the gateway returned.
        outcome: Result<AnalysisResult, AnalysisError>,
        /// When the answer arrived.
        analysed_at: DateTime<Utc>,
    },
    /// Re-render while counters are animating.
    FrameTick,
    /// Write the cached scan as CSV.
    Export,

    // Application lifecycle
    /// Synthetic startup event that triggers the first render.
    Initialized,
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns `true` for messages that edit the input line or move focus.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::InputChar(_) | Self::InputBackspace | Self::InputClear | Self::ToggleFocus
        )
    }

    /// Returns `true` for feed navigation messages.
    #[must_use]
    pub const fn is_feed(&self) -> bool {
        matches!(self, Self::CursorUp | Self::CursorDown | Self::ToggleExpand)
    }

    /// Returns `true` for messages that start, finish or animate a scan.
    #[must_use]
    pub const fn is_analysis(&self) -> bool {
        matches!(
            self,
            Self::Submit | Self::AnalysisFinished { .. } | Self::FrameTick | Self::Export
        )
    }
}
