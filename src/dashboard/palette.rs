//! Colour tones shared by the dashboard panels.

use std::fmt;

/// Reset sequence appended after any toned span.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Named colour used by tiers, badges and chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Genuine reviews and low risk.
    Emerald,
    /// Moderate risk.
    Amber,
    /// Fake reviews and critical risk.
    Red,
    /// Unfilled gauge track and neutral chrome.
    Slate,
    /// Accent used for headings.
    Cyan,
}

impl Tone {
    /// Hex colour used when the dashboard is rendered outside a terminal.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Emerald => "#10b981",
            Self::Amber => "#f59e0b",
            Self::Red => "#ef4444",
            Self::Slate => "#1e293b",
            Self::Cyan => "#06b6d4",
        }
    }

    /// ANSI foreground sequence for terminal output.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Emerald => "\x1b[32m",
            Self::Amber => "\x1b[33m",
            Self::Red => "\x1b[31m",
            Self::Slate => "\x1b[90m",
            Self::Cyan => "\x1b[36m",
        }
    }

    /// Wraps `text` in this tone's ANSI sequence.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{ANSI_RESET}", self.ansi())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}
