//! Product identifier validation and ASIN extraction.

use std::fmt;

use super::error::AnalysisError;

/// Length of an Amazon Standard Identification Number.
const ASIN_LEN: usize = 10;

/// Marketplace assumed when the input does not name one.
pub const DEFAULT_MARKETPLACE: &str = "amazon.com";

/// Trimmed, non-empty product identifier entered by the user.
///
/// The identifier may be a bare ASIN or a full product URL. The raw trimmed
/// text is what travels to the analysis service; the ASIN and marketplace
/// accessors only feed display and file naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIdentifier(String);

impl ProductIdentifier {
    /// Validates that the input is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyIdentifier`] when the input is blank.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, AnalysisError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::EmptyIdentifier);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the first ten-character run of `A-Z0-9` in the identifier.
    #[must_use]
    pub fn asin(&self) -> Option<&str> {
        extract_asin(self.as_str())
    }

    /// Returns the Amazon marketplace domain named in a URL, or
    /// [`DEFAULT_MARKETPLACE`].
    #[must_use]
    pub fn marketplace(&self) -> &str {
        extract_marketplace(self.as_str()).unwrap_or(DEFAULT_MARKETPLACE)
    }
}

impl fmt::Display for ProductIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ProductIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

const fn is_asin_byte(byte: u8) -> bool {
    byte.is_ascii_uppercase() || byte.is_ascii_digit()
}

/// Finds the first ASIN-shaped run inside `text`.
pub(crate) fn extract_asin(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut run_start = 0_usize;
    let mut run_len = 0_usize;

    for (index, byte) in bytes.iter().enumerate() {
        if is_asin_byte(*byte) {
            if run_len == 0 {
                run_start = index;
            }
            run_len += 1;
            if run_len == ASIN_LEN {
                return text.get(run_start..run_start + ASIN_LEN);
            }
        } else {
            run_len = 0;
        }
    }
    None
}

/// Finds `amazon.<tld>/` in a URL and returns `amazon.<tld>`.
fn extract_marketplace(text: &str) -> Option<&str> {
    const NEEDLE: &str = "amazon.";

    let mut search_from = 0_usize;
    while let Some(offset) = text.get(search_from..).and_then(|rest| rest.find(NEEDLE)) {
        let start = search_from + offset;
        let suffix_start = start + NEEDLE.len();
        let suffix = text.get(suffix_start..).unwrap_or_default();
        let suffix_len = suffix
            .bytes()
            .take_while(|byte| byte.is_ascii_lowercase() || *byte == b'.')
            .count();
        let terminated = suffix.as_bytes().get(suffix_len) == Some(&b'/');
        if suffix_len > 0 && terminated {
            return text.get(start..suffix_start + suffix_len);
        }
        search_from = suffix_start;
    }
    None
}
