//! CSV formatter for the cached scan.
//!
//! Matches what spreadsheet tools expect from a browser download: CRLF row
//! endings, the review text always quoted, and embedded quotes doubled.

use std::fs::File;
use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};

use crate::analysis::error::io_error;
use crate::analysis::{AnalysisError, identifier::extract_asin};
use crate::dashboard::CachedScan;

/// Header row.
pub const CSV_HEADER: &str = "Review_Text,Prediction,Confidence_Score";
/// Prefix of every export file name.
pub const FILE_PREFIX: &str = "trustlens_analysis_";
const ROW_END: &str = "\r\n";
const MAX_STEM_CHARS: usize = 64;

/// Writes `scan` as CSV: header plus one CRLF-terminated row per review.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if writing to the output fails.
pub fn write_csv<W: Write>(writer: &mut W, scan: &CachedScan) -> Result<(), AnalysisError> {
    write!(writer, "{CSV_HEADER}{ROW_END}").map_err(|e| io_error(&e))?;
    for row in scan.rows() {
        write!(
            writer,
            "{},{},{}{ROW_END}",
            quote_field(row.text),
            row.prediction,
            row.confidence
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Wraps `text` in double quotes, doubling any quotes inside.
#[must_use]
pub fn quote_field(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// File name for an export of `identifier`.
///
/// Plain identifiers are used as they are. Anything else (typically a
/// product URL) is reduced to the ASIN it contains, or failing that has its
/// unsafe characters replaced with `_`.
#[must_use]
pub fn export_file_name(identifier: &str) -> String {
    let stem = if is_safe_stem(identifier) {
        identifier.to_owned()
    } else if let Some(asin) = extract_asin(identifier) {
        asin.to_owned()
    } else {
        sanitise_stem(identifier)
    };
    format!("{FILE_PREFIX}{stem}.csv")
}

fn is_safe_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || matches!(character, '-' | '_')
}

fn is_safe_stem(stem: &str) -> bool {
    !stem.is_empty() && stem.chars().count() <= MAX_STEM_CHARS && stem.chars().all(is_safe_char)
}

fn sanitise_stem(stem: &str) -> String {
    let sanitised: String = stem
        .chars()
        .take(MAX_STEM_CHARS)
        .map(|character| if is_safe_char(character) { character } else { '_' })
        .collect();
    if sanitised.is_empty() {
        "scan".to_owned()
    } else {
        sanitised
    }
}

/// A formatted export ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// File name derived from the scan identifier.
    pub file_name: String,
    /// Full CSV document.
    pub contents: String,
    /// Data rows, excluding the header.
    pub rows: usize,
}

impl CsvExport {
    /// Formats `scan`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Io`] if formatting fails.
    pub fn from_scan(scan: &CachedScan) -> Result<Self, AnalysisError> {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, scan)?;
        let contents = String::from_utf8(buffer).map_err(|e| AnalysisError::Io {
            message: format!("CSV output is not UTF-8: {e}"),
        })?;
        Ok(Self {
            file_name: export_file_name(scan.identifier()),
            contents,
            rows: scan.len(),
        })
    }

    /// Writes the document into `dir` and returns the file path.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Io`] when the file cannot be created or
    /// written.
    pub fn write_to_dir(&self, dir: &Utf8Path) -> Result<Utf8PathBuf, AnalysisError> {
        let path = dir.join(&self.file_name);
        let file = File::create(&path).map_err(|e| AnalysisError::Io {
            message: format!("failed to create export file '{path}': {e}"),
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.contents.as_bytes())
            .map_err(|e| io_error(&e))?;
        writer.flush().map_err(|e| AnalysisError::Io {
            message: format!("failed to flush export file: {e}"),
        })?;
        tracing::info!(%path, rows = self.rows, "exported scan as CSV");
        Ok(path)
    }
}
