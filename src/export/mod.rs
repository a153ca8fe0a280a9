//! Export of the last scan.
//!
//! The dashboard's download control writes the cached scan as a CSV file
//! named after the scanned product. Only the last successful scan is ever
//! exported; there is no history.

mod csv;

pub use self::csv::{CSV_HEADER, CsvExport, FILE_PREFIX, export_file_name, quote_field, write_csv};
