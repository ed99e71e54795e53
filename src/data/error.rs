use std::path::PathBuf;

use thiserror::Error;

/// Every way the sales dataset can fail to load.
///
/// All variants are fatal for the load that produced them: the caller shows
/// the message and keeps running without data. Nothing is retried.
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("spreadsheet: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("sheet '{0}' not found in workbook")]
    MissingSheet(String),

    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),

    #[error("invalid column range {first}:{last}")]
    InvalidColumnRange { first: String, last: String },

    #[error("row {row}, column '{column}': {reason}")]
    InvalidCell {
        row: usize,
        column: &'static str,
        reason: String,
    },

    #[error("row {row}: time '{value}' does not match HH:MM:SS")]
    InvalidTime { row: usize, value: String },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}
