//! Reading posterior traces
//!
//! A trace is a delimited table with one row per MCMC sample and one
//! column per parameter, as written by BEAST and similar tools. Lines
//! starting with `#` are comments. Tab- and comma-separated files are
//! both accepted; the delimiter is taken from the header line.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Row {row}: '{value}' is not a number")]
    InvalidValue { row: usize, value: String },
}

/// Read one numeric column of a trace
pub fn read_column<R: Read>(mut reader: R, column: &str) -> Result<Vec<f64>, TraceError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(&content))
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(content.as_bytes());

    let index = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| TraceError::ColumnNotFound(column.to_string()))?;

    let mut values = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let cell = record.get(index).unwrap_or("").trim();
        let value = cell.parse::<f64>().map_err(|_| TraceError::InvalidValue {
            row: row + 1,
            value: cell.to_string(),
        })?;
        values.push(value);
    }

    tracing::debug!(column, samples = values.len(), "read trace column");
    Ok(values)
}

/// Read one numeric column of a trace file
pub fn read_column_file(path: &Path, column: &str) -> Result<Vec<f64>, TraceError> {
    let file = File::open(path).map_err(|source| TraceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_column(BufReader::new(file), column)
}

fn detect_delimiter(content: &str) -> u8 {
    let header = content
        .lines()
        .find(|line| !line.starts_with('#') && !line.trim().is_empty())
        .unwrap_or("");

    if header.contains('\t') {
        b'\t'
    } else {
        b','
    }
}
