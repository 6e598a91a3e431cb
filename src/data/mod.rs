pub mod loader;

use thiserror::Error;

/// Cell texts read as a missing value, matching the usual CSV export markers.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Tabular price data as read from a CSV file.
///
/// Cells are kept as raw strings; only the columns the analysis needs are
/// converted to numbers. Every row holds exactly one cell per header.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PriceTable {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    /// Parses the named column as `f64`, in row order.
    ///
    /// Empty cells and markers such as `null` or `N/A` are missing values
    /// and come back as NaN.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let raw = row[idx].trim();
                if MISSING_MARKERS.contains(&raw) {
                    return Ok(f64::NAN);
                }
                raw.parse::<f64>().map_err(|_| DataError::InvalidNumber {
                    row: i + 1,
                    column: name.to_string(),
                    value: raw.to_string(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No columns to parse from file")]
    EmptyInput,
    #[error("Row {row}: could not convert '{value}' in column '{column}' to a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
    #[error("Row {row}: expected {expected} fields, saw {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
