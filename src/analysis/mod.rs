pub mod column;
pub mod returns;
pub mod volatility;

use crate::data::DataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No column containing the word 'Close' found in the CSV file.")]
    ColumnNotFound,
    #[error(transparent)]
    Data(#[from] DataError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
