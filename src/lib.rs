//! Annualized volatility of a historical index price series.
//!
//! A CSV with a header row is loaded, the first column whose name contains
//! "close" (any case) is taken as the price series, and the sample standard
//! deviation of its daily returns is scaled by the square root of the row
//! count.
//!
//! ```no_run
//! use index_volatility::AnalyzerService;
//!
//! let report = AnalyzerService::new().analyze_path("data/index.csv")?;
//! println!("{:.4}", report.annualized_volatility);
//! # Ok::<(), index_volatility::analysis::AnalysisError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod data;
pub mod server;
pub mod service;

pub use analysis::AnalysisError;
pub use service::{AnalyzerService, VolatilityReport};
