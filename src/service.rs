use crate::analysis::{column, returns, volatility, Result};
use crate::data::{loader::DataLoader, PriceTable};
use ndarray::Array1;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of one volatility run over a price table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatilityReport {
    pub close_column: String,
    /// Rows in the table, including the first row whose return is undefined.
    pub observations: usize,
    pub daily_volatility: f64,
    pub annualized_volatility: f64,
}

/// Runs the close column -> daily returns -> volatility pipeline.
///
/// Holds no state between calls; the same input always gives the same report.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzerService;

impl AnalyzerService {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_path<P: AsRef<Path>>(&self, path: P) -> Result<VolatilityReport> {
        debug!(path = %path.as_ref().display(), "loading price file");
        let table = DataLoader::load_path(path)?;
        self.analyze_table(&table)
    }

    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<VolatilityReport> {
        let table = DataLoader::load_reader(reader)?;
        self.analyze_table(&table)
    }

    pub fn analyze_table(&self, table: &PriceTable) -> Result<VolatilityReport> {
        let close_column = column::resolve_close_column(table.headers())?;
        let prices = Array1::from(table.numeric_column(close_column)?);

        let daily_returns = returns::pct_change(prices.view());
        let daily_volatility = volatility::daily_volatility(daily_returns.view());
        let observations = table.nrows();
        let annualized_volatility = volatility::annualize(daily_volatility, observations);

        info!(
            close_column,
            observations, daily_volatility, annualized_volatility, "computed volatility"
        );

        Ok(VolatilityReport {
            close_column: close_column.to_string(),
            observations,
            daily_volatility,
            annualized_volatility,
        })
    }
}
