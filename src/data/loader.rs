use super::{DataError, PriceTable, Result};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

pub struct DataLoader;

impl DataLoader {
    fn builder() -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Fields);
        builder
    }

    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<PriceTable> {
        let file = std::fs::File::open(path)?;
        Self::load_reader(file)
    }

    /// Reads a CSV with a header row from any byte source.
    ///
    /// Short rows are padded with empty cells, rows with more cells than
    /// there are headers are rejected.
    pub fn load_reader<R: Read>(reader: R) -> Result<PriceTable> {
        let mut rdr = Self::builder().from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() {
            return Err(DataError::EmptyInput);
        }

        let mut rows = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            if record.len() > headers.len() {
                return Err(DataError::RaggedRow {
                    row: i + 1,
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(PriceTable::new(headers, rows))
    }
}
