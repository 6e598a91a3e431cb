use super::{AnalysisError, Result};

const CLOSE_PATTERN: &str = "close";

/// Returns the first header containing "close", ignoring case.
///
/// Matching is by substring and the leftmost hit wins, so "Adj Close"
/// is picked over a later "Close".
pub fn resolve_close_column(headers: &[String]) -> Result<&str> {
    headers
        .iter()
        .find(|h| h.to_lowercase().contains(CLOSE_PATTERN))
        .map(String::as_str)
        .ok_or(AnalysisError::ColumnNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_name() {
        let h = headers(&["Date", "Open", "Close", "Volume"]);
        assert_eq!(resolve_close_column(&h).unwrap(), "Close");
    }

    #[test]
    fn test_case_insensitive_substring() {
        let h = headers(&["date", "PREV_CLOSE_PX"]);
        assert_eq!(resolve_close_column(&h).unwrap(), "PREV_CLOSE_PX");
    }

    #[test]
    fn test_first_match_wins() {
        let h = headers(&["Date", "Adj Close Price", "close_flag", "Close"]);
        assert_eq!(resolve_close_column(&h).unwrap(), "Adj Close Price");

        let h = headers(&["close_flag", "Adj Close Price"]);
        assert_eq!(resolve_close_column(&h).unwrap(), "close_flag");
    }

    #[test]
    fn test_no_match() {
        let h = headers(&["Date", "Open", "High", "Low", "Clos"]);
        assert!(matches!(
            resolve_close_column(&h),
            Err(AnalysisError::ColumnNotFound)
        ));
    }
}
