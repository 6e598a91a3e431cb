use approx::assert_relative_eq;
use index_volatility::{analysis::AnalysisError, data::DataError, AnalyzerService};
use std::io::Write;

#[test]
fn test_reference_prices() {
    let report = AnalyzerService::new()
        .analyze_path("tests/data/reference_prices.csv")
        .expect("Failed to analyze reference prices");

    assert_eq!(report.close_column, "Close");
    assert_eq!(report.observations, 5);
    assert_relative_eq!(report.daily_volatility, 0.12199353333493884, epsilon = 1e-10);
    assert_relative_eq!(report.annualized_volatility, 0.2727858333523099, epsilon = 1e-10);
    // Scaled by all five rows, not the four defined returns
    assert!((report.annualized_volatility - report.daily_volatility * 4f64.sqrt()).abs() > 1e-3);
}

#[test]
fn test_first_matching_column_wins() {
    let report = AnalyzerService::new()
        .analyze_path("tests/data/adj_close_first.csv")
        .unwrap();

    assert_eq!(report.close_column, "Adj Close Price");
    assert_eq!(report.observations, 3);
    assert_relative_eq!(report.annualized_volatility, 0.0, epsilon = 1e-12);
}

#[test]
fn test_no_close_column() {
    let err = AnalyzerService::new()
        .analyze_path("tests/data/no_close.csv")
        .unwrap_err();

    assert!(matches!(err, AnalysisError::ColumnNotFound));
    assert_eq!(
        err.to_string(),
        "No column containing the word 'Close' found in the CSV file."
    );
}

#[test]
fn test_zero_price_yields_nan() {
    let report = AnalyzerService::new()
        .analyze_path("tests/data/zero_price.csv")
        .expect("zero prices must not fail the pipeline");

    assert_eq!(report.close_column, "CLOSE");
    assert!(report.daily_volatility.is_nan());
    assert!(report.annualized_volatility.is_nan());
}

#[test]
fn test_non_numeric_close() {
    let err = AnalyzerService::new()
        .analyze_path("tests/data/bad_number.csv")
        .unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::Data(DataError::InvalidNumber { row: 2, .. })
    ));
}

#[test]
fn test_missing_file() {
    let err = AnalyzerService::new()
        .analyze_path("tests/data/missing.csv")
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Data(DataError::Io(_))));
}

#[test]
fn test_repeated_runs_are_identical() {
    let service = AnalyzerService::new();
    let first = service.analyze_path("tests/data/reference_prices.csv").unwrap();
    let second = service.analyze_path("tests/data/reference_prices.csv").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_path_and_reader_agree() {
    let csv = "Date,Close\n2024-01-02,4000.5\n2024-01-03,4012.25\n2024-01-04,3990.0\n2024-01-05,4021.75\n";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let service = AnalyzerService::new();
    let from_path = service.analyze_path(file.path()).unwrap();
    let from_reader = service.analyze_reader(csv.as_bytes()).unwrap();

    assert_eq!(from_path, from_reader);
    assert!(from_path.annualized_volatility.is_finite());
}

#[test]
fn test_two_rows_single_return_is_nan() {
    let report = AnalyzerService::new()
        .analyze_reader("Close\n100\n101\n".as_bytes())
        .unwrap();

    assert_eq!(report.observations, 2);
    assert!(report.annualized_volatility.is_nan());
}
