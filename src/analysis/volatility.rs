use ndarray::{Array1, ArrayView1};

/// Sample standard deviation (N-1 denominator) of the defined returns.
///
/// NaN entries are skipped. Fewer than two remaining values gives NaN, and
/// any infinite value poisons the result to NaN.
pub fn daily_volatility(returns: ArrayView1<f64>) -> f64 {
    let defined: Array1<f64> = returns.iter().copied().filter(|r| !r.is_nan()).collect();
    if defined.len() < 2 {
        return f64::NAN;
    }
    defined.std(1.0)
}

/// Scales a per-period volatility by `sqrt(periods)`.
pub fn annualize(daily_volatility: f64, periods: usize) -> f64 {
    daily_volatility * (periods as f64).sqrt()
}
