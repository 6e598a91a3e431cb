use ndarray::{s, Array1, ArrayView1};

/// Replaces each NaN with the last defined value before it.
///
/// Leading NaNs have nothing to carry forward and stay NaN.
pub fn forward_fill(values: ArrayView1<f64>) -> Array1<f64> {
    let mut last = f64::NAN;
    values.mapv(|v| {
        if !v.is_nan() {
            last = v;
        }
        last
    })
}

/// Fractional period-over-period change of a price series.
///
/// Missing prices are forward filled first, so a gap yields a zero return
/// rather than two undefined ones. The output has the same length as the
/// input. Entry 0 has no prior price and is NaN. A zero previous price is
/// not special-cased: the division yields infinity, or NaN for `0 / 0`.
pub fn pct_change(prices: ArrayView1<f64>) -> Array1<f64> {
    let n = prices.len();
    let mut returns = Array1::from_elem(n, f64::NAN);
    if n < 2 {
        return returns;
    }

    let prices = forward_fill(prices);
    let current = prices.slice(s![1..]);
    let prev = prices.slice(s![..-1]);
    returns
        .slice_mut(s![1..])
        .assign(&((&current - &prev) / &prev));
    returns
}
