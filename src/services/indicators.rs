/// Simple Moving Average (SMA)
/// Returns a vector aligned with `values`:
/// - `None` until `period` values exist
/// - `Some(mean)` of the trailing `period` values (inclusive) afterwards
pub fn moving_average(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    let warm_up = period.saturating_sub(1).min(values.len());

    std::iter::repeat(None)
        .take(warm_up)
        .chain(
            values
                .windows(period)
                .map(|window| Some(window.iter().sum::<f64>() / period as f64)),
        )
        .collect()
}

/// Exponential Moving Average (EMA)
///
/// Seeded with the first value and defined at every position, unlike
/// [`moving_average`]. `period == 0` behaves as `period == 1`.
pub fn exponential_moving_average(values: &[f64], period: usize) -> Vec<f64> {
    let Some(&seed) = values.first() else {
        return Vec::new();
    };

    let multiplier = 2.0 / (period.max(1) as f64 + 1.0);

    let smoothed = values.iter().skip(1).scan(seed, move |prev_ema, &v| {
        *prev_ema = (v - *prev_ema) * multiplier + *prev_ema;
        Some(*prev_ema)
    });

    std::iter::once(seed).chain(smoothed).collect()
}

/// Latest value divided by the latest defined SMA, e.g. the 200-week multiple.
pub fn moving_average_multiple(values: &[f64], period: usize) -> Option<f64> {
    let latest = *values.last()?;
    let average = moving_average(values, period).last().copied().flatten()?;

    if average == 0.0 {
        return None;
    }
    Some(latest / average)
}
