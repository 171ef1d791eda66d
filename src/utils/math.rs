//! Mathematical utility functions for supply and burn statistics
//!
//! Percentage helpers with zero-division handling and a trailing moving
//! average used for daily burn smoothing.

/// Calculate percentage safely, returning 0.0 if total is zero or not finite.
///
/// # Arguments
/// * `part` - The numerator (portion of the total)
/// * `total` - The denominator (total value)
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(15.0, 1000.0), 1.5);
/// assert_eq!(safe_percentage(50.0, 0.0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        0.0
    } else {
        (part / total) * 100.0
    }
}

/// Trailing simple moving average
///
/// Each output element averages the current value and up to `window - 1`
/// preceding values, so the first few points average over what is available.
/// A window of 0 is treated as 1.
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::math::moving_average;
///
/// assert_eq!(moving_average(&[2.0, 4.0, 6.0, 8.0], 2), vec![2.0, 3.0, 5.0, 7.0]);
/// ```
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let span = (i + 1).min(window);
            values[i + 1 - span..=i].iter().sum::<f64>() / span as f64
        })
        .collect()
}
