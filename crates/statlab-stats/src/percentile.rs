//! Percentile and quartile computation over sorted data.

/// Computes a percentile from sorted data by linear interpolation.
///
/// The rank for fraction `p` (0.0 to 1.0) is `p * (n - 1)`. When the rank
/// falls between two data points the result is interpolated linearly between
/// them; when the upper rank would fall past the end of the data, the lower
/// value is returned as-is.
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use statlab_stats::percentile::interpolated_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// // Rank 0.25 * 4 = 1.0 lands exactly on the second value.
/// assert_eq!(interpolated_percentile(&values, 0.25), 2.0);
/// // Rank 0.5 * 4 = 2.0 lands on the middle value.
/// assert_eq!(interpolated_percentile(&values, 0.5), 3.0);
///
/// let values = [10.0, 20.0];
/// // Rank 0.5 * 1 = 0.5 interpolates halfway.
/// assert_eq!(interpolated_percentile(&values, 0.5), 15.0);
/// ```
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn interpolated_percentile(sorted_values: &[f64], fraction: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let rank = fraction.clamp(0.0, 1.0) * ((sorted_values.len() - 1) as f64);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let lower_value = sorted_values[lower];
    if upper >= sorted_values.len() {
        return lower_value;
    }
    let weight = rank - rank.floor();
    lower_value + (sorted_values[upper] - lower_value) * weight
}

/// Computes the first and third quartiles by linear interpolation.
///
/// Returns `(f64::NAN, f64::NAN)` if the input is empty.
///
/// # Examples
///
/// ```
/// use statlab_stats::percentile::quartiles;
///
/// let values = [2.0, 4.0, 6.0, 8.0, 10.0];
/// let (q1, q3) = quartiles(&values);
/// assert_eq!(q1, 4.0);
/// assert_eq!(q3, 8.0);
/// ```
#[must_use]
pub fn quartiles(sorted_values: &[f64]) -> (f64, f64) {
    (
        interpolated_percentile(sorted_values, 0.25),
        interpolated_percentile(sorted_values, 0.75),
    )
}

/// Computes the median using the standard two-case definition.
///
/// For an odd number of values this is the middle value; for an even number
/// it is the mean of the two middle values. Returns `f64::NAN` if the input
/// is empty.
///
/// # Examples
///
/// ```
/// use statlab_stats::percentile::median;
///
/// assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
#[must_use]
pub fn median(sorted_values: &[f64]) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        sorted_values[n / 2]
    } else {
        (sorted_values[n / 2 - 1] + sorted_values[n / 2]) / 2.0
    }
}
