//! Summary measures for a single numeric sample.

use serde::Serialize;

use crate::percentile;

/// Descriptive statistics summarizing a dataset.
///
/// Contains the measures of center, dispersion, and spread reported by the
/// descriptive-statistics calculator, including the quartile-based outlier
/// fences (1.5 × IQR rule).
///
/// # Examples
///
/// ```
/// use statlab_stats::descriptive::DescriptiveSummary;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let summary = DescriptiveSummary::new(values).unwrap();
/// assert_eq!(summary.min, 1.0);
/// assert_eq!(summary.range, 4.0);
/// assert_eq!(summary.variance, 2.5);
/// assert_eq!(summary.iqr, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveSummary {
    /// Number of values in the dataset.
    pub count: usize,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// The range, `max - min`.
    pub range: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median (two-case even/odd definition).
    pub median: f64,
    /// The sample variance (n − 1 denominator; 0.0 for a single value).
    pub variance: f64,
    /// The sample standard deviation.
    pub std_dev: f64,
    /// First quartile, by linear interpolation.
    pub q1: f64,
    /// Third quartile, by linear interpolation.
    pub q3: f64,
    /// Interquartile range, `q3 - q1`.
    pub iqr: f64,
    /// Lower outlier fence, `q1 - 1.5 * iqr`.
    pub lower_fence: f64,
    /// Upper outlier fence, `q3 + 1.5 * iqr`.
    pub upper_fence: f64,
}

impl DescriptiveSummary {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// The values are collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveSummary)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::descriptive::DescriptiveSummary;
    ///
    /// let summary = DescriptiveSummary::new([4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.median, 2.5);
    /// assert!(DescriptiveSummary::new([]).is_none());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Use this when you already hold sorted data to skip the sorting step.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().copied().sum::<f64>() / n;
        let median = percentile::median(sorted_values);
        // Sample variance; a single observation carries no spread.
        let variance = if count < 2 {
            0.0
        } else {
            sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        };
        let std_dev = variance.sqrt();
        let (q1, q3) = percentile::quartiles(sorted_values);
        let iqr = q3 - q1;

        Some(Self {
            count,
            min,
            max,
            range: max - min,
            mean,
            median,
            variance,
            std_dev,
            q1,
            q3,
            iqr,
            lower_fence: q1 - 1.5 * iqr,
            upper_fence: q3 + 1.5 * iqr,
        })
    }

    /// Returns the values at or beyond the outlier fences.
    ///
    /// A value is flagged when it is at least `q3 + 1.5 * iqr` or at most
    /// `q1 - 1.5 * iqr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::descriptive::DescriptiveSummary;
    ///
    /// let values = [1.0, 2.0, 3.0, 4.0, 50.0];
    /// let summary = DescriptiveSummary::new(values).unwrap();
    /// assert_eq!(summary.outliers(&values), vec![50.0]);
    /// ```
    #[must_use]
    pub fn outliers(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .copied()
            .filter(|&v| v <= self.lower_fence || v >= self.upper_fence)
            .collect()
    }

    /// The five-number summary `(min, q1, median, q3, max)` for box plots.
    #[must_use]
    pub fn five_number_summary(&self) -> (f64, f64, f64, f64, f64) {
        (self.min, self.q1, self.median, self.q3, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_yields_none() {
        assert!(DescriptiveSummary::new([]).is_none());
        assert!(DescriptiveSummary::from_sorted(&[]).is_none());
    }

    #[test]
    fn test_single_value_dataset() {
        let summary = DescriptiveSummary::new([42.0]).unwrap();
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.max, 42.0);
        assert_eq!(summary.range, 0.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.iqr, 0.0);
    }

    #[test]
    fn test_sample_variance_uses_n_minus_one() {
        // Squared deviations from the mean (3.0) sum to 10; 10 / 4 = 2.5.
        let summary = DescriptiveSummary::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(summary.variance, 2.5);
        assert!((summary.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_median_even_and_odd() {
        let odd = DescriptiveSummary::new([1.0, 9.0, 5.0]).unwrap();
        assert_eq!(odd.median, 5.0);
        let even = DescriptiveSummary::new([1.0, 9.0, 5.0, 3.0]).unwrap();
        assert_eq!(even.median, 4.0);
    }

    #[test]
    fn test_skewed_sample_flags_upper_tail_outliers() {
        let values = [
            1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 5.0, 5.0, 6.0, 6.0, 7.0,
            8.0, 9.0, 15.0, 20.0, 25.0, 30.0,
        ];
        let summary = DescriptiveSummary::new(values).unwrap();
        assert!(summary.q3 > summary.q1);

        let outliers = summary.outliers(&values);
        // Every value at or beyond the upper fence must be flagged,
        // including the extreme tail values.
        for v in values {
            assert_eq!(
                outliers.contains(&v),
                v >= summary.upper_fence || v <= summary.lower_fence
            );
        }
        assert!(outliers.contains(&25.0));
        assert!(outliers.contains(&30.0));
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let values = [3.5, 1.25, 9.75, 2.5];
        let first = DescriptiveSummary::new(values).unwrap();
        let second = DescriptiveSummary::new(values).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_five_number_summary_ordering() {
        let summary = DescriptiveSummary::new([8.0, 2.0, 6.0, 4.0, 10.0]).unwrap();
        let (min, q1, med, q3, max) = summary.five_number_summary();
        assert!(min <= q1 && q1 <= med && med <= q3 && q3 <= max);
    }

    #[test]
    fn test_serializes_to_json() {
        let summary = DescriptiveSummary::new([1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["mean"], 2.0);
    }
}
