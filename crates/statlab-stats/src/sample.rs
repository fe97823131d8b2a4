//! Parsing whitespace-delimited numeric input into a bounded sample.

use serde::Serialize;

/// Errors produced when parsing text into a [`Sample`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SampleError {
    /// The input contained no parseable numeric values.
    #[display("no numeric values found in input")]
    Empty,
    /// The input contained more values than a sample may hold.
    #[display("sample has {len} values, exceeding the {max}-value limit")]
    TooLarge { len: usize, max: usize },
}

/// An ordered sample of finite real numbers.
///
/// Samples are created fresh for each calculation and never persisted. Input
/// is whitespace-delimited text; tokens that do not parse as finite numbers
/// are discarded silently, matching forgiving form-input behavior. A sample
/// holds at most [`Sample::MAX_LEN`] values.
///
/// # Examples
///
/// ```
/// use statlab_stats::sample::Sample;
///
/// let sample = Sample::parse("3 1 4 1 5 9 2.5").unwrap();
/// assert_eq!(sample.len(), 7);
/// assert_eq!(sample.sorted()[0], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Maximum number of values a sample may hold.
    pub const MAX_LEN: usize = 100;

    /// Parses whitespace-delimited text into a sample.
    ///
    /// Tokens that fail to parse as numbers, and numbers that are not finite
    /// (NaN, infinities), are dropped without error. The parse fails only
    /// when nothing numeric remains or the value count exceeds
    /// [`Self::MAX_LEN`].
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::sample::Sample;
    ///
    /// let sample = Sample::parse("10 20 n/a 30").unwrap();
    /// assert_eq!(sample.values(), &[10.0, 20.0, 30.0]);
    ///
    /// assert!(Sample::parse("only words here").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, SampleError> {
        let values = text
            .split_whitespace()
            .filter_map(|token| token.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        Self::from_values(values)
    }

    /// Builds a sample from already-numeric values, applying the same bounds
    /// as [`Self::parse`]. Non-finite values are discarded.
    pub fn from_values<I>(values: I) -> Result<Self, SampleError>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        if values.is_empty() {
            return Err(SampleError::Empty);
        }
        if values.len() > Self::MAX_LEN {
            return Err(SampleError::TooLarge {
                len: values.len(),
                max: Self::MAX_LEN,
            });
        }
        Ok(Self { values })
    }

    /// The values in their original input order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// A copy of the values sorted ascending.
    #[must_use]
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Number of values in the sample. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for slice-like API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
