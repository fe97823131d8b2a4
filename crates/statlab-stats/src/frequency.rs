//! Frequency-table binning for histogram display.

use std::ops::Range;

use serde::Serialize;

/// Errors produced when constructing a [`FrequencyTable`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum FrequencyError {
    /// The class width was zero, negative, or not finite.
    #[display("class width must be a positive number, got {width}")]
    NonPositiveWidth { width: f64 },
    /// No classes were requested.
    #[display("at least one class is required")]
    NoClasses,
    /// There were no values to tabulate.
    #[display("cannot tabulate an empty dataset")]
    EmptyInput,
}

/// A single class (bin) in a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyClass {
    /// The value range covered by this class (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// Number of values falling in this class.
    pub count: u64,
    /// `count` as a fraction of the total.
    pub relative: f64,
    /// Running total of counts up to and including this class.
    pub cumulative: u64,
    /// Running total as a fraction of the total.
    pub cumulative_relative: f64,
}

/// A frequency distribution over user-chosen classes.
///
/// Classes start at a caller-supplied lower boundary and advance by a fixed
/// class width. Values below the first boundary clip into the first class and
/// values at or beyond the last boundary clip into the last class, so every
/// value is counted exactly once.
///
/// # Examples
///
/// ```
/// use statlab_stats::frequency::FrequencyTable;
///
/// let values = [2.0, 3.0, 7.0, 12.0, 14.0, 25.0];
/// let table = FrequencyTable::new(&values, 0.0, 5.0, 4).unwrap();
///
/// let counts: Vec<u64> = table.classes().iter().map(|c| c.count).collect();
/// // [0,5): 2 and 3; [5,10): 7; [10,15): 12 and 14; [15,20): 25 clips in.
/// assert_eq!(counts, vec![2, 1, 2, 1]);
/// assert_eq!(table.total(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    classes: Vec<FrequencyClass>,
    total: u64,
}

impl FrequencyTable {
    /// Tabulates `values` into `num_classes` classes of `class_width` each,
    /// starting at `lower_boundary`.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn new(
        values: &[f64],
        lower_boundary: f64,
        class_width: f64,
        num_classes: usize,
    ) -> Result<Self, FrequencyError> {
        if !(class_width.is_finite() && class_width > 0.0) {
            return Err(FrequencyError::NonPositiveWidth { width: class_width });
        }
        if num_classes == 0 {
            return Err(FrequencyError::NoClasses);
        }
        if values.is_empty() {
            return Err(FrequencyError::EmptyInput);
        }

        let mut counts = vec![0_u64; num_classes];
        for &value in values {
            let position = (value - lower_boundary) / class_width;
            // Out-of-range values clip into the edge classes.
            let idx = if position < 0.0 {
                0
            } else {
                (position.floor() as usize).min(num_classes - 1)
            };
            counts[idx] += 1;
        }

        let total = values.len() as u64;
        let mut cumulative = 0_u64;
        let classes = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                cumulative += count;
                let start = lower_boundary + (i as f64) * class_width;
                FrequencyClass {
                    range: start..start + class_width,
                    count,
                    relative: count as f64 / total as f64,
                    cumulative,
                    cumulative_relative: cumulative as f64 / total as f64,
                }
            })
            .collect();

        Ok(Self { classes, total })
    }

    /// The classes in ascending boundary order.
    #[must_use]
    pub fn classes(&self) -> &[FrequencyClass] {
        &self.classes
    }

    /// Total number of tabulated values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }
}
