use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, ContinuousCDF, Normal as StatrsNormal};

/// Smallest standard deviation a [`Normal`] will carry.
///
/// σ is floored here at construction so z-score conversion never divides by
/// zero.
pub const MIN_STD_DEV: f64 = 1e-9;

/// Maximum number of points sampled when tracing the density curve.
pub const MAX_CURVE_POINTS: usize = 30;

/// How a normal-probability question is phrased.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalQuery {
    /// `P(X <= x)`
    LeftTail(f64),
    /// `P(X >= x)`
    RightTail(f64),
    /// `P(a <= X <= b)`; bound order is normalized.
    Between(f64, f64),
    /// `P(X <= a or X >= b)`, the complement of `Between`.
    Outside(f64, f64),
}

/// A normal distribution with mean μ and standard deviation σ.
///
/// # Examples
///
/// ```
/// use statlab_dist::{Normal, NormalQuery};
///
/// let standard = Normal::new(0.0, 1.0);
/// assert_eq!(standard.probability(NormalQuery::LeftTail(0.0)), 0.5);
/// assert_eq!(standard.z_score(0.0), 0.0);
/// assert_eq!(standard.value_at(0.5), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Creates a normal distribution, flooring σ at [`MIN_STD_DEV`].
    ///
    /// A non-finite mean is treated as 0 so the wrapped primitive is always
    /// well-formed.
    #[must_use]
    pub fn new(mean: f64, std_dev: f64) -> Self {
        let mean = if mean.is_finite() { mean } else { 0.0 };
        let std_dev = if std_dev.is_finite() {
            std_dev.max(MIN_STD_DEV)
        } else {
            MIN_STD_DEV
        };
        Self { mean, std_dev }
    }

    /// The mean μ.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The standard deviation σ (already floored).
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    fn dist(&self) -> StatrsNormal {
        StatrsNormal::new(self.mean, self.std_dev).expect("floored σ is always positive")
    }

    /// The density at `x`.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        self.dist().pdf(x)
    }

    /// `P(X <= x)`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        self.dist().cdf(x)
    }

    /// The value whose cumulative probability is `p`.
    ///
    /// `p` is clamped into the open unit interval so the inverse CDF stays
    /// finite.
    #[must_use]
    pub fn value_at(&self, p: f64) -> f64 {
        let p = if p.is_finite() {
            p.clamp(f64::EPSILON, 1.0 - f64::EPSILON)
        } else {
            0.5
        };
        self.dist().inverse_cdf(p)
    }

    /// Standardizes a raw value: `z = (x - μ) / σ`.
    #[must_use]
    pub fn z_score(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }

    /// Converts a z-score back to a raw value: `x = μ + zσ`.
    #[must_use]
    pub fn value_from_z(&self, z: f64) -> f64 {
        self.mean + z * self.std_dev
    }

    /// Answers a probability query via CDF-difference logic.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_dist::{Normal, NormalQuery};
    ///
    /// let dist = Normal::new(100.0, 15.0);
    /// let inside = dist.probability(NormalQuery::Between(85.0, 115.0));
    /// let outside = dist.probability(NormalQuery::Outside(85.0, 115.0));
    /// assert!((inside + outside - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn probability(&self, query: NormalQuery) -> f64 {
        match query {
            NormalQuery::LeftTail(x) => self.cdf(x),
            NormalQuery::RightTail(x) => 1.0 - self.cdf(x),
            NormalQuery::Between(a, b) => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                self.cdf(hi) - self.cdf(lo)
            }
            NormalQuery::Outside(a, b) => 1.0 - self.probability(NormalQuery::Between(a, b)),
        }
    }

    /// Samples `(x, pdf(x))` pairs across μ ± 4σ for curve display.
    ///
    /// The resolution is capped at [`MAX_CURVE_POINTS`]; fewer than two
    /// points yields an empty curve.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn curve(&self, resolution: usize) -> Vec<(f64, f64)> {
        let resolution = resolution.min(MAX_CURVE_POINTS);
        if resolution < 2 {
            return vec![];
        }
        let start = self.mean - 4.0 * self.std_dev;
        let step = 8.0 * self.std_dev / ((resolution - 1) as f64);
        (0..resolution)
            .map(|i| {
                let x = start + (i as f64) * step;
                (x, self.pdf(x))
            })
            .collect()
    }
}
