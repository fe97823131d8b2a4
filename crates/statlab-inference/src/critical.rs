//! Critical values and p-values from the z and t reference distributions.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Which side(s) of the distribution reject the null hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tail {
    /// Reject in both tails; α is split in half.
    TwoSided,
    /// Reject in the left tail only.
    Left,
    /// Reject in the right tail only.
    Right,
}

/// The reference distribution a test statistic is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceDist {
    /// Standard normal; for proportion tests and mean tests with known
    /// population σ.
    Z,
    /// Student-t with the given degrees of freedom; for mean tests using the
    /// sample standard deviation.
    T { df: f64 },
}

impl ReferenceDist {
    /// `P(X <= x)` under the reference distribution.
    #[must_use]
    pub fn cdf(self, x: f64) -> f64 {
        match self {
            Self::Z => standard_normal().cdf(x),
            Self::T { df } => students_t(df).cdf(x),
        }
    }

    /// The quantile at cumulative probability `p`.
    #[must_use]
    pub fn inverse_cdf(self, p: f64) -> f64 {
        match self {
            Self::Z => standard_normal().inverse_cdf(p),
            Self::T { df } => students_t(df).inverse_cdf(p),
        }
    }
}

fn standard_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("standard normal parameters are valid")
}

fn students_t(df: f64) -> StudentsT {
    StudentsT::new(0.0, 1.0, df).expect("degrees of freedom are validated upstream")
}

/// The rejection boundary for a test at significance level `alpha`.
///
/// One-tailed tests place the whole α in their tail; two-tailed tests use
/// α/2 and report the negative-magnitude branch, relying on symmetry.
///
/// # Examples
///
/// ```
/// use statlab_inference::{ReferenceDist, Tail, critical_value};
///
/// let c = critical_value(ReferenceDist::Z, Tail::TwoSided, 0.05);
/// assert!((c + 1.96).abs() < 1e-2);
/// ```
#[must_use]
pub fn critical_value(dist: ReferenceDist, tail: Tail, alpha: f64) -> f64 {
    match tail {
        Tail::TwoSided => dist.inverse_cdf(alpha / 2.0),
        Tail::Left => dist.inverse_cdf(alpha),
        Tail::Right => dist.inverse_cdf(1.0 - alpha),
    }
}

/// The p-value of an observed statistic under the reference distribution.
#[must_use]
pub fn p_value(dist: ReferenceDist, tail: Tail, statistic: f64) -> f64 {
    match tail {
        Tail::TwoSided => 2.0 * (1.0 - dist.cdf(statistic.abs())),
        Tail::Right => 1.0 - dist.cdf(statistic),
        Tail::Left => dist.cdf(statistic),
    }
}
