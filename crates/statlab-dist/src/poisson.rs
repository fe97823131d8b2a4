use serde::{Deserialize, Serialize};
use statrs::distribution::{Discrete, DiscreteCDF, Poisson as StatrsPoisson};

use crate::ProbabilityQuery;

/// A Poisson distribution with rate parameter λ.
///
/// A degenerate rate (λ ≤ 0 or non-finite) is accepted and answers every
/// probability query with 0 instead of erroring; moments report the rate
/// as given.
///
/// # Examples
///
/// ```
/// use statlab_dist::{Poisson, ProbabilityQuery};
///
/// let arrivals = Poisson::new(5.0);
/// assert!((arrivals.pmf(5) - 0.1755).abs() < 1e-4);
/// assert_eq!(arrivals.mean(), arrivals.variance());
/// assert_eq!(arrivals.probability(0, ProbabilityQuery::AtLeast), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Poisson {
    rate: f64,
}

impl Poisson {
    /// Creates a Poisson distribution with the given rate.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// The rate parameter λ.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Whether the rate defines a proper distribution.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.rate.is_finite() && self.rate > 0.0)
    }

    fn dist(&self) -> StatrsPoisson {
        StatrsPoisson::new(self.rate).expect("degenerate rates are rejected before construction")
    }

    /// `P(X = x)`; 0 for a degenerate rate.
    #[must_use]
    pub fn pmf(&self, x: u64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        self.dist().pmf(x)
    }

    /// `P(X <= x)`; 0 for a degenerate rate.
    #[must_use]
    pub fn cdf(&self, x: u64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        self.dist().cdf(x)
    }

    /// Answers a probability query about `x` events.
    ///
    /// At-least is computed as `1 - CDF(x - 1)`; `P(X >= 0)` is exactly 1 for
    /// any proper rate.
    #[must_use]
    pub fn probability(&self, x: u64, query: ProbabilityQuery) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        match query {
            ProbabilityQuery::Exact => self.pmf(x),
            ProbabilityQuery::AtMost => self.cdf(x),
            ProbabilityQuery::AtLeast => {
                if x == 0 {
                    1.0
                } else {
                    1.0 - self.cdf(x - 1)
                }
            }
        }
    }

    /// Mean, λ.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.rate
    }

    /// Variance, λ.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.rate
    }

    /// Standard deviation, √λ (0 for a degenerate rate).
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.rate.max(0.0).sqrt()
    }
}
