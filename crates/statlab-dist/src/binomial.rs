use serde::{Deserialize, Serialize};
use statrs::distribution::{Binomial as StatrsBinomial, Discrete, DiscreteCDF};

use crate::ProbabilityQuery;

/// A binomial distribution over a fixed number of independent trials.
///
/// The success probability is clamped into `[0, 1]` at construction, so the
/// wrapped primitive is always well-formed. Moments come from the closed-form
/// relations rather than the library.
///
/// # Examples
///
/// ```
/// use statlab_dist::{Binomial, ProbabilityQuery};
///
/// let dist = Binomial::new(10, 0.5);
/// assert_eq!(dist.mean(), 5.0);
/// assert_eq!(dist.variance(), 2.5);
/// assert_eq!(dist.probability(0, ProbabilityQuery::AtLeast), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Binomial {
    trials: u64,
    success_prob: f64,
}

impl Binomial {
    /// Creates a binomial distribution with `trials` trials and success
    /// probability `success_prob`, clamped into `[0, 1]` (a non-finite
    /// probability is treated as 0).
    #[must_use]
    pub fn new(trials: u64, success_prob: f64) -> Self {
        let success_prob = if success_prob.is_finite() {
            success_prob.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            trials,
            success_prob,
        }
    }

    /// Number of trials.
    #[must_use]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Per-trial success probability.
    #[must_use]
    pub fn success_prob(&self) -> f64 {
        self.success_prob
    }

    fn dist(&self) -> StatrsBinomial {
        StatrsBinomial::new(self.success_prob, self.trials)
            .expect("clamped parameters are always valid")
    }

    /// `P(X = x)`; zero beyond the support.
    #[must_use]
    pub fn pmf(&self, x: u64) -> f64 {
        if x > self.trials {
            return 0.0;
        }
        self.dist().pmf(x)
    }

    /// `P(X <= x)`.
    #[must_use]
    pub fn cdf(&self, x: u64) -> f64 {
        if x >= self.trials {
            return 1.0;
        }
        self.dist().cdf(x)
    }

    /// Answers a probability query about `x` successes.
    ///
    /// At-least is computed as `1 - CDF(x - 1)`, which is exactly 1 at
    /// `x = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_dist::{Binomial, ProbabilityQuery};
    ///
    /// let dist = Binomial::new(4, 0.5);
    /// let exact = dist.probability(2, ProbabilityQuery::Exact);
    /// assert!((exact - 0.375).abs() < 1e-12);
    ///
    /// let at_least = dist.probability(4, ProbabilityQuery::AtLeast);
    /// assert!((at_least - 0.0625).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn probability(&self, x: u64, query: ProbabilityQuery) -> f64 {
        match query {
            ProbabilityQuery::Exact => self.pmf(x),
            ProbabilityQuery::AtMost => self.cdf(x),
            ProbabilityQuery::AtLeast => {
                if x == 0 {
                    1.0
                } else if x > self.trials {
                    0.0
                } else {
                    1.0 - self.cdf(x - 1)
                }
            }
        }
    }

    /// Mean, `np`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.trials as f64 * self.success_prob
    }

    /// Variance, `np(1 - p)`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.mean() * (1.0 - self.success_prob)
    }

    /// Standard deviation, `sqrt(np(1 - p))`.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}
