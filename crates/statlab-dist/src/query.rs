use serde::{Deserialize, Serialize};

/// How a discrete probability question is phrased.
///
/// The calculators ask for the probability of exactly `x` successes, at most
/// `x`, or at least `x`. At-least is answered as `1 - CDF(x - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbabilityQuery {
    /// `P(X = x)`
    Exact,
    /// `P(X <= x)`
    AtMost,
    /// `P(X >= x)`
    AtLeast,
}
