//! One-sample hypothesis tests for proportions and means.

use serde::Serialize;

use crate::critical::{ReferenceDist, Tail, critical_value, p_value};

/// Errors for unusable test configurations.
///
/// These abort the calculation before any arithmetic happens; degenerate but
/// in-domain inputs are handled by the formulas instead.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TestError {
    /// α must lie strictly between 0 and 1.
    #[display("significance level must be in (0, 1), got {alpha}")]
    InvalidAlpha { alpha: f64 },
    /// The sample size was too small for the chosen test.
    #[display("sample size {size} is too small, need at least {min}")]
    SampleTooSmall { size: u64, min: u64 },
    /// A hypothesized proportion outside (0, 1) has no standard error.
    #[display("hypothesized proportion must be in (0, 1), got {value}")]
    InvalidProportion { value: f64 },
    /// An observed proportion outside [0, 1] is not a proportion.
    #[display("sample proportion must be in [0, 1], got {value}")]
    ObservedProportionOutOfRange { value: f64 },
    /// Standard deviations must be positive and finite.
    #[display("standard deviation must be a positive number, got {value}")]
    NonPositiveDeviation { value: f64 },
}

/// Which standard deviation a mean test has available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Deviation {
    /// Known population σ; the statistic follows a z distribution.
    Population(f64),
    /// Sample s; the statistic follows a t distribution with n − 1 degrees
    /// of freedom.
    Sample(f64),
}

/// The full outcome of a hypothesis test.
///
/// `reject_null` is derived from the critical-value comparison and always
/// agrees with comparing `p_value` against `alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestReport {
    /// The standardized test statistic.
    pub statistic: f64,
    /// The rejection boundary (negative-magnitude branch when two-sided).
    pub critical_value: f64,
    /// Probability of a statistic at least this extreme under H0.
    pub p_value: f64,
    /// The significance level the test was run at.
    pub alpha: f64,
    /// Tail direction of the test.
    pub tail: Tail,
    /// The reference distribution used.
    pub reference: ReferenceDist,
    /// Whether H0 is rejected at `alpha`.
    pub reject_null: bool,
    /// `point estimate ± two-tailed critical magnitude × SE` at the same α.
    pub confidence_interval: (f64, f64),
}

fn validate_alpha(alpha: f64) -> Result<(), TestError> {
    if alpha.is_finite() && 0.0 < alpha && alpha < 1.0 {
        Ok(())
    } else {
        Err(TestError::InvalidAlpha { alpha })
    }
}

fn decide(tail: Tail, statistic: f64, critical: f64) -> bool {
    match tail {
        Tail::TwoSided => statistic.abs() > critical.abs(),
        Tail::Left => statistic < critical,
        Tail::Right => statistic > critical,
    }
}

fn build_report(
    reference: ReferenceDist,
    tail: Tail,
    alpha: f64,
    statistic: f64,
    point_estimate: f64,
    standard_error: f64,
) -> TestReport {
    let critical = critical_value(reference, tail, alpha);
    let p = p_value(reference, tail, statistic);
    let margin = critical_value(reference, Tail::TwoSided, alpha).abs() * standard_error;
    TestReport {
        statistic,
        critical_value: critical,
        p_value: p,
        alpha,
        tail,
        reference,
        reject_null: decide(tail, statistic, critical),
        confidence_interval: (point_estimate - margin, point_estimate + margin),
    }
}

/// A one-sample z-test for a proportion.
///
/// # Examples
///
/// ```
/// use statlab_inference::{ProportionTest, Tail};
///
/// let test = ProportionTest {
///     sample_prop: 0.56,
///     hypothesized: 0.5,
///     sample_size: 200,
///     tail: Tail::Right,
///     alpha: 0.05,
/// };
/// let report = test.run().unwrap();
/// assert!((report.statistic - 1.697).abs() < 1e-3);
/// assert!(report.reject_null);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProportionTest {
    /// Observed sample proportion p̂.
    pub sample_prop: f64,
    /// Hypothesized proportion p₀.
    pub hypothesized: f64,
    /// Number of observations.
    pub sample_size: u64,
    /// Tail direction.
    pub tail: Tail,
    /// Significance level.
    pub alpha: f64,
}

impl ProportionTest {
    /// Runs the test.
    ///
    /// The statistic is `(p̂ - p₀) / sqrt(p₀(1 - p₀) / n)`.
    #[expect(clippy::cast_precision_loss)]
    pub fn run(&self) -> Result<TestReport, TestError> {
        validate_alpha(self.alpha)?;
        if self.sample_size == 0 {
            return Err(TestError::SampleTooSmall {
                size: 0,
                min: 1,
            });
        }
        if !(self.hypothesized.is_finite() && 0.0 < self.hypothesized && self.hypothesized < 1.0) {
            return Err(TestError::InvalidProportion {
                value: self.hypothesized,
            });
        }
        if !(self.sample_prop.is_finite() && (0.0..=1.0).contains(&self.sample_prop)) {
            return Err(TestError::ObservedProportionOutOfRange {
                value: self.sample_prop,
            });
        }

        let n = self.sample_size as f64;
        let standard_error = (self.hypothesized * (1.0 - self.hypothesized) / n).sqrt();
        let statistic = (self.sample_prop - self.hypothesized) / standard_error;
        Ok(build_report(
            ReferenceDist::Z,
            self.tail,
            self.alpha,
            statistic,
            self.sample_prop,
            standard_error,
        ))
    }
}

/// A one-sample test for a mean, z or t depending on [`Deviation`].
///
/// # Examples
///
/// ```
/// use statlab_inference::{Deviation, MeanTest, ReferenceDist, Tail};
///
/// let test = MeanTest {
///     sample_mean: 9.2,
///     hypothesized: 10.0,
///     sample_size: 25,
///     tail: Tail::Left,
///     alpha: 0.01,
///     deviation: Deviation::Sample(1.8),
/// };
/// let report = test.run().unwrap();
/// assert_eq!(report.reference, ReferenceDist::T { df: 24.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanTest {
    /// Observed sample mean x̄.
    pub sample_mean: f64,
    /// Hypothesized mean μ₀.
    pub hypothesized: f64,
    /// Number of observations.
    pub sample_size: u64,
    /// Tail direction.
    pub tail: Tail,
    /// Significance level.
    pub alpha: f64,
    /// Known population σ (z) or sample s (t).
    pub deviation: Deviation,
}

impl MeanTest {
    /// Runs the test.
    ///
    /// The statistic is `(x̄ - μ₀) / (sd / sqrt(n))`. A sample standard
    /// deviation requires n ≥ 2 so the t distribution has at least one
    /// degree of freedom.
    #[expect(clippy::cast_precision_loss)]
    pub fn run(&self) -> Result<TestReport, TestError> {
        validate_alpha(self.alpha)?;
        let (sd, reference, min_size) = match self.deviation {
            Deviation::Population(sigma) => (sigma, ReferenceDist::Z, 1),
            Deviation::Sample(s) => (
                s,
                ReferenceDist::T {
                    df: (self.sample_size as f64) - 1.0,
                },
                2,
            ),
        };
        if self.sample_size < min_size {
            return Err(TestError::SampleTooSmall {
                size: self.sample_size,
                min: min_size,
            });
        }
        if !(sd.is_finite() && sd > 0.0) {
            return Err(TestError::NonPositiveDeviation { value: sd });
        }

        let n = self.sample_size as f64;
        let standard_error = sd / n.sqrt();
        let statistic = (self.sample_mean - self.hypothesized) / standard_error;
        Ok(build_report(
            reference,
            self.tail,
            self.alpha,
            statistic,
            self.sample_mean,
            standard_error,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_mean_test(sample_mean: f64, tail: Tail, alpha: f64) -> MeanTest {
        MeanTest {
            sample_mean,
            hypothesized: 100.0,
            sample_size: 36,
            tail,
            alpha,
            deviation: Deviation::Population(12.0),
        }
    }

    #[test]
    fn test_z_statistic_formula() {
        // (106 - 100) / (12 / 6) = 3.0
        let report = z_mean_test(106.0, Tail::TwoSided, 0.05).run().unwrap();
        assert!((report.statistic - 3.0).abs() < 1e-12);
        assert!(report.reject_null);
    }

    #[test]
    fn test_decision_paths_agree_across_parameter_grid() {
        // The critical-value decision and the p-value decision must be the
        // same everywhere, for every tail and significance level.
        for &tail in &[Tail::TwoSided, Tail::Left, Tail::Right] {
            for &alpha in &[0.01, 0.05, 0.10] {
                for &mean in &[90.0, 96.5, 99.0, 100.0, 101.5, 104.0, 110.0] {
                    let report = z_mean_test(mean, tail, alpha).run().unwrap();
                    assert_eq!(
                        report.reject_null,
                        report.p_value < alpha,
                        "mismatch for tail {tail:?}, alpha {alpha}, mean {mean}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_t_test_uses_n_minus_one_degrees_of_freedom() {
        let test = MeanTest {
            sample_mean: 4.9,
            hypothesized: 5.0,
            sample_size: 16,
            tail: Tail::TwoSided,
            alpha: 0.05,
            deviation: Deviation::Sample(0.3),
        };
        let report = test.run().unwrap();
        assert_eq!(report.reference, ReferenceDist::T { df: 15.0 });
        // (4.9 - 5.0) / (0.3 / 4) = -4/3
        assert!((report.statistic + 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_proportion_statistic_formula() {
        let test = ProportionTest {
            sample_prop: 0.44,
            hypothesized: 0.5,
            sample_size: 100,
            tail: Tail::TwoSided,
            alpha: 0.05,
        };
        let report = test.run().unwrap();
        // (0.44 - 0.5) / sqrt(0.25 / 100) = -1.2
        assert!((report.statistic + 1.2).abs() < 1e-12);
        assert!(!report.reject_null);
        assert!(report.p_value > 0.05);
    }

    #[test]
    fn test_confidence_interval_brackets_the_point_estimate() {
        let report = z_mean_test(103.0, Tail::TwoSided, 0.05).run().unwrap();
        let (lo, hi) = report.confidence_interval;
        assert!(lo < 103.0 && 103.0 < hi);
        // 103 ± 1.96 * 2
        assert!((lo - 99.08).abs() < 1e-2);
        assert!((hi - 106.92).abs() < 1e-2);
    }

    #[test]
    fn test_one_tailed_decisions_are_signed() {
        // A mean far above the hypothesized value rejects right, never left.
        let right = z_mean_test(106.0, Tail::Right, 0.05).run().unwrap();
        assert!(right.reject_null);
        let left = z_mean_test(106.0, Tail::Left, 0.05).run().unwrap();
        assert!(!left.reject_null);
    }

    #[test]
    fn test_report_serializes_with_kebab_case_tags() {
        let report = z_mean_test(103.0, Tail::TwoSided, 0.05).run().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tail"], "two-sided");
        assert_eq!(json["reference"], "z");
        assert!(json["reject_null"].is_boolean());
    }

    #[test]
    fn test_invalid_configurations_are_rejected() {
        assert!(matches!(
            z_mean_test(100.0, Tail::TwoSided, 0.0).run(),
            Err(TestError::InvalidAlpha { .. })
        ));
        assert!(matches!(
            z_mean_test(100.0, Tail::TwoSided, 1.0).run(),
            Err(TestError::InvalidAlpha { .. })
        ));

        let too_small = MeanTest {
            sample_size: 1,
            deviation: Deviation::Sample(1.0),
            ..z_mean_test(100.0, Tail::TwoSided, 0.05)
        };
        assert!(matches!(
            too_small.run(),
            Err(TestError::SampleTooSmall { size: 1, min: 2 })
        ));

        let bad_sigma = MeanTest {
            deviation: Deviation::Population(0.0),
            ..z_mean_test(100.0, Tail::TwoSided, 0.05)
        };
        assert!(matches!(
            bad_sigma.run(),
            Err(TestError::NonPositiveDeviation { .. })
        ));

        let bad_p0 = ProportionTest {
            sample_prop: 0.5,
            hypothesized: 1.0,
            sample_size: 50,
            tail: Tail::TwoSided,
            alpha: 0.05,
        };
        assert!(matches!(
            bad_p0.run(),
            Err(TestError::InvalidProportion { .. })
        ));

        let bad_observed = ProportionTest {
            sample_prop: 1.2,
            hypothesized: 0.5,
            sample_size: 50,
            tail: Tail::TwoSided,
            alpha: 0.05,
        };
        assert!(matches!(
            bad_observed.run(),
            Err(TestError::ObservedProportionOutOfRange { .. })
        ));
    }
}
