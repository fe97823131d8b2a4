//! Hypothesis-test engine for the statlab calculators.
//!
//! Supports one-sample tests for a proportion or a mean, against a z or
//! Student-t reference distribution:
//!
//! - test statistic from the standard `(observed - hypothesized) / SE` form
//! - critical value from the distribution inverse at α (or α/2 two-tailed)
//! - p-value per tail direction
//! - reject/fail-to-reject decision, consistent between the critical-value
//!   and p-value paths
//! - confidence interval from the two-tailed critical magnitude
//!
//! # Examples
//!
//! ```
//! use statlab_inference::{MeanTest, Deviation, Tail};
//!
//! let test = MeanTest {
//!     sample_mean: 52.1,
//!     hypothesized: 50.0,
//!     sample_size: 40,
//!     tail: Tail::TwoSided,
//!     alpha: 0.05,
//!     deviation: Deviation::Population(6.0),
//! };
//! let report = test.run().unwrap();
//! assert_eq!(report.reject_null, report.p_value < 0.05);
//! ```

pub use self::{
    critical::{ReferenceDist, Tail, critical_value, p_value},
    test::{Deviation, MeanTest, ProportionTest, TestError, TestReport},
};

mod critical;
mod test;
