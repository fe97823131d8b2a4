//! Probability-distribution engines for the statlab calculators.
//!
//! Thin, parameter-validating wrappers over the `statrs` distribution
//! primitives:
//!
//! - **Binomial**: PMF/CDF queries plus closed-form moments (np, np(1 − p))
//! - **Poisson**: PMF/CDF queries with degenerate-rate handling; mean = variance = λ
//! - **Normal**: tail/interval probabilities, inverse CDF, z-score conversion
//!
//! All types are plain parameter records; the underlying `statrs`
//! distribution is rebuilt per call, so every query is a pure function of the
//! current parameters.
//!
//! # Examples
//!
//! ```
//! use statlab_dist::{Binomial, ProbabilityQuery};
//!
//! let coin_flips = Binomial::new(10, 0.5);
//! let p = coin_flips.probability(5, ProbabilityQuery::Exact);
//! assert!((p - 0.2461).abs() < 1e-4);
//! assert_eq!(coin_flips.mean(), 5.0);
//! ```

pub use self::{
    binomial::Binomial,
    normal::{MAX_CURVE_POINTS, MIN_STD_DEV, Normal, NormalQuery},
    poisson::Poisson,
    query::ProbabilityQuery,
};

mod binomial;
mod normal;
mod poisson;
mod query;
