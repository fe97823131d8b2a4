//! Probability algebra over a pair of events.

use serde::Serialize;

/// Errors for inconsistent event-probability inputs.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum EventError {
    /// A probability outside [0, 1].
    #[display("{name} must be in [0, 1], got {value}")]
    OutOfRange { name: &'static str, value: f64 },
    /// P(A∩B) cannot exceed either marginal probability.
    #[display("intersection {intersection} exceeds the smaller marginal {bound}")]
    IntersectionTooLarge { intersection: f64, bound: f64 },
    /// Mutually exclusive events cannot have marginals summing past 1.
    #[display("mutually exclusive events sum to {sum}, which exceeds 1")]
    ExclusiveSumExceedsOne { sum: f64 },
}

/// How the two events overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Joint {
    /// The events cannot co-occur; P(A∩B) = 0.
    MutuallyExclusive,
    /// The events co-occur with the given probability.
    Intersection(f64),
}

/// A validated pair of events A and B with their overlap.
///
/// # Examples
///
/// ```
/// use statlab_prob::events::{EventPair, Joint};
///
/// let pair = EventPair::new(0.5, 0.4, Joint::Intersection(0.2)).unwrap();
/// let algebra = pair.algebra();
/// assert!((algebra.union - 0.7).abs() < 1e-12);
/// assert!((algebra.a_given_b - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventPair {
    p_a: f64,
    p_b: f64,
    joint: Joint,
}

/// Every probability the two-event calculator reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventAlgebra {
    /// P(A)
    pub p_a: f64,
    /// P(B)
    pub p_b: f64,
    /// P(A∩B)
    pub intersection: f64,
    /// P(¬A)
    pub complement_a: f64,
    /// P(¬B)
    pub complement_b: f64,
    /// P(A∪B)
    pub union: f64,
    /// P(A|B); 0 when P(B) = 0
    pub a_given_b: f64,
    /// P(B|A); 0 when P(A) = 0
    pub b_given_a: f64,
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<(), EventError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EventError::OutOfRange { name, value })
    }
}

impl EventPair {
    /// Validates and builds an event pair.
    pub fn new(p_a: f64, p_b: f64, joint: Joint) -> Result<Self, EventError> {
        check_unit_interval("P(A)", p_a)?;
        check_unit_interval("P(B)", p_b)?;
        match joint {
            Joint::MutuallyExclusive => {
                if p_a + p_b > 1.0 {
                    return Err(EventError::ExclusiveSumExceedsOne { sum: p_a + p_b });
                }
            }
            Joint::Intersection(p_ab) => {
                check_unit_interval("P(A∩B)", p_ab)?;
                let bound = p_a.min(p_b);
                if p_ab > bound {
                    return Err(EventError::IntersectionTooLarge {
                        intersection: p_ab,
                        bound,
                    });
                }
            }
        }
        Ok(Self { p_a, p_b, joint })
    }

    /// P(A∩B), resolving the mutually-exclusive case to 0.
    #[must_use]
    pub fn intersection(&self) -> f64 {
        match self.joint {
            Joint::MutuallyExclusive => 0.0,
            Joint::Intersection(p_ab) => p_ab,
        }
    }

    /// Derives the full set of probabilities via the standard identities.
    ///
    /// The union uses a simple sum for mutually exclusive events and
    /// inclusion–exclusion otherwise; conditionals with a zero denominator
    /// answer 0.
    #[must_use]
    pub fn algebra(&self) -> EventAlgebra {
        let intersection = self.intersection();
        let union = match self.joint {
            Joint::MutuallyExclusive => self.p_a + self.p_b,
            Joint::Intersection(p_ab) => self.p_a + self.p_b - p_ab,
        };
        let a_given_b = if self.p_b > 0.0 {
            intersection / self.p_b
        } else {
            0.0
        };
        let b_given_a = if self.p_a > 0.0 {
            intersection / self.p_a
        } else {
            0.0
        };
        EventAlgebra {
            p_a: self.p_a,
            p_b: self.p_b,
            intersection,
            complement_a: 1.0 - self.p_a,
            complement_b: 1.0 - self.p_b,
            union,
            a_given_b,
            b_given_a,
        }
    }
}
