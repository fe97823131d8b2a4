//! Combinatorics, probability rules, and the dice simulator.
//!
//! The probability-tools side of statlab:
//!
//! - [`counting`]: factorials, permutations, and combinations, with and
//!   without replacement
//! - [`events`]: two-event probability algebra (complements, unions,
//!   conditionals)
//! - [`dice`]: a seedable dice simulator with a rolling history window
//!
//! # Examples
//!
//! ```
//! use statlab_prob::counting;
//!
//! assert_eq!(counting::combinations(5, 2), 10.0);
//! assert_eq!(counting::permutations(5, 2), 20.0);
//! ```

pub mod counting;
pub mod dice;
pub mod events;
