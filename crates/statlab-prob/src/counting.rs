//! Closed-form counting: factorials, permutations, combinations.
//!
//! All counts are `f64`-valued (backed by `statrs::function::factorial`), so
//! the results stay usable for the slider-bounded inputs the calculators
//! accept without overflowing an integer type. Choosing more items than are
//! available (without replacement) counts zero ways by definition.

/// `n!`
///
/// # Examples
///
/// ```
/// use statlab_prob::counting::factorial;
///
/// assert_eq!(factorial(0), 1.0);
/// assert_eq!(factorial(5), 120.0);
/// ```
#[must_use]
pub fn factorial(n: u64) -> f64 {
    statrs::function::factorial::factorial(n)
}

/// Ordered selections of `r` from `n` distinct items: `n! / (n - r)!`.
///
/// Returns 0 when `r > n`.
///
/// # Examples
///
/// ```
/// use statlab_prob::counting::permutations;
///
/// assert_eq!(permutations(10, 3), 720.0);
/// assert_eq!(permutations(3, 10), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn permutations(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    ((n - r + 1)..=n).map(|k| k as f64).product()
}

/// Unordered selections of `r` from `n` distinct items: `C(n, r)`.
///
/// Returns 0 when `r > n`.
///
/// # Examples
///
/// ```
/// use statlab_prob::counting::combinations;
///
/// assert_eq!(combinations(10, 3), 120.0);
/// assert_eq!(combinations(3, 10), 0.0);
/// ```
#[must_use]
pub fn combinations(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    statrs::function::factorial::binomial(n, r)
}

/// Ordered selections with replacement: `n^r`.
///
/// # Examples
///
/// ```
/// use statlab_prob::counting::permutations_with_replacement;
///
/// assert_eq!(permutations_with_replacement(6, 2), 36.0);
/// assert_eq!(permutations_with_replacement(0, 0), 1.0);
/// ```
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn permutations_with_replacement(n: u64, r: u64) -> f64 {
    (n as f64).powi(r as i32)
}

/// Unordered selections with replacement: `C(n + r - 1, r)`.
///
/// # Examples
///
/// ```
/// use statlab_prob::counting::combinations_with_replacement;
///
/// // Multisets of size 2 from 3 flavors: AA AB AC BB BC CC.
/// assert_eq!(combinations_with_replacement(3, 2), 6.0);
/// ```
#[must_use]
pub fn combinations_with_replacement(n: u64, r: u64) -> f64 {
    if n == 0 {
        return if r == 0 { 1.0 } else { 0.0 };
    }
    combinations(n + r - 1, r)
}
