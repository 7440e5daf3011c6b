//! Primality testing by trial division.
//!
//! ## Purpose
//!
//! This module provides the primality oracle used to label grid cells.
//!
//! ## Design notes
//!
//! * **Generics**: Works for every primitive integer type via `PrimInt`.
//! * **Overflow-free**: The divisor bound is checked as `d <= n / d`, never `d * d <= n`.
//!
//! ## Invariants
//!
//! * Values below 2 (including zero and negatives) are never prime.
//! * The result depends only on `n`.
//!
//! ## Non-goals
//!
//! * This module does not sieve or cache results.
//! * This module does not provide probabilistic tests for large integers.

// External dependencies
use num_traits::PrimInt;

/// Check whether `n` is prime.
///
/// Even numbers above 2 are rejected immediately; otherwise odd divisors
/// `3, 5, 7, ...` up to `floor(sqrt(n))` are tried.
///
/// # Examples
///
/// ```
/// use ulam::is_prime;
///
/// assert!(is_prime(13));
/// assert!(!is_prime(9));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime<T: PrimInt>(n: T) -> bool {
    let two = T::one() + T::one();

    if n < two {
        return false;
    }
    if n == two {
        return true;
    }
    if n % two == T::zero() {
        return false;
    }

    let mut d = two + T::one();
    while d <= n / d {
        if n % d == T::zero() {
            return false;
        }
        d = d + two;
    }

    true
}
