//! Tests for the primality oracle.
//!
//! These tests verify `is_prime` for:
//! - Small known primes and composites
//! - Zero, one and negative inputs
//! - Different integer widths and signedness
//!
//! ## Test Organization
//!
//! 1. **Known Values** - Documented examples and small ranges
//! 2. **Edge Cases** - Values below 2, squares of primes, type extremes

use ulam::is_prime;

// ============================================================================
// Helper Functions
// ============================================================================

fn naive_is_prime(n: i64) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

// ============================================================================
// Known Values Tests
// ============================================================================

/// Test the documented reference values.
#[test]
fn test_reference_values() {
    assert!(!is_prime(4), "4 is composite");
    assert!(is_prime(13), "13 is prime");
    assert!(!is_prime(1), "1 is not prime");
    assert!(is_prime(2), "2 is prime");
    assert!(!is_prime(9), "9 is composite");
}

/// Test agreement with the definition over a small range.
#[test]
fn test_matches_definition_up_to_500() {
    for n in -20_i64..500 {
        assert_eq!(is_prime(n), naive_is_prime(n), "Mismatch at n = {n}");
    }
}

/// Test the primes below 50.
#[test]
fn test_primes_below_fifty() {
    let primes: Vec<i64> = (0..50).filter(|&n| is_prime(n)).collect();
    assert_eq!(
        primes,
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
    );
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that values below 2 are never prime.
#[test]
fn test_below_two() {
    for n in [i64::MIN, -13, -2, -1, 0, 1] {
        assert!(!is_prime(n), "{n} should not be prime");
    }
}

/// Test squares of odd primes, where the divisor bound is tight.
#[test]
fn test_prime_squares() {
    for p in [3_i64, 5, 7, 11, 13, 97, 101] {
        assert!(!is_prime(p * p), "{} should be composite", p * p);
    }
}

/// Test other integer widths.
#[test]
fn test_integer_types() {
    assert!(is_prime(251_u8), "Largest u8 prime");
    assert!(!is_prime(255_u8), "u8::MAX is composite");
    assert!(is_prime(127_i8), "i8::MAX is prime");
    assert!(is_prime(65_521_u32), "Largest u16-range prime");
    assert!(is_prime(2_147_483_647_i32), "i32::MAX is a Mersenne prime");
    assert!(!is_prime(0_usize), "Zero is not prime");
}

/// Test large values near the top of the type's range do not overflow.
#[test]
fn test_large_values() {
    assert!(is_prime(4_294_967_291_u32), "Largest u32 prime");
    assert!(!is_prime(u32::MAX), "u32::MAX is composite");
    assert!(is_prime(1_000_000_007_i64));
}
