//! Exact factorials, and the checks that tie the exact and the approximate
//! computations together.

use super::bigint::{BigUInt, CapacityError, MAX_DIGITS};
use log::debug;

/// Computes n! exactly. Returns an error if the result has more than
/// [`MAX_DIGITS`] digits.
pub fn factorial_bigint(n: u32) -> Result<BigUInt, CapacityError> {
    factorial_with_capacity::<MAX_DIGITS>(n)
}

/// Computes n! exactly into a number that holds up to `CAPACITY` digits.
pub fn factorial_with_capacity<const CAPACITY: usize>(
    n: u32,
) -> Result<BigUInt<CAPACITY>, CapacityError> {
    let res = BigUInt::<CAPACITY>::factorial(n)?;
    debug!("Computed {}! with {} digits", n, res.len());
    Ok(res)
}

#[cfg(test)]
use crate::utils::EXACT_FACTORIALS;

#[test]
fn test_known_factorials() {
    for (n, expected) in EXACT_FACTORIALS.iter().enumerate() {
        let res = factorial_bigint(n as u32).unwrap();
        assert_eq!(res.as_decimal(), *expected, "wrong value for {}!", n);
        assert_eq!(res.len(), expected.len());
    }
}

#[test]
fn test_factorial_of_zero_and_one() {
    assert_eq!(factorial_bigint(0).unwrap().as_decimal(), "1");
    assert_eq!(factorial_bigint(1).unwrap().as_decimal(), "1");
}

#[test]
fn test_factorial_deterministic() {
    for n in [0, 7, 24, 25, 100] {
        let a = factorial_bigint(n).unwrap();
        let b = factorial_bigint(n).unwrap();
        assert_eq!(a.digits(), b.digits());
    }
}

#[test]
fn test_factorial_24_and_25() {
    let f25 = factorial_bigint(25).unwrap();
    let f24 = factorial_bigint(24).unwrap();
    assert_eq!(f25.as_decimal(), "15511210043330985984000000");
    assert_eq!(f24.as_decimal(), "620448401733239439360000");
    // 25! / 25 == 24!
    assert_eq!(&f24 * 25, f25);
}

#[test]
fn test_factorial_capacity() {
    // 449! has 998 digits, and 450! has 1001.
    assert_eq!(factorial_bigint(449).unwrap().len(), 998);
    let err = factorial_bigint(450).unwrap_err();
    assert_eq!(err.capacity(), MAX_DIGITS);
    assert_eq!(err.required(), 1001);

    // 13! = 6227020800 fits in ten digits, 14! does not.
    assert_eq!(
        factorial_with_capacity::<10>(13).unwrap().as_decimal(),
        "6227020800"
    );
    let err = factorial_with_capacity::<10>(14).unwrap_err();
    assert_eq!(err.required(), 11);
    assert!(factorial_with_capacity::<1>(4).is_err());
    assert_eq!(factorial_with_capacity::<1>(3).unwrap().as_decimal(), "6");
}

#[test]
fn test_exact_vs_approx() {
    use crate::approx::{log2_factorial, normalize};

    for n in 2..=18 {
        let exact = factorial_bigint(n).unwrap().as_f64();
        let norm = normalize(log2_factorial(n));
        let rel = (norm.value() - exact) / exact;
        assert!(rel < 1e-9 && rel > -1e-9, "bad approximation of {}!", n);
    }
}

#[test]
fn test_approx_of_25() {
    use crate::approx::{log2_factorial, normalize};

    let log2 = log2_factorial(25);
    assert!(log2 > 83.681 && log2 < 83.682);
    let norm = normalize(log2);
    assert_eq!(norm.get_exponent(), 83.0);
    assert!(norm.get_mantissa() > 1.6038 && norm.get_mantissa() < 1.6039);

    // Both computations describe the same number.
    let exact = factorial_bigint(25).unwrap().as_f64();
    let rel = (norm.value() - exact) / exact;
    assert!(rel < 1e-9 && rel > -1e-9);
}

#[test]
fn test_digit_count_matches_log() {
    use crate::approx::log2_factorial;
    use core::f64::consts::LOG10_2;

    // The number of decimal digits of n! is floor(log10(n!)) + 1.
    for n in [10, 25, 100, 300, 449] {
        let digits = crate::math::floor(log2_factorial(n) * LOG10_2) as usize + 1;
        assert_eq!(factorial_bigint(n).unwrap().len(), digits);
    }
}
