//! Floating-point approximation of factorials. We never materialize n! as a
//! float, which would overflow f64 for n > 170. Instead we sum the base-2
//! logarithms of the terms and split the sum into a mantissa and an exponent.

use crate::math;
use core::f64::consts::{LOG10_2, LOG2_10};
use core::fmt::Display;

/// Returns log2(n!). The terms are accumulated into a single running sum.
pub fn log2_factorial(n: u32) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 2..=n {
        sum += math::log2(i as f64);
    }
    sum
}

/// Returns the power of two that is closest to 2^log2_value, rounding
/// halfway cases up.
pub fn round_log2(log2_value: f64) -> f64 {
    math::floor(log2_value + 0.5)
}

/// Splits `log2_value` into a mantissa in the range [1, 2) and an integral
/// exponent, such that mantissa * 2^exponent == 2^log2_value.
pub fn normalize(log2_value: f64) -> Normalized {
    let mut exponent = math::floor(log2_value);
    let mut mantissa = math::exp2(log2_value - exponent);
    // exp2 of a fraction just under 1 may round up to 2.
    if mantissa >= 2.0 {
        mantissa /= 2.0;
        exponent += 1.0;
    }
    Normalized { mantissa, exponent }
}

/// A number in the form mantissa * 2^exponent, where the mantissa is in the
/// range [1, 2) and the exponent is integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    mantissa: f64,
    exponent: f64,
}

impl Normalized {
    /// Returns the mantissa, in the range [1, 2).
    pub fn get_mantissa(&self) -> f64 {
        self.mantissa
    }

    /// Returns the base-2 exponent. The value is always integral.
    pub fn get_exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns mantissa * 2^exponent, which is infinity if the number does
    /// not fit in an f64.
    pub fn value(&self) -> f64 {
        if self.exponent > f64::MAX_EXP as f64 {
            return f64::INFINITY;
        }
        self.mantissa * math::powi(2.0, self.exponent as i32)
    }

    /// Converts the number to base 10 and returns the pair (m, e) such that
    /// m * 10^e is the number, with m in the range [1, 10).
    pub fn as_decimal_exponent(&self) -> (f64, f64) {
        let log10 = (self.exponent + math::log2(self.mantissa)) * LOG10_2;
        let mut exp10 = math::floor(log10);
        let mut man10 = math::exp2((log10 - exp10) * LOG2_10);
        if man10 >= 10.0 {
            man10 /= 10.0;
            exp10 += 1.0;
        }
        (man10, exp10)
    }
}

impl Display for Normalized {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.6} × 2^({:.0})", self.mantissa, self.exponent)
    }
}

#[test]
fn test_log2_factorial_small() {
    assert_eq!(log2_factorial(0), 0.0);
    assert_eq!(log2_factorial(1), 0.0);
    assert_eq!(log2_factorial(2), 1.0);
    // 4! = 24 = 3 * 2^3
    let l4 = log2_factorial(4);
    assert!(l4 > 4.58 && l4 < 4.59);
}

#[test]
fn test_log2_monotonic() {
    let mut prev = log2_factorial(2);
    for n in 3..2000 {
        let cur = log2_factorial(n);
        assert!(cur > prev, "log2({}!) is not increasing", n);
        prev = cur;
    }
}

#[test]
fn test_normalize_range() {
    for n in 0..500 {
        let norm = normalize(log2_factorial(n));
        assert!(norm.get_mantissa() >= 1.0);
        assert!(norm.get_mantissa() < 2.0);
        assert_eq!(norm.get_exponent(), math::floor(norm.get_exponent()));
    }

    // Integral inputs give a mantissa of exactly one.
    let norm = normalize(10.0);
    assert_eq!(norm.get_mantissa(), 1.0);
    assert_eq!(norm.get_exponent(), 10.0);
    assert_eq!(normalize(0.0).get_mantissa(), 1.0);

    // Values just under an integer must not produce a mantissa of 2.
    let norm = normalize(4.0 - f64::EPSILON * 4.0);
    assert!(norm.get_mantissa() < 2.0);
}

#[test]
fn test_round_log2() {
    assert_eq!(round_log2(83.68151360887516), 84.0);
    assert_eq!(round_log2(79.03765741910044), 79.0);
    assert_eq!(round_log2(2.5), 3.0);
    assert_eq!(round_log2(0.0), 0.0);
}

#[test]
fn test_normalized_value() {
    // 2^(3 + log2(3)) = 24.
    let norm = normalize(log2_factorial(4));
    assert_eq!(norm.get_exponent(), 4.0);
    let diff = norm.value() - 24.0;
    assert!(diff < 1e-12 && diff > -1e-12);

    // Numbers beyond the f64 range.
    let norm = normalize(log2_factorial(1000));
    assert_eq!(norm.value(), f64::INFINITY);
}

#[test]
fn test_decimal_exponent() {
    // 10! = 3628800 = 3.6288 * 10^6
    let (m, e) = normalize(log2_factorial(10)).as_decimal_exponent();
    assert_eq!(e, 6.0);
    assert!(m > 3.62879 && m < 3.62881);

    // 100! ~ 9.3326e157
    let (m, e) = normalize(log2_factorial(100)).as_decimal_exponent();
    assert_eq!(e, 157.0);
    assert!(m > 9.3325 && m < 9.3327);
}

#[cfg(feature = "std")]
#[test]
fn test_display() {
    use std::format;

    let norm = normalize(log2_factorial(25));
    assert_eq!(format!("{}", norm), "1.603822 × 2^(83)");
    assert_eq!(format!("{}", normalize(10.0)), "1.000000 × 2^(10)");
}
