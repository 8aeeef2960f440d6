//! Exact decimal factorials backed by a fixed-capacity big integer, together
//! with a base-2 logarithmic approximation of the same values.
//!
//! ```
//!    use bigfact::{factorial_bigint, log2_factorial, normalize};
//!
//!    let exact = factorial_bigint(25).unwrap();
//!    assert_eq!(exact.as_decimal(), "15511210043330985984000000");
//!
//!    let approx = normalize(log2_factorial(25));
//!    assert_eq!(approx.get_exponent(), 83.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod approx;
mod bigint;
mod cast;
mod factorial;
mod math;
mod string;

#[cfg(test)]
mod utils;

#[cfg(feature = "python")]
mod py;

pub use self::approx::{log2_factorial, normalize, round_log2, Normalized};
pub use self::bigint::{BigUInt, CapacityError, MAX_DIGITS};
pub use self::factorial::{factorial_bigint, factorial_with_capacity};
