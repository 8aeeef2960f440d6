//! This module contains the implementation of string conversion.

use super::bigint::BigUInt;
use alloc::string::String;
use core::fmt::{Debug, Display, Write};

impl<const CAPACITY: usize> BigUInt<CAPACITY> {
    /// Returns the decimal representation of the number, most significant
    /// digit first.
    pub fn as_decimal(&self) -> String {
        let mut sb = String::with_capacity(self.len());
        for &digit in self.digits().iter().rev() {
            sb.push((b'0' + digit) as char);
        }
        sb
    }
}

impl<const CAPACITY: usize> Display for BigUInt<CAPACITY> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for &digit in self.digits().iter().rev() {
            f.write_char((b'0' + digit) as char)?;
        }
        Ok(())
    }
}

impl<const CAPACITY: usize> Debug for BigUInt<CAPACITY> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BigUInt<{}>({})", CAPACITY, self)
    }
}

#[test]
fn test_as_decimal() {
    assert_eq!(BigUInt::<4>::zero().as_decimal(), "0");
    assert_eq!(BigUInt::<4>::one().as_decimal(), "1");
    assert_eq!(BigUInt::<10>::from_u32(1234567890).as_decimal(), "1234567890");

    // Trailing zeros are part of the value.
    let mut x = BigUInt::<8>::from_u32(5);
    x.inplace_mul_small(1000000).unwrap();
    assert_eq!(x.as_decimal(), "5000000");

    // Multiplying by zero leaves no leading zeros behind.
    x.inplace_mul_small(0).unwrap();
    assert_eq!(x.as_decimal(), "0");
}

#[cfg(feature = "std")]
#[test]
fn test_display() {
    use std::format;

    let x: BigUInt = BigUInt::from_u32(90210);
    assert_eq!(format!("{}", x), "90210");
    assert_eq!(format!("{}", x), x.as_decimal());
    assert_eq!(format!("{:?}", x), "BigUInt<1000>(90210)");
    assert_eq!(format!("{:?}", BigUInt::<3>::zero()), "BigUInt<3>(0)");
}
