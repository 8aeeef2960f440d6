//! This module contains the implementation of the fixed-capacity decimal
//! big-int that we use for computing exact factorials.

use core::error::Error;
use core::fmt::{Debug, Display};
use core::ops::{Mul, MulAssign};

use log::{trace, warn};

/// The default number of decimal digits that a [`BigUInt`] can hold.
pub const MAX_DIGITS: usize = 1000;

/// Reported when the result of an operation does not fit in the digit
/// capacity of the number. The number that reported the error is left
/// unchanged.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    capacity: usize,
    required: usize,
}

impl CapacityError {
    pub(crate) fn new(capacity: usize, required: usize) -> Self {
        debug_assert!(required > capacity);
        CapacityError { capacity, required }
    }

    /// Returns the number of digits that the number can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of digits that the result would have needed.
    pub fn required(&self) -> usize {
        self.required
    }
}

impl Error for CapacityError {}

impl Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "The result needs {} decimal digits, but the capacity is {}",
            self.required, self.capacity
        )
    }
}

impl Debug for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self, f)
    }
}

/// Returns the number of decimal digits in `val`. Zero has one digit.
fn count_digits(mut val: u64) -> usize {
    let mut count = 1;
    while val >= 10 {
        val /= 10;
        count += 1;
    }
    count
}

/// This is an unsigned big number that is stored as a sequence of decimal
/// digits, least significant first. The digits live in an inline array of
/// `CAPACITY` entries, so the number never allocates and never grows past
/// `CAPACITY` digits. Operations that would need more digits report a
/// [`CapacityError`] instead of truncating the result.
///
/// # Examples
///
/// ```
///    use bigfact::BigUInt;
///
///    let mut x: BigUInt = BigUInt::from_u32(1995);
///    x.inplace_mul_small(90210).unwrap();
///
///    assert_eq!(x.as_decimal(), "179968950");
/// ```
///
#[derive(Clone)]
pub struct BigUInt<const CAPACITY: usize = MAX_DIGITS> {
    // The digits, in the range 0..=9. Only the first `len` entries are used.
    digits: [u8; CAPACITY],
    // The number of digits in use. Always in the range 1..=CAPACITY.
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl<const CAPACITY: usize> BigUInt<CAPACITY> {
    const NON_EMPTY: () = assert!(CAPACITY > 0, "Capacity must be positive");

    /// Create a new zero big int number.
    pub fn zero() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        BigUInt {
            digits: [0; CAPACITY],
            len: 1,
        }
    }

    /// Create a new number with the value 1.
    pub fn one() -> Self {
        let mut x = Self::zero();
        x.digits[0] = 1;
        x
    }

    /// Create a number with the value `val`.
    /// Panics if `val` has more digits than `CAPACITY`.
    pub fn from_u32(val: u32) -> Self {
        match Self::try_from(val) {
            Ok(x) => x,
            Err(err) => panic!("{}", err),
        }
    }

    /// Reset the number to the value `val`.
    pub fn init(&mut self, mut val: u32) -> Result<(), CapacityError> {
        let required = count_digits(val as u64);
        if required > CAPACITY {
            return Err(CapacityError::new(CAPACITY, required));
        }
        self.digits = [0; CAPACITY];
        self.len = 0;
        loop {
            self.digits[self.len] = (val % 10) as u8;
            self.len += 1;
            val /= 10;
            if val == 0 {
                break;
            }
        }
        debug_assert_eq!(self.len, required);
        Ok(())
    }

    /// Returns the number of digits in use. Zero has one digit.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of digits that this number can hold.
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Return true if the number is equal to zero.
    pub fn is_zero(&self) -> bool {
        self.len == 1 && self.digits[0] == 0
    }

    /// Returns the digits in use, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// Returns the digit at idx `idx`, counting from the least significant
    /// digit.
    pub fn get_digit(&self, idx: usize) -> u8 {
        self.digits()[idx]
    }

    fn set_zero(&mut self) {
        self.digits[..self.len].fill(0);
        self.len = 1;
    }

    /// Returns the carry that is left after multiplying all of the digits by
    /// `rhs`, without modifying the number.
    fn carry_out(&self, rhs: u64) -> u64 {
        let mut carry: u64 = 0;
        for &digit in self.digits() {
            carry = (digit as u64 * rhs + carry) / 10;
        }
        carry
    }

    /// Multiply this number by `rhs`, in place.
    ///
    /// The multiplier is a `u32`, and every intermediate product
    /// `digit * rhs + carry` is computed in a `u64`, which can't overflow:
    /// the carry is always smaller than `rhs`.
    ///
    /// Returns an error if the result has more digits than `CAPACITY`. In that
    /// case the number is left unchanged.
    pub fn inplace_mul_small(&mut self, rhs: u32) -> Result<(), CapacityError> {
        // A zero product would leave a trail of zero digits behind.
        if rhs == 0 {
            self.set_zero();
            return Ok(());
        }
        let rhs = rhs as u64;

        // The product has at most len + digits(rhs) digits. Only compute the
        // exact length when this bound does not fit.
        if self.len + count_digits(rhs) > CAPACITY {
            let carry = self.carry_out(rhs);
            if carry > 0 {
                let required = self.len + count_digits(carry);
                if required > CAPACITY {
                    warn!(
                        "Multiplying a {}-digit number by {} overflows the capacity of {} digits",
                        self.len, rhs, CAPACITY
                    );
                    return Err(CapacityError::new(CAPACITY, required));
                }
            }
        }

        let prev_len = self.len;
        let mut carry: u64 = 0;
        for digit in self.digits[..self.len].iter_mut() {
            let prod = *digit as u64 * rhs + carry;
            *digit = (prod % 10) as u8;
            carry = prod / 10;
        }
        // Append the remaining carry as new digits.
        while carry > 0 {
            self.digits[self.len] = (carry % 10) as u8;
            self.len += 1;
            carry /= 10;
        }

        if self.len != prev_len {
            trace!("Multiplied by {}: {} -> {} digits", rhs, prev_len, self.len);
        }
        Ok(())
    }

    /// Returns a new number that holds the factorial of `n`.
    pub fn factorial(n: u32) -> Result<Self, CapacityError> {
        let mut res = Self::one();
        for i in 2..=n {
            res.inplace_mul_small(i)?;
        }
        Ok(res)
    }
}

impl<const CAPACITY: usize> Default for BigUInt<CAPACITY> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const CAPACITY: usize> TryFrom<u32> for BigUInt<CAPACITY> {
    type Error = CapacityError;

    fn try_from(val: u32) -> Result<Self, Self::Error> {
        let mut x = Self::zero();
        x.init(val)?;
        Ok(x)
    }
}

impl<const CAPACITY: usize> PartialEq for BigUInt<CAPACITY> {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
    }
}

impl<const CAPACITY: usize> Eq for BigUInt<CAPACITY> {}

impl<const CAPACITY: usize> MulAssign<u32> for BigUInt<CAPACITY> {
    /// Panics if the result does not fit in `CAPACITY` digits.
    fn mul_assign(&mut self, rhs: u32) {
        if let Err(err) = self.inplace_mul_small(rhs) {
            panic!("{}", err);
        }
    }
}

impl<const CAPACITY: usize> Mul<u32> for BigUInt<CAPACITY> {
    type Output = Self;

    fn mul(mut self, rhs: u32) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<const CAPACITY: usize> Mul<u32> for &BigUInt<CAPACITY> {
    type Output = BigUInt<CAPACITY>;

    fn mul(self, rhs: u32) -> Self::Output {
        self.clone() * rhs
    }
}

#[test]
fn test_count_digits() {
    assert_eq!(count_digits(0), 1);
    assert_eq!(count_digits(9), 1);
    assert_eq!(count_digits(10), 2);
    assert_eq!(count_digits(4294967295), 10);
    assert_eq!(count_digits(u64::MAX), 20);
}

#[test]
fn test_init() {
    let mut x: BigUInt = BigUInt::zero();
    assert!(x.is_zero());
    assert_eq!(x.len(), 1);
    assert_eq!(x.digits(), &[0]);

    x.init(1995).unwrap();
    assert_eq!(x.digits(), &[5, 9, 9, 1]);

    // Re-initializing to a shorter value drops the old digits.
    x.init(7).unwrap();
    assert_eq!(x.digits(), &[7]);

    x.init(0).unwrap();
    assert!(x.is_zero());
    assert_eq!(x.len(), 1);

    x.init(u32::MAX).unwrap();
    assert_eq!(x.digits(), &[5, 9, 2, 7, 6, 9, 4, 9, 2, 4]);
    assert_eq!(x.get_digit(9), 4);
}

#[test]
fn test_init_capacity() {
    let mut x = BigUInt::<3>::one();
    assert_eq!(x.capacity(), 3);
    assert!(x.init(999).is_ok());
    let err = x.init(1000).unwrap_err();
    assert_eq!(err.capacity(), 3);
    assert_eq!(err.required(), 4);
    // The failed initialization keeps the previous value.
    assert_eq!(x.digits(), &[9, 9, 9]);
    assert!(BigUInt::<3>::try_from(12345).is_err());
}

#[test]
#[should_panic]
fn test_from_u32_too_large() {
    let _ = BigUInt::<2>::from_u32(100);
}

#[test]
fn test_mul_small_basic() {
    let mut x: BigUInt = BigUInt::from_u32(123);
    x.inplace_mul_small(4).unwrap();
    assert_eq!(x.digits(), &[2, 9, 4]);

    let mut x: BigUInt = BigUInt::from_u32(999);
    x.inplace_mul_small(9).unwrap();
    assert_eq!(x.digits(), &[1, 9, 9, 8]);

    // Multiplying by one does not change the number.
    let mut x: BigUInt = BigUInt::from_u32(90210);
    x.inplace_mul_small(1).unwrap();
    assert_eq!(x, BigUInt::from_u32(90210));

    // Large multipliers append several digits at once.
    let mut x: BigUInt = BigUInt::from_u32(7);
    x.inplace_mul_small(u32::MAX).unwrap();
    assert_eq!(x.digits(), &[5, 6, 0, 1, 7, 7, 4, 6, 0, 0, 3]);

    let mut x: BigUInt = BigUInt::zero();
    x.inplace_mul_small(12345).unwrap();
    assert!(x.is_zero());
}

#[test]
fn test_mul_by_zero() {
    let mut x: BigUInt = BigUInt::from_u32(4000000000);
    assert_eq!(x.len(), 10);
    x.inplace_mul_small(0).unwrap();
    assert!(x.is_zero());
    assert_eq!(x.len(), 1);
    assert_eq!(x, BigUInt::zero());

    // The stale digits must not come back.
    x.inplace_mul_small(10).unwrap();
    assert!(x.is_zero());
    x.init(3).unwrap();
    x.inplace_mul_small(3).unwrap();
    assert_eq!(x.digits(), &[9]);

    // This works even if the number is full.
    let mut full = BigUInt::<4>::from_u32(9999);
    full.inplace_mul_small(0).unwrap();
    assert!(full.is_zero());
}

#[test]
fn test_mul_capacity() {
    // Exactly filling the capacity is fine.
    let mut x = BigUInt::<4>::from_u32(99);
    x.inplace_mul_small(101).unwrap();
    assert_eq!(x.digits(), &[9, 9, 9, 9]);

    // One more digit is not.
    let mut x = BigUInt::<4>::from_u32(1000);
    let err = x.inplace_mul_small(10).unwrap_err();
    assert_eq!(err.capacity(), 4);
    assert_eq!(err.required(), 5);
    assert_eq!(x.digits(), &[0, 0, 0, 1]);

    // The bound on the length is not tight. Check that a product that fits is
    // accepted even when the quick estimate says that it may not.
    let mut x = BigUInt::<5>::from_u32(1000);
    x.inplace_mul_small(99).unwrap();
    assert_eq!(x.digits(), &[0, 0, 0, 9, 9]);
}

#[test]
fn test_factorial_ctor() {
    let x = BigUInt::<10>::factorial(10).unwrap();
    assert_eq!(x.digits(), &[0, 0, 8, 8, 2, 6, 3]);
    assert_eq!(BigUInt::<10>::factorial(0).unwrap(), BigUInt::one());
    assert!(BigUInt::<10>::factorial(14).is_err());
}

#[test]
fn test_mul_operators() {
    let x: BigUInt = BigUInt::from_u32(12);
    let y = &x * 12;
    assert_eq!(y, BigUInt::from_u32(144));
    let mut z = x * 5;
    z *= 5;
    assert_eq!(z, BigUInt::from_u32(300));
}

#[test]
#[should_panic]
fn test_mul_operator_overflow() {
    let mut x = BigUInt::<2>::from_u32(50);
    x *= 2;
}

#[test]
fn test_mul_random_values() {
    use crate::utils::Lfsr;

    let mut lfsr = Lfsr::new();

    // Compare the digit-by-digit multiplication against native 128-bit
    // arithmetic.
    for _ in 0..500 {
        let a = lfsr.get();
        let b = lfsr.get();
        let c = lfsr.get() >> 16;

        let mut x: BigUInt = BigUInt::from_u32(a);
        x.inplace_mul_small(b).unwrap();
        x.inplace_mul_small(c).unwrap();

        let mut expected = a as u128 * b as u128 * c as u128;
        for &digit in x.digits() {
            assert_eq!(digit as u128, expected % 10);
            expected /= 10;
        }
        assert_eq!(expected, 0);
        assert!(x.is_zero() || x.get_digit(x.len() - 1) != 0);
    }
}
