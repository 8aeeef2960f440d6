use super::bigint::BigUInt;

impl<const CAPACITY: usize> BigUInt<CAPACITY> {
    /// Returns the value as a u64, or None if the number does not fit.
    pub fn as_u64(&self) -> Option<u64> {
        let mut val: u64 = 0;
        for &digit in self.digits().iter().rev() {
            val = val.checked_mul(10)?.checked_add(digit as u64)?;
        }
        Some(val)
    }

    /// Converts the number to the closest f64. Numbers that fit in a u64 are
    /// rounded correctly. Larger numbers accumulate the rounding error of one
    /// multiplication per digit, and numbers above f64::MAX become infinity.
    pub fn as_f64(&self) -> f64 {
        if let Some(val) = self.as_u64() {
            return val as f64;
        }
        let mut val = 0.0;
        for &digit in self.digits().iter().rev() {
            val = val * 10.0 + digit as f64;
        }
        val
    }
}

#[test]
fn test_as_u64() {
    assert_eq!(BigUInt::<4>::zero().as_u64(), Some(0));
    assert_eq!(BigUInt::<10>::from_u32(u32::MAX).as_u64(), Some(u32::MAX as u64));

    let mut x = BigUInt::<30>::from_u32(u32::MAX);
    x.inplace_mul_small(u32::MAX).unwrap();
    assert_eq!(x.as_u64(), Some(u32::MAX as u64 * u32::MAX as u64));

    // 20! fits, 21! does not.
    let f20 = BigUInt::<30>::factorial(20).unwrap();
    assert_eq!(f20.as_u64(), Some(2432902008176640000));
    let f21 = BigUInt::<30>::factorial(21).unwrap();
    assert_eq!(f21.as_u64(), None);
}

#[test]
fn test_as_f64() {
    assert_eq!(BigUInt::<4>::zero().as_f64(), 0.0);
    assert_eq!(BigUInt::<4>::from_u32(1024).as_f64(), 1024.0);
    let f18 = BigUInt::<30>::factorial(18).unwrap();
    assert_eq!(f18.as_f64(), 6402373705728000.0);

    // 25! = 15511210043330985984000000, check it within a few ulps.
    let f25 = BigUInt::<30>::factorial(25).unwrap();
    let rel = (f25.as_f64() - 1.5511210043330986e25) / 1.5511210043330986e25;
    assert!(rel < 1e-14 && rel > -1e-14);

    // Numbers that are too large saturate to infinity.
    let big = BigUInt::<1000>::factorial(200).unwrap();
    assert_eq!(big.as_f64(), f64::INFINITY);
}
