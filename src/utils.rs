//! This file contains test helpers.

/// The exact decimal values of 0! to 20!.
pub const EXACT_FACTORIALS: [&str; 21] = [
    "1",
    "1",
    "2",
    "6",
    "24",
    "120",
    "720",
    "5040",
    "40320",
    "362880",
    "3628800",
    "39916800",
    "479001600",
    "6227020800",
    "87178291200",
    "1307674368000",
    "20922789888000",
    "355687428096000",
    "6402373705728000",
    "121645100408832000",
    "2432902008176640000",
];

#[test]
fn test_table_is_consistent() {
    // Each entry is the previous one times n, in native arithmetic.
    let mut acc: u64 = 1;
    for (n, entry) in EXACT_FACTORIALS.iter().enumerate() {
        if n > 1 {
            acc *= n as u64;
        }
        assert_eq!(entry.parse::<u64>().unwrap(), acc);
    }
}

// Linear-feedback shift register. We use this as a random number generator for
// tests.
pub struct Lfsr {
    state: u32,
}

impl Lfsr {
    /// Generate a new LFSR number generator.
    pub fn new() -> Lfsr {
        Lfsr { state: 0x13371337 }
    }

    fn next(&mut self) {
        let a = (self.state >> 24) & 1;
        let b = (self.state >> 23) & 1;
        let c = (self.state >> 22) & 1;
        let d = (self.state >> 17) & 1;
        let n = a ^ b ^ c ^ d ^ 1;
        self.state <<= 1;
        self.state |= n;
    }

    /// Returns the next 32 pseudorandom bits.
    pub fn get(&mut self) -> u32 {
        let mut res: u32 = 0;
        for _ in 0..32 {
            self.next();
            res <<= 1;
            res ^= self.state & 0x1;
        }
        res
    }
}

#[test]
fn test_lfsr_spread() {
    let mut lfsr = Lfsr::new();

    // The multiplication tests rely on operands of different decimal lengths.
    let mut seen = [false; 10];
    for _ in 0..10000 {
        let v = lfsr.get();
        let digits = v.checked_ilog10().unwrap_or(0) as usize;
        seen[digits] = true;
    }
    assert!(seen[7..].iter().all(|x| *x));
}
