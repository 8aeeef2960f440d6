//! Thin wrappers over the f64 intrinsics that we need. With the `std` feature
//! we use the methods on `f64`, otherwise we fall back to `libm`.

#[cfg(feature = "std")]
pub(crate) fn log2(a: f64) -> f64 {
    a.log2()
}

#[cfg(not(feature = "std"))]
pub(crate) fn log2(a: f64) -> f64 {
    libm::log2(a)
}

#[cfg(feature = "std")]
pub(crate) fn exp2(a: f64) -> f64 {
    a.exp2()
}

#[cfg(not(feature = "std"))]
pub(crate) fn exp2(a: f64) -> f64 {
    libm::exp2(a)
}

#[cfg(feature = "std")]
pub(crate) fn floor(a: f64) -> f64 {
    a.floor()
}

#[cfg(not(feature = "std"))]
pub(crate) fn floor(a: f64) -> f64 {
    libm::floor(a)
}

#[cfg(feature = "std")]
pub(crate) fn powi(a: f64, n: i32) -> f64 {
    a.powi(n)
}

#[cfg(not(feature = "std"))]
pub(crate) fn powi(a: f64, n: i32) -> f64 {
    libm::pow(a, n as f64)
}

#[test]
fn test_intrinsics() {
    assert_eq!(log2(1.0), 0.0);
    assert_eq!(log2(1024.0), 10.0);
    assert_eq!(exp2(0.0), 1.0);
    assert_eq!(exp2(5.0), 32.0);
    assert_eq!(floor(83.9), 83.0);
    assert_eq!(floor(4.0), 4.0);
    assert_eq!(powi(10.0, 3), 1000.0);
    assert_eq!(powi(2.0, -1), 0.5);
}
