use crate::{approx, BigUInt, CapacityError};
use pyo3::exceptions::PyOverflowError;
use pyo3::prelude::*;

fn to_py_err(err: CapacityError) -> PyErr {
    PyOverflowError::new_err(err.to_string())
}

/// An unsigned integer that is stored as decimal digits.
///
/// The number holds up to 1000 digits. Operations that need more digits
/// raise OverflowError and leave the number unchanged.
#[pyclass(name = "BigUInt")]
struct PyBigUInt {
    inner: BigUInt,
}

#[pymethods]
impl PyBigUInt {
    /// Create a new number.
    ///
    /// Args:
    ///     val: The initial value, a 32-bit unsigned integer
    #[new]
    fn new(val: u32) -> Self {
        PyBigUInt {
            inner: BigUInt::from_u32(val),
        }
    }

    /// Multiply the number, in place, by a 32-bit unsigned integer.
    ///
    /// Raises OverflowError if the product has more than 1000 digits.
    fn mul_small(&mut self, rhs: u32) -> PyResult<()> {
        self.inner.inplace_mul_small(rhs).map_err(to_py_err)
    }
    /// Returns the decimal representation of the number.
    fn as_decimal(&self) -> String {
        self.inner.as_decimal()
    }
    /// Returns the closest fp64 value.
    fn as_f64(&self) -> f64 {
        self.inner.as_f64()
    }
    /// Returns true if the number is zero.
    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
    /// Returns the maximum number of digits.
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }
    fn __len__(&self) -> usize {
        self.inner.len()
    }
    fn __str__(&self) -> String {
        self.inner.as_decimal()
    }
    fn __repr__(&self) -> String {
        format!("{:?}", self.inner)
    }
    fn __eq__(&self, other: &PyBigUInt) -> bool {
        self.inner == other.inner
    }
}

/// Returns the exact value of n! as a BigUInt.
///
/// Args:
///     n: The argument of the factorial
#[pyfunction]
fn factorial(n: u32) -> PyResult<PyBigUInt> {
    let inner = crate::factorial_bigint(n).map_err(to_py_err)?;
    Ok(PyBigUInt { inner })
}

/// Returns log2(n!), computed as a sum of logarithms.
///
/// Args:
///     n: The argument of the factorial
#[pyfunction]
fn log2_factorial(n: u32) -> f64 {
    approx::log2_factorial(n)
}

/// Splits a base-2 logarithm into a (mantissa, exponent) tuple, where the
/// mantissa is in the range [1, 2).
///
/// Args:
///     log2_value: The base-2 logarithm of the number
#[pyfunction]
fn normalize(log2_value: f64) -> (f64, f64) {
    let norm = approx::normalize(log2_value);
    (norm.get_mantissa(), norm.get_exponent())
}

/// Returns the nearest integral power of two.
///
/// Args:
///     log2_value: The base-2 logarithm of the number
#[pyfunction]
fn round_log2(log2_value: f64) -> f64 {
    approx::round_log2(log2_value)
}

#[pymodule]
fn _bigfact(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBigUInt>()?;

    // Add the functions to the module
    m.add_function(wrap_pyfunction!(factorial, m)?)?;
    m.add_function(wrap_pyfunction!(log2_factorial, m)?)?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(round_log2, m)?)?;
    Ok(())
}
