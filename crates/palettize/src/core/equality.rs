#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::FloatExt;
use crate::{Bits, Float};

/// Assert that two floating point numbers agree once normalized with
/// [`to_eq_bits`].
///
/// # Panics
///
/// If the normalized numbers differ. The message prints the two numbers on
/// lines of their own.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert_eq!(
            $crate::to_eq_bits(f1),
            $crate::to_eq_bits(f2),
            "numbers differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Assert that two CIE Lab colors agree coordinate by coordinate once
/// normalized with [`to_eq_bits`].
///
/// # Panics
///
/// If any normalized coordinate differs. The message prints the two triples on
/// lines of their own.
#[macro_export]
macro_rules! assert_same_lab {
    ($lab1:expr, $lab2:expr $(,)?) => {
        let (lab1, lab2) = ($lab1, $lab2);
        assert_eq!(
            lab1.as_ref().map($crate::to_eq_bits),
            lab2.as_ref().map($crate::to_eq_bits),
            "Lab coordinates differ:\n{:?}\n{:?}",
            lab1.as_ref(),
            lab2.as_ref()
        );
    };
}

/// Determine whether two numbers are equal after normalization. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Normalize a floating point number for equality testing.
///
/// Not-a-number becomes zero, digits beyond the rounding factor are
/// rounded away, and negative zero becomes positive zero. The result is the
/// number's bit pattern. Public only for the test macros.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    let f = if f.is_nan() { 0.0 } else { f };
    let f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // -0.0 == 0.0 but their bits differ.
    if f == 0.0 {
        (0.0 as Float).to_bits()
    } else {
        f.to_bits()
    }
}
