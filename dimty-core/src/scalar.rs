//! Numeric representations.

use core::fmt::Debug;
use num_traits::{AsPrimitive, Num};

/// Numeric type a [`Quantity`](crate::Quantity) may store.
///
/// Unit scales are `f64`, so converting a value to or from its base form goes through `f64` and casts back with
/// `as` semantics. Integer representations therefore truncate whenever a scale is not integral.
///
/// ```rust
/// use dimty_core::Scalar;
///
/// assert_eq!(<i32 as Scalar>::cast_from_f64(2.9), 2);
/// assert_eq!(<f32 as Scalar>::cast_from_f64(0.5), 0.5f32);
/// ```
pub trait Scalar: Num + Copy + PartialOrd + Debug + AsPrimitive<f64> {
    /// `value as Self`.
    fn cast_from_f64(value: f64) -> Self;

    /// `self as f64`.
    #[inline]
    fn into_f64(self) -> f64 {
        self.as_()
    }
}

impl<T> Scalar for T
where
    T: Num + Copy + PartialOrd + Debug + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn cast_from_f64(value: f64) -> Self {
        value.as_()
    }
}
