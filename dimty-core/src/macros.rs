//! Macros for unit conversions and scalar operators.

/// Generates `From` trait implementations for all pairs of units of one dimension.
///
/// ```rust
/// use dimty_core::length::{Centimeters, Kilometer, Kilometers, Meter, Meters};
///
/// let m: Meters = Kilometers::new(1.5).into();
/// assert!((m.value() - 1500.0).abs() < 1e-9);
/// let cm: Centimeters = m.into();
/// assert!((cm.value() - 150_000.0).abs() < 1e-6);
/// ```
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<R: $crate::Scalar> From<$crate::Quantity<$first, R>> for $crate::Quantity<$rest, R> {
                fn from(value: $crate::Quantity<$first, R>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<R: $crate::Scalar> From<$crate::Quantity<$rest, R>> for $crate::Quantity<$first, R> {
                fn from(value: $crate::Quantity<$rest, R>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}

/// `scalar * quantity` for primitive representations. The orphan rule forbids a generic impl.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<U: $crate::UnitMarker> core::ops::Mul<$crate::Quantity<U, $t>> for $t {
                type Output = $crate::Quantity<U, $t>;
                #[inline]
                fn mul(self, rhs: $crate::Quantity<U, $t>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

pub(crate) use impl_scalar_lhs_mul;
