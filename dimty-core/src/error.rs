//! Error type for fallible unit algebra.
//!
//! Every `const` constructor in this crate that can reject its input has a `try_*` twin returning
//! [`UnitResult`]. The panicking form reports the same [`UnitError`] variant as its message, so a malformed
//! unit definition in a `const` item fails the build with the name of the precondition it violated.

use crate::dimension::Dimension;

/// Result type for fallible unit algebra.
pub type UnitResult<T> = Result<T, UnitError>;

/// Precondition failures of the dimension and unit algebra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// A rational was built with a zero denominator, or a zero rational was inverted.
    #[error("rational denominator must be non-zero")]
    ZeroDenominator,

    /// A rational numerator or denominator left the `i64` range.
    #[error("rational arithmetic overflowed the 64-bit numerator or denominator")]
    Overflow,

    /// A single-slot ratio was requested for a dimension without exactly one non-zero exponent.
    #[error("dimension `{0}` is not simple: exactly one non-zero exponent is required")]
    NotSimpleDimension(Dimension),

    /// Two units were combined or compared although their dimensions differ.
    #[error("incompatible units: `{left}` and `{right}` have different dimensions")]
    IncompatibleUnits {
        /// Dimension of the left operand.
        left: Dimension,
        /// Dimension of the right operand.
        right: Dimension,
    },

    /// A quantity was divided by a quantity whose value is zero.
    #[error("division by a zero-valued quantity")]
    ZeroDivisor,
}

impl UnitError {
    /// Aborts with a message naming this error.
    ///
    /// Usable from `const fn`, where formatted panics are not available.
    pub(crate) const fn panic(self) -> ! {
        match self {
            Self::ZeroDenominator => panic!("rational denominator must be non-zero"),
            Self::Overflow => panic!("rational arithmetic overflowed the 64-bit numerator or denominator"),
            Self::NotSimpleDimension(_) => {
                panic!("dimension is not simple: exactly one non-zero exponent is required")
            }
            Self::IncompatibleUnits { .. } => panic!("incompatible units: dimensions differ"),
            Self::ZeroDivisor => panic!("division by a zero-valued quantity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_precondition() {
        assert_eq!(
            UnitError::ZeroDenominator.to_string(),
            "rational denominator must be non-zero"
        );
        let err = UnitError::IncompatibleUnits {
            left: Dimension::LENGTH,
            right: Dimension::MASS,
        };
        assert_eq!(
            err.to_string(),
            "incompatible units: `L` and `M` have different dimensions"
        );
        assert_eq!(
            UnitError::NotSimpleDimension(Dimension::VELOCITY).to_string(),
            "dimension `L·T^-1` is not simple: exactly one non-zero exponent is required"
        );
    }

    #[test]
    #[should_panic(expected = "rational denominator must be non-zero")]
    fn panic_reuses_the_message() {
        UnitError::ZeroDenominator.panic();
    }
}
