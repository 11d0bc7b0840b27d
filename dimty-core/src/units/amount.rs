//! Amount-of-substance units.
//!
//! The coherent unit of this dimension is [`Mole`].
//!
//! ```rust
//! use dimty_core::amount::{Millimole, Moles};
//!
//! let q = Moles::new(0.25);
//! assert!((q.to::<Millimole>().value() - 250.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Quantity, Rational};
use dimty_derive::UnitMarker;

/// Mole (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::AMOUNT)]
pub struct Mole;
/// A quantity measured in moles.
pub type Moles = Quantity<Mole>;

/// Millimole (`1e-3 mol`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::AMOUNT, ratio = Rational::MILLI)]
pub struct Millimole;
/// A quantity measured in millimoles.
pub type Millimoles = Quantity<Millimole>;

/// Micromole (`1e-6 mol`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::AMOUNT, ratio = Rational::MICRO)]
pub struct Micromole;
/// A quantity measured in micromoles.
pub type Micromoles = Quantity<Micromole>;

/// Nanomole (`1e-9 mol`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::AMOUNT, ratio = Rational::NANO)]
pub struct Nanomole;
/// A quantity measured in nanomoles.
pub type Nanomoles = Quantity<Nanomole>;

/// Picomole (`1e-12 mol`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::AMOUNT, ratio = Rational::PICO)]
pub struct Picomole;
/// A quantity measured in picomoles.
pub type Picomoles = Quantity<Picomole>;

crate::impl_unit_conversions!(Mole, Millimole, Micromole, Nanomole, Picomole);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;
    use approx::assert_relative_eq;

    #[test]
    fn prefix_ladder() {
        assert_relative_eq!(Moles::new(1.0).to::<Millimole>().value(), 1e3);
        assert_relative_eq!(Millimoles::new(2.0).base_value(), 2e-3);
        let smallest: Picomoles = Moles::new(1.0).into();
        assert_relative_eq!(smallest.to::<Mole>().value(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn symbols() {
        assert_eq!(Symbol::<Mole>::new().to_string(), "mol");
        assert_eq!(Symbol::<Picomole>::new().to_string(), "pmol");
    }
}
