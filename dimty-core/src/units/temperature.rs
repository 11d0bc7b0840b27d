//! Thermodynamic temperature units.
//!
//! The coherent unit of this dimension is [`Kelvin`]. Only multiplicative units exist here; offset scales such as
//! Celsius are not units in this model.
//!
//! ```rust
//! use dimty_core::temperature::{Millikelvin, Kelvins};
//!
//! let q = Kelvins::new(0.25);
//! assert!((q.to::<Millikelvin>().value() - 250.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Quantity, Rational};
use dimty_derive::UnitMarker;

/// Kelvin (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TEMPERATURE)]
pub struct Kelvin;
/// A quantity measured in kelvins.
pub type Kelvins = Quantity<Kelvin>;

/// Millikelvin (`1e-3 K`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TEMPERATURE, ratio = Rational::MILLI)]
pub struct Millikelvin;
/// A quantity measured in millikelvins.
pub type Millikelvins = Quantity<Millikelvin>;

/// Microkelvin (`1e-6 K`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TEMPERATURE, ratio = Rational::MICRO)]
pub struct Microkelvin;
/// A quantity measured in microkelvins.
pub type Microkelvins = Quantity<Microkelvin>;

/// Nanokelvin (`1e-9 K`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TEMPERATURE, ratio = Rational::NANO)]
pub struct Nanokelvin;
/// A quantity measured in nanokelvins.
pub type Nanokelvins = Quantity<Nanokelvin>;

/// Picokelvin (`1e-12 K`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TEMPERATURE, ratio = Rational::PICO)]
pub struct Picokelvin;
/// A quantity measured in picokelvins.
pub type Picokelvins = Quantity<Picokelvin>;

/// Femtokelvin (`1e-15 K`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TEMPERATURE, ratio = Rational::FEMTO)]
pub struct Femtokelvin;
/// A quantity measured in femtokelvins.
pub type Femtokelvins = Quantity<Femtokelvin>;

crate::impl_unit_conversions!(Kelvin, Millikelvin, Microkelvin, Nanokelvin, Picokelvin, Femtokelvin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;
    use approx::assert_relative_eq;

    #[test]
    fn prefix_ladder() {
        assert_relative_eq!(Kelvins::new(1.0).to::<Millikelvin>().value(), 1e3);
        assert_relative_eq!(Millikelvins::new(2.0).base_value(), 2e-3);
        let smallest: Femtokelvins = Kelvins::new(1.0).into();
        assert_relative_eq!(smallest.to::<Kelvin>().value(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn symbols() {
        assert_eq!(Symbol::<Kelvin>::new().to_string(), "K");
        assert_eq!(Symbol::<Femtokelvin>::new().to_string(), "fK");
    }
}
