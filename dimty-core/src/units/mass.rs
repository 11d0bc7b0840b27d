//! Mass units.
//!
//! The coherent unit of this dimension is [`Kilogram`], so the gram itself sits at `1/1000` in the mass slot and the
//! formatter shifts prefixes by three orders of magnitude (`Tonne` prints as `Mg` unless given a symbol).
//!
//! ```rust
//! use dimty_core::mass::{Gram, Kilograms};
//!
//! let kg = Kilograms::new(1.5);
//! assert!((kg.to::<Gram>().value() - 1500.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Quantity, Rational};
use dimty_derive::UnitMarker;

/// Tonne (`1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "t", dimension = Dimension::MASS, ratio = Rational::KILO)]
pub struct Tonne;
/// A quantity measured in tonnes.
pub type Tonnes = Quantity<Tonne>;

/// Kilogram (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::MASS)]
pub struct Kilogram;
/// Type alias shorthand for [`Kilogram`].
pub type Kg = Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kg>;

/// Gram (`1e-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::MASS, ratio = Rational::MILLI)]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;

/// Milligram (`1e-6 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::MASS, ratio = Rational::MICRO)]
pub struct Milligram;
/// A quantity measured in milligrams.
pub type Milligrams = Quantity<Milligram>;

/// Microgram (`1e-9 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::MASS, ratio = Rational::NANO)]
pub struct Microgram;
/// A quantity measured in micrograms.
pub type Micrograms = Quantity<Microgram>;

/// Nanogram (`1e-12 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::MASS, ratio = Rational::PICO)]
pub struct Nanogram;
/// A quantity measured in nanograms.
pub type Nanograms = Quantity<Nanogram>;

/// Picogram (`1e-15 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::MASS, ratio = Rational::FEMTO)]
pub struct Picogram;
/// A quantity measured in picograms.
pub type Picograms = Quantity<Picogram>;

/// Unified atomic mass unit (`1.66053906660e-27 kg`, CODATA 2018). A real unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "u", dimension = Dimension::MASS, factor = 1.660_539_066_60e-27)]
pub struct AtomicMassUnit;
/// A quantity measured in atomic mass units.
pub type AtomicMassUnits = Quantity<AtomicMassUnit>;

crate::impl_unit_conversions!(
    Tonne, Kilogram, Gram, Milligram, Microgram, Nanogram, Picogram, AtomicMassUnit
);
