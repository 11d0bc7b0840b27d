//! Length units.
//!
//! The coherent unit of this dimension is [`Meter`]. Every prefixed unit stores its prefix as an exact [`Rational`]
//! in the length slot, so `km / cm` reduces to exactly `100000`.
//!
//! This module provides:
//!
//! - **SI ladder**: kilometre down to femtometre.
//! - **Ångström**: `10^-10 m`, printed as `Å`.
//! - **Area and volume**: square and cubic metres plus the litre (cubic decimetre).
//!
//! ```rust
//! use dimty_core::length::{Centimeter, Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! assert!((km.to::<Centimeter>().value() - 125_000.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Pow, Quantity, Rational};
use dimty_derive::UnitMarker;

// ─────────────────────────────────────────────────────────────────────────────
// SI ladder
// ─────────────────────────────────────────────────────────────────────────────

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH, ratio = Rational::KILO)]
pub struct Kilometer;
/// Type alias shorthand for [`Kilometer`].
pub type Km = Kilometer;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Km>;

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;

/// Decimetre (`1e-1 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH, ratio = Rational::DECI)]
pub struct Decimeter;
/// A quantity measured in decimetres.
pub type Decimeters = Quantity<Decimeter>;

/// Centimetre (`1e-2 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH, ratio = Rational::CENTI)]
pub struct Centimeter;
/// Type alias shorthand for [`Centimeter`].
pub type Cm = Centimeter;
/// A quantity measured in centimetres.
pub type Centimeters = Quantity<Cm>;

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH, ratio = Rational::MILLI)]
pub struct Millimeter;
/// Type alias shorthand for [`Millimeter`].
pub type Mm = Millimeter;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Mm>;

/// Micrometre (`1e-6 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH, ratio = Rational::MICRO)]
pub struct Micrometer;
/// A quantity measured in micrometres.
pub type Micrometers = Quantity<Micrometer>;

/// Nanometre (`1e-9 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH, ratio = Rational::NANO)]
pub struct Nanometer;
/// A quantity measured in nanometres.
pub type Nanometers = Quantity<Nanometer>;

/// Picometre (`1e-12 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH, ratio = Rational::PICO)]
pub struct Picometer;
/// A quantity measured in picometres.
pub type Picometers = Quantity<Picometer>;

/// Femtometre (`1e-15 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH, ratio = Rational::FEMTO)]
pub struct Femtometer;
/// A quantity measured in femtometres.
pub type Femtometers = Quantity<Femtometer>;

/// Ångström (`1e-10 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LENGTH, ratio = Rational::new(1, 10_000_000_000))]
pub struct Angstrom;
/// A quantity measured in ångströms.
pub type Angstroms = Quantity<Angstrom>;

crate::impl_unit_conversions!(
    Kilometer, Meter, Decimeter, Centimeter, Millimeter, Micrometer, Nanometer, Picometer, Femtometer, Angstrom
);

// ─────────────────────────────────────────────────────────────────────────────
// Area and volume
// ─────────────────────────────────────────────────────────────────────────────

/// Square metre.
pub type SquareMeter = Pow<Meter, 2>;
/// A quantity measured in square metres.
pub type SquareMeters = Quantity<SquareMeter>;

/// Cubic metre.
pub type CubicMeter = Pow<Meter, 3>;
/// A quantity measured in cubic metres.
pub type CubicMeters = Quantity<CubicMeter>;

/// Litre (`1 dm^3`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "l", from = Pow<Decimeter, 3>)]
pub struct Liter;
/// A quantity measured in litres.
pub type Liters = Quantity<Liter>;

crate::impl_unit_conversions!(CubicMeter, Liter);
