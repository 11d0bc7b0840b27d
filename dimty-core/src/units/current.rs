//! Electric current units.
//!
//! The coherent unit of this dimension is [`Ampere`].
//!
//! ```rust
//! use dimty_core::current::{Milliampere, Amperes};
//!
//! let q = Amperes::new(0.25);
//! assert!((q.to::<Milliampere>().value() - 250.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Quantity, Rational};
use dimty_derive::UnitMarker;

/// Ampere (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::CURRENT)]
pub struct Ampere;
/// A quantity measured in amperes.
pub type Amperes = Quantity<Ampere>;

/// Milliampere (`1e-3 A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::CURRENT, ratio = Rational::MILLI)]
pub struct Milliampere;
/// A quantity measured in milliamperes.
pub type Milliamperes = Quantity<Milliampere>;

/// Microampere (`1e-6 A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::CURRENT, ratio = Rational::MICRO)]
pub struct Microampere;
/// A quantity measured in microamperes.
pub type Microamperes = Quantity<Microampere>;

/// Nanoampere (`1e-9 A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::CURRENT, ratio = Rational::NANO)]
pub struct Nanoampere;
/// A quantity measured in nanoamperes.
pub type Nanoamperes = Quantity<Nanoampere>;

/// Picoampere (`1e-12 A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::CURRENT, ratio = Rational::PICO)]
pub struct Picoampere;
/// A quantity measured in picoamperes.
pub type Picoamperes = Quantity<Picoampere>;

/// Femtoampere (`1e-15 A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::CURRENT, ratio = Rational::FEMTO)]
pub struct Femtoampere;
/// A quantity measured in femtoamperes.
pub type Femtoamperes = Quantity<Femtoampere>;

crate::impl_unit_conversions!(Ampere, Milliampere, Microampere, Nanoampere, Picoampere, Femtoampere);
