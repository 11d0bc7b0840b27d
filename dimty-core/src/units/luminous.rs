//! Luminous intensity units.
//!
//! The coherent unit of this dimension is [`Candela`].
//!
//! ```rust
//! use dimty_core::luminous::{Millicandela, Candelas};
//!
//! let q = Candelas::new(0.25);
//! assert!((q.to::<Millicandela>().value() - 250.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Quantity, Rational};
use dimty_derive::UnitMarker;

/// Candela (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LUMINOUS)]
pub struct Candela;
/// A quantity measured in candelas.
pub type Candelas = Quantity<Candela>;

/// Millicandela (`1e-3 cd`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LUMINOUS, ratio = Rational::MILLI)]
pub struct Millicandela;
/// A quantity measured in millicandelas.
pub type Millicandelas = Quantity<Millicandela>;

/// Microcandela (`1e-6 cd`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LUMINOUS, ratio = Rational::MICRO)]
pub struct Microcandela;
/// A quantity measured in microcandelas.
pub type Microcandelas = Quantity<Microcandela>;

/// Nanocandela (`1e-9 cd`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LUMINOUS, ratio = Rational::NANO)]
pub struct Nanocandela;
/// A quantity measured in nanocandelas.
pub type Nanocandelas = Quantity<Nanocandela>;

/// Picocandela (`1e-12 cd`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LUMINOUS, ratio = Rational::PICO)]
pub struct Picocandela;
/// A quantity measured in picocandelas.
pub type Picocandelas = Quantity<Picocandela>;

/// Femtocandela (`1e-15 cd`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::LUMINOUS, ratio = Rational::FEMTO)]
pub struct Femtocandela;
/// A quantity measured in femtocandelas.
pub type Femtocandelas = Quantity<Femtocandela>;

crate::impl_unit_conversions!(Candela, Millicandela, Microcandela, Nanocandela, Picocandela, Femtocandela);
