//! Dimensionless units.
//!
//! [`Unitless`] is the coherent dimensionless unit. Ratios such as `Meters / Meters` carry a `Quot<U, U>` unit and
//! reduce to it with [`Simplify`](crate::Simplify). Percent and parts-per-million are scaled dimensionless units.
//!
//! ```rust
//! use dimty_core::unitless::{Percents, Ratio};
//! use dimty_core::Unitless;
//!
//! let p = Percents::new(12.5);
//! let r: Ratio = p.to::<Unitless>();
//! assert!((r.value() - 0.125).abs() < 1e-12);
//! ```

use crate::{Quantity, Rational, Unitless};
use dimty_derive::UnitMarker;

/// A plain dimensionless number.
pub type Ratio = Quantity<Unitless>;

/// Percent (`1/100`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "%", from = Unitless, global = Rational::CENTI)]
pub struct Percent;
/// A quantity measured in percent.
pub type Percents = Quantity<Percent>;

/// Parts per million (`1e-6`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "ppm", from = Unitless, global = Rational::MICRO)]
pub struct PartsPerMillion;
/// A quantity measured in parts per million.
pub type PartsPerMillions = Quantity<PartsPerMillion>;

crate::impl_unit_conversions!(Unitless, Percent, PartsPerMillion);
