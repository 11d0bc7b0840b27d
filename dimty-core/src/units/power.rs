//! Power units.
//!
//! ```rust
//! use dimty_core::energy::Joules;
//! use dimty_core::power::{Kilowatt, Watts};
//! use dimty_core::time::Seconds;
//!
//! let p: Watts = (Joules::new(3000.0) / Seconds::new(1.5)).to();
//! assert!((p.to::<Kilowatt>().value() - 2.0).abs() < 1e-12);
//! ```

use crate::energy::Joule;
use crate::time::Second;
use crate::{Quantity, Quot, Rational};
use dimty_derive::UnitMarker;

/// Watt (`J/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "W", from = Quot<Joule, Second>)]
pub struct Watt;
/// A quantity measured in watts.
pub type Watts = Quantity<Watt>;

/// Kilowatt (`1e3 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "kW", from = Watt, global = Rational::KILO)]
pub struct Kilowatt;
/// A quantity measured in kilowatts.
pub type Kilowatts = Quantity<Kilowatt>;

/// Megawatt (`1e6 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "MW", from = Watt, global = Rational::MEGA)]
pub struct Megawatt;
/// A quantity measured in megawatts.
pub type Megawatts = Quantity<Megawatt>;

/// Gigawatt (`1e9 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "GW", from = Watt, global = Rational::GIGA)]
pub struct Gigawatt;
/// A quantity measured in gigawatts.
pub type Gigawatts = Quantity<Gigawatt>;

crate::impl_unit_conversions!(Watt, Kilowatt, Megawatt, Gigawatt);
