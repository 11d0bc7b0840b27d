//! Force units.
//!
//! ```rust
//! use dimty_core::force::{Kilonewton, Newtons};
//! use dimty_core::length::Meters;
//!
//! let work = Newtons::new(2.0) * Meters::new(3.0);
//! assert!((work.value() - 6.0).abs() < 1e-12);
//! assert!((Newtons::new(1500.0).to::<Kilonewton>().value() - 1.5).abs() < 1e-12);
//! ```

use crate::mass::Kilogram;
use crate::velocity::MeterPerSecondSquared;
use crate::{Prod, Quantity, Rational};
use dimty_derive::UnitMarker;

/// Newton (`kg·m/s²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "N", from = Prod<Kilogram, MeterPerSecondSquared>)]
pub struct Newton;
/// A quantity measured in newtons.
pub type Newtons = Quantity<Newton>;

/// Kilonewton (`1e3 N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "kN", from = Newton, global = Rational::KILO)]
pub struct Kilonewton;
/// A quantity measured in kilonewtons.
pub type Kilonewtons = Quantity<Kilonewton>;

/// Meganewton (`1e6 N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "MN", from = Newton, global = Rational::MEGA)]
pub struct Meganewton;
/// A quantity measured in meganewtons.
pub type Meganewtons = Quantity<Meganewton>;

crate::impl_unit_conversions!(Newton, Kilonewton, Meganewton);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Meters;
    use crate::mass::Kilograms;
    use crate::time::Seconds;
    use crate::{Dimension, Symbol, UnitMarker};
    use approx::assert_relative_eq;

    #[test]
    fn newton_is_coherent() {
        assert_eq!(Newton::UNIT.dim(), Dimension::FORCE);
        assert_eq!(Newton::UNIT.scale(), 1.0);
    }

    #[test]
    fn mass_times_acceleration() {
        let f = Kilograms::new(3.0) * (Meters::new(8.0) / Seconds::new(2.0) / Seconds::new(2.0));
        let n: Newtons = f.to();
        assert_relative_eq!(n.value(), 6.0);
    }

    #[test]
    fn prefixed_newtons() {
        let mn: Meganewtons = Kilonewtons::new(2500.0).into();
        assert_relative_eq!(mn.value(), 2.5);
        assert_eq!(Kilonewton::UNIT.to_string(), "1000×mkgs^-2");
        assert_eq!(Symbol::<Kilonewton>::new().to_string(), "kN");
    }
}
