//! Velocity and acceleration units.
//!
//! Velocities are quotients of a length and a time unit. Any pair works:
//!
//! ```rust
//! use dimty_core::length::Kilometer;
//! use dimty_core::time::Hour;
//! use dimty_core::velocity::{KilometersPerHour, MeterPerSecond};
//! use dimty_core::{Quantity, Quot};
//!
//! let v = KilometersPerHour::new(72.0);
//! assert!((v.to::<MeterPerSecond>().value() - 20.0).abs() < 1e-12);
//!
//! let same: Quantity<Quot<Kilometer, Hour>> = Quantity::new(72.0);
//! assert!(same == v);
//! ```

use crate::length::{Angstrom, Kilometer, Meter};
use crate::time::{Hour, Second};
use crate::{Pow, Quantity, Quot};
use dimty_derive::UnitMarker;

/// Metre per second.
pub type MeterPerSecond = Quot<Meter, Second>;
/// A quantity measured in metres per second.
pub type MetersPerSecond = Quantity<MeterPerSecond>;

/// Kilometre per hour.
pub type KilometerPerHour = Quot<Kilometer, Hour>;
/// A quantity measured in kilometres per hour.
pub type KilometersPerHour = Quantity<KilometerPerHour>;

/// Ångström per second.
pub type AngstromPerSecond = Quot<Angstrom, Second>;
/// A quantity measured in ångströms per second.
pub type AngstromsPerSecond = Quantity<AngstromPerSecond>;

/// Speed of light in vacuum (`299 792 458 m/s`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "c", from = MeterPerSecond, factor = 299_792_458.0)]
pub struct SpeedOfLight;
/// A velocity expressed as a fraction of the speed of light.
pub type LightSpeeds = Quantity<SpeedOfLight>;

crate::impl_unit_conversions!(MeterPerSecond, KilometerPerHour, AngstromPerSecond, SpeedOfLight);

/// Metre per second squared.
pub type MeterPerSecondSquared = Quot<Meter, Pow<Second, 2>>;
/// A quantity measured in metres per second squared.
pub type MetersPerSecondSquared = Quantity<MeterPerSecondSquared>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Meters;
    use crate::time::Seconds;
    use crate::{Dimension, Symbol, UnitMarker};
    use approx::assert_relative_eq;

    #[test]
    fn kmh_to_mps() {
        let v = KilometersPerHour::new(72.0);
        assert_relative_eq!(v.to::<MeterPerSecond>().value(), 20.0, max_relative = 1e-12);
    }

    #[test]
    fn length_over_time() {
        let v = Meters::new(10.0) / Seconds::new(2.0);
        let mps: MetersPerSecond = v;
        assert_relative_eq!(mps.value(), 5.0);
    }

    #[test]
    fn speed_of_light_is_real() {
        assert!(SpeedOfLight::UNIT.is_real());
        let half_c = LightSpeeds::new(0.5);
        assert_relative_eq!(half_c.to::<MeterPerSecond>().value(), 149_896_229.0);
    }

    #[test]
    fn acceleration() {
        let a = MetersPerSecond::new(9.0) / Seconds::new(3.0);
        let g: MetersPerSecondSquared = a.to();
        assert_relative_eq!(g.value(), 3.0);
        assert_eq!(MeterPerSecondSquared::UNIT.dim(), Dimension::ACCELERATION);
    }

    #[test]
    fn symbols() {
        assert_eq!(Symbol::<MeterPerSecond>::new().to_string(), "ms^-1");
        assert_eq!(Symbol::<KilometerPerHour>::new().to_string(), "kmh^-1");
        assert_eq!(Symbol::<AngstromPerSecond>::new().to_string(), "Ås^-1");
        assert_eq!(Symbol::<MeterPerSecondSquared>::new().to_string(), "ms^-2");
    }
}
