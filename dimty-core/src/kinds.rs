//! Quantity aliases by kind.
//!
//! `Length<U>` documents intent at a use site but does not by itself constrain `U`; the dimension is checked
//! wherever the quantity meets another one, or explicitly with [`has_dimension`].
//!
//! ```rust
//! use dimty_core::kinds::{has_dimension, Length, Velocity};
//! use dimty_core::length::Kilometer;
//! use dimty_core::time::Hour;
//! use dimty_core::{Dimension, Quot};
//!
//! fn trip(distance: Length<Kilometer>, speed: Velocity<Quot<Kilometer, Hour>>) -> f64 {
//!     (distance / speed).value()
//! }
//!
//! assert!((trip(Length::new(150.0), Velocity::new(100.0)) - 1.5).abs() < 1e-12);
//! assert!(has_dimension::<Kilometer>(Dimension::LENGTH));
//! assert!(!has_dimension::<Hour>(Dimension::LENGTH));
//! ```

use crate::{Dimension, Quantity, UnitMarker};

/// `true` when the unit `U` measures `dim`.
pub const fn has_dimension<U: UnitMarker>(dim: Dimension) -> bool {
    U::UNIT.dim().const_eq(&dim)
}

/// A length.
pub type Length<U, R = f64> = Quantity<U, R>;
/// A mass.
pub type Mass<U, R = f64> = Quantity<U, R>;
/// A duration.
pub type Time<U, R = f64> = Quantity<U, R>;
/// An electric current.
pub type Current<U, R = f64> = Quantity<U, R>;
/// A thermodynamic temperature.
pub type Temperature<U, R = f64> = Quantity<U, R>;
/// An amount of substance.
pub type Amount<U, R = f64> = Quantity<U, R>;
/// A luminous intensity.
pub type LuminousIntensity<U, R = f64> = Quantity<U, R>;
/// A plane angle.
pub type Angle<U, R = f64> = Quantity<U, R>;
/// An amount of money.
pub type Currency<U, R = f64> = Quantity<U, R>;
/// An amount of information.
pub type Info<U, R = f64> = Quantity<U, R>;
/// A dimensionless number.
pub type Dimensionless<U, R = f64> = Quantity<U, R>;
/// An area.
pub type Area<U, R = f64> = Quantity<U, R>;
/// A volume.
pub type Volume<U, R = f64> = Quantity<U, R>;
/// A mass density.
pub type Density<U, R = f64> = Quantity<U, R>;
/// A velocity.
pub type Velocity<U, R = f64> = Quantity<U, R>;
/// An acceleration.
pub type Acceleration<U, R = f64> = Quantity<U, R>;
/// A force.
pub type Force<U, R = f64> = Quantity<U, R>;
/// An energy.
pub type Energy<U, R = f64> = Quantity<U, R>;
/// A power.
pub type Power<U, R = f64> = Quantity<U, R>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::Calorie;
    use crate::length::{Liter, Meter};
    use crate::velocity::KilometerPerHour;

    #[test]
    fn has_dimension_matches_units() {
        assert!(has_dimension::<Meter>(Dimension::LENGTH));
        assert!(has_dimension::<Liter>(Dimension::VOLUME));
        assert!(has_dimension::<KilometerPerHour>(Dimension::VELOCITY));
        assert!(has_dimension::<Calorie>(Dimension::ENERGY));
        assert!(!has_dimension::<Calorie>(Dimension::POWER));
    }

    #[test]
    fn has_dimension_in_const_context() {
        const IS_LENGTH: bool = has_dimension::<Meter>(Dimension::LENGTH);
        assert!(IS_LENGTH);
    }
}
