//! Plane angle units.
//!
//! Angle is an extra base dimension, so radians and metres never mix. [`Degree`] is a real unit: its factor
//! `π/180` cannot be expressed as a rational.
//!
//! ```rust
//! use dimty_core::angle::{Degrees, Radian};
//!
//! let right = Degrees::new(90.0);
//! assert!((right.to::<Radian>().value() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use crate::{Dimension, Quantity};
use core::f64::consts::PI;
use dimty_derive::UnitMarker;

/// Radian (coherent angle unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::ANGLE)]
pub struct Radian;
/// Type alias shorthand for [`Radian`].
pub type Rad = Radian;
/// A quantity measured in radians.
pub type Radians = Quantity<Rad>;

/// Degree (`π/180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(symbol = "deg", dimension = Dimension::ANGLE, factor = PI / 180.0)]
pub struct Degree;
/// Type alias shorthand for [`Degree`].
pub type Deg = Degree;
/// A quantity measured in degrees.
pub type Degrees = Quantity<Deg>;

crate::impl_unit_conversions!(Radian, Degree);

impl Radians {
    /// Sine of the angle.
    #[cfg(feature = "std")]
    #[inline]
    pub fn sin(&self) -> f64 {
        self.value().sin()
    }

    /// Cosine of the angle.
    #[cfg(feature = "std")]
    #[inline]
    pub fn cos(&self) -> f64 {
        self.value().cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Symbol, UnitMarker};
    use approx::assert_relative_eq;

    #[test]
    fn degree_factor() {
        assert!(Degree::UNIT.is_real());
        assert_relative_eq!(Degrees::new(180.0).base_value(), PI, max_relative = 1e-15);
        assert_relative_eq!(Radians::new(PI).to::<Degree>().value(), 180.0, max_relative = 1e-12);
    }

    #[test]
    fn degrees_plus_radians_keeps_radians() {
        let sum = Degrees::new(90.0).add_common(Radians::new(PI / 2.0));
        assert_eq!(sum.unit_of(), Radian::UNIT);
        assert_relative_eq!(sum.value(), PI, max_relative = 1e-12);
    }

    #[cfg(feature = "std")]
    #[test]
    fn trig() {
        let a: Radians = Degrees::new(30.0).into();
        assert_relative_eq!(a.sin(), 0.5, max_relative = 1e-12);
        assert_relative_eq!(a.cos(), 3f64.sqrt() / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn symbols() {
        assert_eq!(Symbol::<Radian>::new().to_string(), "rad");
        assert_eq!(Symbol::<Degree>::new().to_string(), "deg");
        assert_eq!(Degree::UNIT.to_string(), format!("{}×rad", PI / 180.0));
    }
}
