//! Value-level units.
//!
//! A [`Unit`] combines a [`Dimension`], the per-slot [`DimensionRatio`], a global [`Rational`] scale and an optional
//! real factor for conversions that are not rational (calories, degrees, the speed of light). Every operation is a
//! `const fn`, so the unit of a composite type is computed by the compiler.
//!
//! # Scale
//!
//! `scale = factor × Π(ratio slots) × global` is the size of the unit relative to the coherent SI unit of its
//! dimension. A quantity stores `value × scale`.
//!
//! # Common unit
//!
//! When two compatible units meet in an addition, [`Unit::common`] picks the unit of the result:
//!
//! 1. if exactly one unit has a factor of one, that unit;
//! 2. if neither does, the left unit;
//! 3. if both do, the one with the smaller scale, the left unit on a tie.
//!
//! ```rust
//! use dimty_core::{Dimension, Rational, Unit};
//!
//! const CM: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
//! const M: Unit = Unit::new(Dimension::LENGTH);
//!
//! assert_eq!(CM.scale(), 0.01);
//! assert_eq!(M.common(&CM), CM);
//! assert_eq!(CM.common(&M), CM);
//! ```

use crate::dim_ratio::DimensionRatio;
use crate::dimension::Dimension;
use crate::error::{UnitError, UnitResult};
use crate::rational::Rational;

/// A unit of measurement.
///
/// `factor` is `None` for units whose scale is purely rational. Once a real factor enters a product it stays, even if
/// it cancels to one (`c / c` is still a real unit with factor `1.0`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    dim: Dimension,
    ratio: DimensionRatio,
    global: Rational,
    factor: Option<f64>,
}

const fn expect_unit(result: UnitResult<Unit>) -> Unit {
    match result {
        Ok(u) => u,
        Err(err) => err.panic(),
    }
}

/// Real factor of a combination: kept when either side was real or the product differs from one.
const fn combine_factor(any_real: bool, factor: f64) -> Option<f64> {
    if !any_real && factor == 1.0 {
        None
    } else {
        Some(factor)
    }
}

/// `x^k` by repeated squaring; negative `k` gives `1 / x^|k|`.
const fn powi_f64(x: f64, k: i32) -> f64 {
    let mut exp = k.unsigned_abs();
    let mut base = x;
    let mut acc = 1.0;
    while exp > 0 {
        if exp & 1 == 1 {
            acc *= base;
        }
        base *= base;
        exp >>= 1;
    }
    if k < 0 {
        1.0 / acc
    } else {
        acc
    }
}

impl Unit {
    /// The dimensionless unit with scale one.
    pub const DIMENSIONLESS: Self = Self::new(Dimension::DIMENSIONLESS);

    /// The coherent SI unit of `dim` (scale one).
    pub const fn new(dim: Dimension) -> Self {
        Self {
            dim,
            ratio: DimensionRatio::IDENTITY,
            global: Rational::ONE,
            factor: None,
        }
    }

    /// A unit of a simple dimension scaled by `ratio` in its slot.
    ///
    /// # Panics
    ///
    /// If `dim` is not simple.
    ///
    /// ```rust
    /// use dimty_core::{Dimension, Rational, Unit};
    ///
    /// let hour = Unit::base(Dimension::TIME, Rational::integer(3600));
    /// assert_eq!(hour.scale(), 3600.0);
    /// ```
    pub const fn base(dim: Dimension, ratio: Rational) -> Self {
        expect_unit(Self::try_base(dim, ratio))
    }

    /// Fallible form of [`Unit::base`].
    pub const fn try_base(dim: Dimension, ratio: Rational) -> UnitResult<Self> {
        match DimensionRatio::try_single(dim, ratio) {
            Ok(ratio) => Ok(Self::from_parts(dim, ratio, Rational::ONE, None)),
            Err(err) => Err(err),
        }
    }

    /// Assembles a unit from its parts. A factor of `Some(_)` makes it a real unit.
    pub const fn from_parts(
        dim: Dimension,
        ratio: DimensionRatio,
        global: Rational,
        factor: Option<f64>,
    ) -> Self {
        Self {
            dim,
            ratio,
            global,
            factor,
        }
    }

    /// This unit with its global scale multiplied by `global`.
    ///
    /// Used for prefixed units of compound dimensions, e.g. `kN` is `N` scaled by `10^3`.
    pub const fn with_global(self, global: Rational) -> Self {
        Self {
            global: self.global.mul(global),
            ..self
        }
    }

    /// This unit multiplied by the real factor `factor`; the result is a real unit.
    pub const fn with_factor(self, factor: f64) -> Self {
        Self {
            factor: Some(self.factor() * factor),
            ..self
        }
    }

    /// Dimension.
    #[inline]
    pub const fn dim(&self) -> Dimension {
        self.dim
    }

    /// Per-slot ratios.
    #[inline]
    pub const fn ratio(&self) -> DimensionRatio {
        self.ratio
    }

    /// Global rational scale.
    #[inline]
    pub const fn global(&self) -> Rational {
        self.global
    }

    /// Real factor, `1.0` for rational units.
    #[inline]
    pub const fn factor(&self) -> f64 {
        match self.factor {
            Some(f) => f,
            None => 1.0,
        }
    }

    /// `true` when the unit carries a real factor.
    #[inline]
    pub const fn is_real(&self) -> bool {
        self.factor.is_some()
    }

    /// Size of this unit relative to the coherent SI unit of its dimension.
    pub const fn scale(&self) -> f64 {
        self.factor() * self.ratio.value() * self.global.value()
    }

    /// Rational part of the scale (ratio slots times global), ignoring the real factor.
    pub const fn try_rational_scale(&self) -> UnitResult<Rational> {
        let si = match self.ratio.si_pack().try_product() {
            Ok(r) => r,
            Err(err) => return Err(err),
        };
        let extra = match self.ratio.extra_pack().try_product() {
            Ok(r) => r,
            Err(err) => return Err(err),
        };
        match si.try_mul(extra) {
            Ok(r) => r.try_mul(self.global),
            Err(err) => Err(err),
        }
    }

    /// `true` when both units measure the same dimension. Scales are irrelevant.
    #[inline]
    pub const fn is_compatible(&self, other: &Self) -> bool {
        self.dim.const_eq(&other.dim)
    }

    /// Product of two units.
    pub const fn try_mul(&self, rhs: &Self) -> UnitResult<Self> {
        let ratio = match self.ratio.try_mul(&rhs.ratio) {
            Ok(r) => r,
            Err(err) => return Err(err),
        };
        let global = match self.global.try_mul(rhs.global) {
            Ok(g) => g,
            Err(err) => return Err(err),
        };
        Ok(Self::from_parts(
            self.dim.mul(&rhs.dim),
            ratio,
            global,
            combine_factor(self.is_real() || rhs.is_real(), self.factor() * rhs.factor()),
        ))
    }

    /// Quotient of two units.
    pub const fn try_div(&self, rhs: &Self) -> UnitResult<Self> {
        let ratio = match self.ratio.try_div(&rhs.ratio) {
            Ok(r) => r,
            Err(err) => return Err(err),
        };
        let global = match self.global.try_div(rhs.global) {
            Ok(g) => g,
            Err(err) => return Err(err),
        };
        Ok(Self::from_parts(
            self.dim.div(&rhs.dim),
            ratio,
            global,
            combine_factor(self.is_real() || rhs.is_real(), self.factor() / rhs.factor()),
        ))
    }

    /// Integer power of a unit.
    pub const fn try_powi(&self, k: i32) -> UnitResult<Self> {
        let ratio = match self.ratio.try_powi(k) {
            Ok(r) => r,
            Err(err) => return Err(err),
        };
        let global = match self.global.try_powi(k) {
            Ok(g) => g,
            Err(err) => return Err(err),
        };
        Ok(Self::from_parts(
            self.dim.powi(k),
            ratio,
            global,
            combine_factor(self.is_real(), powi_f64(self.factor(), k)),
        ))
    }

    /// Product of two units. Panics on rational overflow.
    #[inline]
    pub const fn mul(&self, rhs: &Self) -> Self {
        expect_unit(self.try_mul(rhs))
    }

    /// Quotient of two units. Panics on rational overflow.
    #[inline]
    pub const fn div(&self, rhs: &Self) -> Self {
        expect_unit(self.try_div(rhs))
    }

    /// Integer power of a unit. Panics on rational overflow.
    #[inline]
    pub const fn powi(&self, k: i32) -> Self {
        expect_unit(self.try_powi(k))
    }

    /// `true` when [`Unit::common`] keeps `self`, `false` when it picks `other`.
    ///
    /// A unit without real factor beats one with a factor; between two plain units the smaller scale wins; every
    /// other case, ties included, keeps `self`.
    pub const fn try_common_keeps_left(&self, other: &Self) -> UnitResult<bool> {
        if !self.is_compatible(other) {
            return Err(UnitError::IncompatibleUnits {
                left: self.dim,
                right: other.dim,
            });
        }
        let left_plain = self.factor() == 1.0;
        let right_plain = other.factor() == 1.0;
        let keeps_left = match (left_plain, right_plain) {
            (true, false) => true,
            (false, true) => false,
            (false, false) => true,
            (true, true) => other.scale() >= self.scale(),
        };
        Ok(keeps_left)
    }

    /// Unit of the result when adding a quantity in `other` to one in `self`.
    pub const fn try_common(&self, other: &Self) -> UnitResult<Self> {
        match self.try_common_keeps_left(other) {
            Ok(true) => Ok(*self),
            Ok(false) => Ok(*other),
            Err(err) => Err(err),
        }
    }

    /// Unit of the result when adding a quantity in `other` to one in `self`.
    ///
    /// # Panics
    ///
    /// If the units are incompatible.
    #[inline]
    pub const fn common(&self, other: &Self) -> Self {
        expect_unit(self.try_common(other))
    }

    /// Panicking form of [`Unit::try_common_keeps_left`].
    #[inline]
    pub const fn common_keeps_left(&self, other: &Self) -> bool {
        match self.try_common_keeps_left(other) {
            Ok(keeps_left) => keeps_left,
            Err(err) => err.panic(),
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{BaseDim, SiDim};
    use approx::assert_relative_eq;

    const M: Unit = Unit::new(Dimension::LENGTH);
    const CM: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
    const KM: Unit = Unit::base(Dimension::LENGTH, Rational::KILO);
    const S: Unit = Unit::new(Dimension::TIME);
    const H: Unit = Unit::base(Dimension::TIME, Rational::integer(3600));
    const KG: Unit = Unit::new(Dimension::MASS);
    const J: Unit = Unit::new(Dimension::ENERGY);
    const CAL: Unit = J.with_factor(4.184);
    const DEG: Unit = Unit::new(Dimension::ANGLE).with_factor(core::f64::consts::PI / 180.0);

    #[test]
    fn base_keeps_the_slot_ratio_unraised() {
        let area = Unit::base(Dimension::AREA, Rational::CENTI);
        assert_relative_eq!(area.scale(), 0.01);
        assert_relative_eq!(CM.powi(2).scale(), 1e-4);
        assert_eq!(area.to_string(), "dm^2");
    }

    #[test]
    fn scale_of_plain_units() {
        assert_eq!(M.scale(), 1.0);
        assert_eq!(CM.scale(), 0.01);
        assert_eq!(KM.scale(), 1000.0);
        assert!(!CM.is_real());
    }

    #[test]
    fn scale_of_real_units() {
        assert_eq!(CAL.scale(), 4.184);
        assert!(CAL.is_real());
        let kcal = CAL.with_global(Rational::KILO);
        assert_relative_eq!(kcal.scale(), 4184.0, max_relative = 1e-15);
        assert_eq!(kcal.global(), Rational::KILO);
    }

    #[test]
    fn product_combines_all_parts() {
        let kmh = KM.div(&H);
        assert_eq!(kmh.dim(), Dimension::VELOCITY);
        assert_eq!(kmh.ratio().get(BaseDim::Si(SiDim::Length)), Rational::KILO);
        assert_eq!(kmh.ratio().get(BaseDim::Si(SiDim::Time)), Rational::new(1, 3600));
        assert_relative_eq!(kmh.scale(), 1.0 / 3.6, max_relative = 1e-15);
        assert!(!kmh.is_real());

        let area = CM.mul(&CM);
        assert_eq!(area.dim(), Dimension::AREA);
        assert_eq!(area.ratio().get(BaseDim::Si(SiDim::Length)), Rational::new(1, 10_000));
        assert_eq!(area, CM.powi(2));
    }

    #[test]
    fn realness_is_sticky() {
        let cal_per_kg = CAL.div(&KG);
        assert!(cal_per_kg.is_real());
        assert_eq!(cal_per_kg.factor(), 4.184);

        let cancelled = CAL.div(&CAL);
        assert!(cancelled.is_real());
        assert_eq!(cancelled.factor(), 1.0);
        assert!(cancelled.dim().is_dimensionless());
    }

    #[test]
    fn negative_power_inverts_factor() {
        let per_deg2 = DEG.powi(-2);
        let deg = core::f64::consts::PI / 180.0;
        assert_relative_eq!(per_deg2.factor(), 1.0 / (deg * deg), max_relative = 1e-12);
        assert_eq!(per_deg2.dim(), Dimension::ANGLE.powi(-2));
        assert_eq!(DEG.powi(0).factor(), 1.0);
        assert!(DEG.powi(0).is_real());
    }

    #[test]
    fn global_scale_survives_algebra() {
        let kn = Unit::new(Dimension::FORCE).with_global(Rational::KILO);
        let knm = kn.mul(&M);
        assert_eq!(knm.global(), Rational::KILO);
        assert_eq!(knm.scale(), 1000.0);
        assert_eq!(kn.powi(2).global(), Rational::MEGA);
        assert_eq!(kn.div(&kn).global(), Rational::ONE);
    }

    #[test]
    fn compatibility_only_looks_at_dimension() {
        assert!(M.is_compatible(&KM));
        assert!(J.is_compatible(&CAL));
        assert!(!M.is_compatible(&KG));
        assert!(!S.is_compatible(&H.powi(2)));
    }

    #[test]
    fn common_prefers_the_single_plain_unit() {
        assert_eq!(J.common(&CAL), J);
        assert_eq!(CAL.common(&J), J);
    }

    #[test]
    fn common_prefers_left_between_real_units() {
        let kcal = CAL.with_global(Rational::KILO);
        assert_eq!(CAL.common(&kcal), CAL);
        assert_eq!(kcal.common(&CAL), kcal);
    }

    #[test]
    fn common_prefers_the_finer_plain_unit() {
        assert_eq!(M.common(&CM), CM);
        assert_eq!(CM.common(&M), CM);
        assert_eq!(KM.common(&M), M);
        assert_eq!(H.common(&S), S);
    }

    #[test]
    fn common_tie_goes_left() {
        // km·ms/s: same scale as the metre, different slot layout.
        let ms = Unit::base(Dimension::TIME, Rational::MILLI);
        let odd = KM.mul(&ms).div(&S);
        assert_ne!(odd, M);
        assert_eq!(odd.scale(), M.scale());
        assert_eq!(odd.common(&M), odd);
        assert_eq!(M.common(&odd), M);
    }

    #[test]
    fn common_keeps_left_reports_the_chosen_side() {
        assert!(CM.common_keeps_left(&M));
        assert!(!M.common_keeps_left(&CM));
        assert!(M.common_keeps_left(&M));
        assert!(!CAL.common_keeps_left(&J));
        assert_eq!(
            S.try_common_keeps_left(&M),
            Err(UnitError::IncompatibleUnits {
                left: Dimension::TIME,
                right: Dimension::LENGTH,
            })
        );
    }

    #[test]
    fn common_rejects_incompatible_units() {
        assert_eq!(
            M.try_common(&KG),
            Err(UnitError::IncompatibleUnits {
                left: Dimension::LENGTH,
                right: Dimension::MASS,
            })
        );
    }

    #[test]
    fn base_rejects_compound_dimensions() {
        assert_eq!(
            Unit::try_base(Dimension::FORCE, Rational::KILO),
            Err(UnitError::NotSimpleDimension(Dimension::FORCE))
        );
    }

    #[test]
    fn rational_scale_is_exact() {
        let kmh = KM.div(&H);
        assert_eq!(kmh.try_rational_scale(), Ok(Rational::new(5, 18)));
        assert_eq!(CAL.try_rational_scale(), Ok(Rational::ONE));
    }

    #[test]
    fn powi_f64_matches_std() {
        assert_eq!(powi_f64(2.0, 10), 1024.0);
        assert_eq!(powi_f64(2.0, -2), 0.25);
        assert_eq!(powi_f64(7.5, 0), 1.0);
    }
}
