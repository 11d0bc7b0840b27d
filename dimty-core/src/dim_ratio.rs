//! Per-dimension scale ratios.
//!
//! A [`DimensionRatio`] mirrors [`Dimension`] slot for slot, but each slot holds the [`Rational`] scale contributed by
//! the unit chosen for that base quantity. Building `km/h` from `km` and `h` yields `1000` in the length slot and
//! `1/3600` in the time slot; the overall factor is the product of all slots.

use crate::dimension::{BaseDim, Dimension};
use crate::error::{UnitError, UnitResult};
use crate::pack::RatioPack;
use crate::rational::Rational;

/// Rational scale per base quantity, in the same slot order as [`Dimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionRatio {
    si: RatioPack<7>,
    extra: RatioPack<4>,
}

const fn expect_ratio(result: UnitResult<DimensionRatio>) -> DimensionRatio {
    match result {
        Ok(r) => r,
        Err(err) => err.panic(),
    }
}

impl DimensionRatio {
    /// Every slot `1/1`.
    pub const IDENTITY: Self = Self::from_packs(RatioPack::<7>::IDENTITY, RatioPack::<4>::IDENTITY);

    /// Builds a ratio vector from packs.
    pub const fn from_packs(si: RatioPack<7>, extra: RatioPack<4>) -> Self {
        Self { si, extra }
    }

    /// Places `ratio` in the slot of the sole non-zero exponent of `dim`, identity everywhere else.
    ///
    /// # Panics
    ///
    /// If `dim` is not simple. In a `const` item this is a compile error.
    ///
    /// ```rust
    /// use dimty_core::{BaseDim, Dimension, DimensionRatio, Rational, SiDim};
    ///
    /// let cm = DimensionRatio::single(Dimension::LENGTH, Rational::CENTI);
    /// assert_eq!(cm.get(BaseDim::Si(SiDim::Length)), Rational::CENTI);
    /// assert_eq!(cm.get(BaseDim::Si(SiDim::Time)), Rational::ONE);
    /// ```
    pub const fn single(dim: Dimension, ratio: Rational) -> Self {
        expect_ratio(Self::try_single(dim, ratio))
    }

    /// Fallible form of [`DimensionRatio::single`].
    pub const fn try_single(dim: Dimension, ratio: Rational) -> UnitResult<Self> {
        match dim.simple_base() {
            Some(BaseDim::Si(d)) => Ok(Self::from_packs(
                RatioPack::make_single(d.index(), ratio),
                RatioPack::<4>::IDENTITY,
            )),
            Some(BaseDim::Extra(d)) => Ok(Self::from_packs(
                RatioPack::<7>::IDENTITY,
                RatioPack::make_single(d.index(), ratio),
            )),
            None => Err(UnitError::NotSimpleDimension(dim)),
        }
    }

    /// SI slot ratios.
    #[inline]
    pub const fn si_pack(&self) -> &RatioPack<7> {
        &self.si
    }

    /// Extra slot ratios.
    #[inline]
    pub const fn extra_pack(&self) -> &RatioPack<4> {
        &self.extra
    }

    /// Ratio held for one base quantity.
    pub const fn get(&self, d: BaseDim) -> Rational {
        match d {
            BaseDim::Si(s) => self.si.get(s.index()),
            BaseDim::Extra(e) => self.extra.get(e.index()),
        }
    }

    /// Slot-wise product.
    pub const fn try_mul(&self, rhs: &Self) -> UnitResult<Self> {
        let si = match self.si.try_mul(&rhs.si) {
            Ok(p) => p,
            Err(err) => return Err(err),
        };
        match self.extra.try_mul(&rhs.extra) {
            Ok(extra) => Ok(Self::from_packs(si, extra)),
            Err(err) => Err(err),
        }
    }

    /// Slot-wise quotient.
    pub const fn try_div(&self, rhs: &Self) -> UnitResult<Self> {
        let si = match self.si.try_div(&rhs.si) {
            Ok(p) => p,
            Err(err) => return Err(err),
        };
        match self.extra.try_div(&rhs.extra) {
            Ok(extra) => Ok(Self::from_packs(si, extra)),
            Err(err) => Err(err),
        }
    }

    /// Every slot raised to `k`.
    pub const fn try_powi(&self, k: i32) -> UnitResult<Self> {
        let si = match self.si.try_powi(k) {
            Ok(p) => p,
            Err(err) => return Err(err),
        };
        match self.extra.try_powi(k) {
            Ok(extra) => Ok(Self::from_packs(si, extra)),
            Err(err) => Err(err),
        }
    }

    /// Slot-wise product. Panics on overflow.
    #[inline]
    pub const fn mul(&self, rhs: &Self) -> Self {
        expect_ratio(self.try_mul(rhs))
    }

    /// Slot-wise quotient. Panics on overflow.
    #[inline]
    pub const fn div(&self, rhs: &Self) -> Self {
        expect_ratio(self.try_div(rhs))
    }

    /// Every slot raised to `k`. Panics on overflow.
    #[inline]
    pub const fn powi(&self, k: i32) -> Self {
        expect_ratio(self.try_powi(k))
    }

    /// Product of all eleven slots in floating point.
    pub const fn value(&self) -> f64 {
        self.si.value() * self.extra.value()
    }

    /// `true` when every slot is one.
    pub const fn is_identity(&self) -> bool {
        self.si.count_non_identity() == 0 && self.extra.count_non_identity() == 0
    }

    /// Equality usable in `const` context.
    pub const fn const_eq(&self, other: &Self) -> bool {
        self.si.const_eq(&other.si) && self.extra.const_eq(&other.extra)
    }
}

impl Default for DimensionRatio {
    fn default() -> Self {
        Self::IDENTITY
    }
}
