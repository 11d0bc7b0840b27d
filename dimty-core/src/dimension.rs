//! Physical dimensions as exponent vectors.
//!
//! A [`Dimension`] holds one integer exponent per base quantity: seven SI slots ([`SiDim`]) followed by four extra
//! slots ([`ExtraDim`]). Multiplying dimensions adds exponents, dividing subtracts them and raising to a power scales
//! them, so `Dimension` forms a free abelian group over the eleven base quantities.
//!
//! ```rust
//! use dimty_core::Dimension;
//!
//! let force = Dimension::MASS.mul(&Dimension::ACCELERATION);
//! assert_eq!(force, Dimension::FORCE);
//! assert_eq!(Dimension::ENERGY.div(&Dimension::TIME), Dimension::POWER);
//! assert!(Dimension::VELOCITY.div(&Dimension::VELOCITY).is_dimensionless());
//! ```

use crate::pack::IntegerPack;
use core::fmt;

/// The seven SI base quantities, in slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SiDim {
    /// Length (`L`).
    Length,
    /// Mass (`M`).
    Mass,
    /// Time (`T`).
    Time,
    /// Electric current (`I`).
    Current,
    /// Thermodynamic temperature (`Θ`).
    Temperature,
    /// Amount of substance (`N`).
    Amount,
    /// Luminous intensity (`J`).
    Luminous,
}

impl SiDim {
    /// Number of SI slots.
    pub const COUNT: usize = 7;

    /// Every SI base quantity in slot order.
    pub const ALL: [SiDim; Self::COUNT] = [
        Self::Length,
        Self::Mass,
        Self::Time,
        Self::Current,
        Self::Temperature,
        Self::Amount,
        Self::Luminous,
    ];

    /// Slot index of this quantity.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Quantity stored at `index`, if any.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Conventional dimension symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Length => "L",
            Self::Mass => "M",
            Self::Time => "T",
            Self::Current => "I",
            Self::Temperature => "Θ",
            Self::Amount => "N",
            Self::Luminous => "J",
        }
    }
}

/// The four non-SI base quantities, in slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtraDim {
    /// Plane angle.
    Angle,
    /// Money.
    Currency,
    /// Information content.
    Information,
    /// Counted entities.
    Count,
}

impl ExtraDim {
    /// Number of extra slots.
    pub const COUNT: usize = 4;

    /// Every extra base quantity in slot order.
    pub const ALL: [ExtraDim; Self::COUNT] = [
        Self::Angle,
        Self::Currency,
        Self::Information,
        Self::Count,
    ];

    /// Slot index of this quantity within the extra pack.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Quantity stored at `index`, if any.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Symbol used when printing dimensions.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Angle => "Angle",
            Self::Currency => "Currency",
            Self::Information => "Info",
            Self::Count => "Count",
        }
    }
}

/// Any of the eleven base quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDim {
    /// One of the SI slots.
    Si(SiDim),
    /// One of the extra slots.
    Extra(ExtraDim),
}

impl BaseDim {
    /// Every base quantity: SI slots first, then extra slots.
    pub const ALL: [BaseDim; SiDim::COUNT + ExtraDim::COUNT] = [
        Self::Si(SiDim::Length),
        Self::Si(SiDim::Mass),
        Self::Si(SiDim::Time),
        Self::Si(SiDim::Current),
        Self::Si(SiDim::Temperature),
        Self::Si(SiDim::Amount),
        Self::Si(SiDim::Luminous),
        Self::Extra(ExtraDim::Angle),
        Self::Extra(ExtraDim::Currency),
        Self::Extra(ExtraDim::Information),
        Self::Extra(ExtraDim::Count),
    ];

    /// Dimension symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Si(d) => d.symbol(),
            Self::Extra(d) => d.symbol(),
        }
    }
}

impl From<SiDim> for BaseDim {
    fn from(d: SiDim) -> Self {
        Self::Si(d)
    }
}

impl From<ExtraDim> for BaseDim {
    fn from(d: ExtraDim) -> Self {
        Self::Extra(d)
    }
}

/// Exponents of the seven SI and four extra base quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    si: IntegerPack<{ SiDim::COUNT }>,
    extra: IntegerPack<{ ExtraDim::COUNT }>,
}

impl Dimension {
    /// All exponents zero.
    pub const DIMENSIONLESS: Self = Self::new([0; 7], [0; 4]);

    /// `L`.
    pub const LENGTH: Self = Self::si(SiDim::Length);
    /// `M`.
    pub const MASS: Self = Self::si(SiDim::Mass);
    /// `T`.
    pub const TIME: Self = Self::si(SiDim::Time);
    /// `I`.
    pub const CURRENT: Self = Self::si(SiDim::Current);
    /// `Θ`.
    pub const TEMPERATURE: Self = Self::si(SiDim::Temperature);
    /// `N`.
    pub const AMOUNT: Self = Self::si(SiDim::Amount);
    /// `J`.
    pub const LUMINOUS: Self = Self::si(SiDim::Luminous);

    /// Plane angle.
    pub const ANGLE: Self = Self::extra(ExtraDim::Angle);
    /// Money.
    pub const CURRENCY: Self = Self::extra(ExtraDim::Currency);
    /// Information.
    pub const INFORMATION: Self = Self::extra(ExtraDim::Information);
    /// Counted entities.
    pub const COUNT: Self = Self::extra(ExtraDim::Count);

    /// `L^2`.
    pub const AREA: Self = Self::LENGTH.powi(2);
    /// `L^3`.
    pub const VOLUME: Self = Self::LENGTH.powi(3);
    /// `M·L^-3`.
    pub const DENSITY: Self = Self::MASS.div(&Self::VOLUME);
    /// `L·T^-1`.
    pub const VELOCITY: Self = Self::LENGTH.div(&Self::TIME);
    /// `L·T^-2`.
    pub const ACCELERATION: Self = Self::VELOCITY.div(&Self::TIME);
    /// `M·L·T^-2`.
    pub const FORCE: Self = Self::MASS.mul(&Self::ACCELERATION);
    /// `M·L^2·T^-2`.
    pub const ENERGY: Self = Self::FORCE.mul(&Self::LENGTH);
    /// `M·L^2·T^-3`.
    pub const POWER: Self = Self::ENERGY.div(&Self::TIME);

    /// Builds a dimension from raw exponents in slot order.
    ///
    /// ```rust
    /// use dimty_core::Dimension;
    ///
    /// // L^1 M^0 T^-2
    /// let d = Dimension::new([1, 0, -2, 0, 0, 0, 0], [0; 4]);
    /// assert_eq!(d, Dimension::ACCELERATION);
    /// ```
    pub const fn new(si: [i32; 7], extra: [i32; 4]) -> Self {
        Self {
            si: IntegerPack::from_array(si),
            extra: IntegerPack::from_array(extra),
        }
    }

    /// Builds a dimension from exponent packs.
    pub const fn from_packs(si: IntegerPack<7>, extra: IntegerPack<4>) -> Self {
        Self { si, extra }
    }

    /// The SI base quantity `d` to the first power.
    pub const fn si(d: SiDim) -> Self {
        Self::from_packs(IntegerPack::make_single(d.index(), 1), IntegerPack::<4>::ZERO)
    }

    /// The extra base quantity `d` to the first power.
    pub const fn extra(d: ExtraDim) -> Self {
        Self::from_packs(IntegerPack::<7>::ZERO, IntegerPack::make_single(d.index(), 1))
    }

    /// The base quantity `d` to the first power.
    pub const fn base(d: BaseDim) -> Self {
        match d {
            BaseDim::Si(s) => Self::si(s),
            BaseDim::Extra(e) => Self::extra(e),
        }
    }

    /// SI exponents.
    #[inline]
    pub const fn si_pack(&self) -> &IntegerPack<7> {
        &self.si
    }

    /// Extra exponents.
    #[inline]
    pub const fn extra_pack(&self) -> &IntegerPack<4> {
        &self.extra
    }

    /// Exponent of one base quantity.
    pub const fn exponent(&self, d: BaseDim) -> i32 {
        match d {
            BaseDim::Si(s) => self.si.get(s.index()),
            BaseDim::Extra(e) => self.extra.get(e.index()),
        }
    }

    /// Product: exponents add.
    pub const fn mul(&self, rhs: &Self) -> Self {
        Self::from_packs(self.si.add(&rhs.si), self.extra.add(&rhs.extra))
    }

    /// Quotient: exponents subtract.
    pub const fn div(&self, rhs: &Self) -> Self {
        Self::from_packs(self.si.sub(&rhs.si), self.extra.sub(&rhs.extra))
    }

    /// Power: exponents scale by `k`.
    pub const fn powi(&self, k: i32) -> Self {
        Self::from_packs(self.si.scale(k), self.extra.scale(k))
    }

    /// Inverse: exponents negate.
    pub const fn recip(&self) -> Self {
        self.powi(-1)
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        self.si.is_zero() && self.extra.is_zero()
    }

    /// Number of non-zero exponents across all eleven slots.
    pub const fn count_non_zero(&self) -> usize {
        self.si.count_non_zero() + self.extra.count_non_zero()
    }

    /// `true` when exactly one exponent is non-zero. Its magnitude is not restricted, so `L^3` is simple.
    pub const fn is_simple(&self) -> bool {
        self.count_non_zero() == 1
    }

    /// The base quantity holding the sole non-zero exponent of a simple dimension.
    pub const fn simple_base(&self) -> Option<BaseDim> {
        if !self.is_simple() {
            return None;
        }
        let si = self.si.first_non_zero_index();
        if si < SiDim::COUNT {
            return match SiDim::from_index(si) {
                Some(d) => Some(BaseDim::Si(d)),
                None => None,
            };
        }
        match ExtraDim::from_index(self.extra.first_non_zero_index()) {
            Some(d) => Some(BaseDim::Extra(d)),
            None => None,
        }
    }

    /// Equality usable in `const` context.
    pub const fn const_eq(&self, other: &Self) -> bool {
        self.si.const_eq(&other.si) && self.extra.const_eq(&other.extra)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl core::ops::Mul for Dimension {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dimension::mul(&self, &rhs)
    }
}

impl core::ops::Div for Dimension {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Dimension::div(&self, &rhs)
    }
}

/// Formats as `M·L^2·T^-2` style products, SI slots first; `1` when dimensionless.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for base in BaseDim::ALL {
            let e = self.exponent(base);
            if e == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if e != 1 {
                write!(f, "^{e}")?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}
