//! Exact rational numbers used for unit scale factors.
//!
//! A [`Rational`] is always held in reduced form with a strictly positive denominator, so the derived
//! `PartialEq`/`Hash` agree with numeric equality.
//!
//! ```rust
//! use dimty_core::Rational;
//!
//! let r = Rational::new(6, -4);
//! assert_eq!((r.num(), r.den()), (-3, 2));
//! assert_eq!(r.powi(-2), Rational::new(4, 9));
//! ```

use crate::error::{UnitError, UnitResult};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Div, Mul};

/// A reduced fraction `num / den` with `den > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRational", into = "RawRational")
)]
pub struct Rational {
    num: i64,
    den: i64,
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Unwraps a rational result in `const` context.
pub(crate) const fn expect_rational(result: UnitResult<Rational>) -> Rational {
    match result {
        Ok(r) => r,
        Err(err) => err.panic(),
    }
}

impl Rational {
    /// `0/1`.
    pub const ZERO: Self = Self { num: 0, den: 1 };
    /// `1/1`, the multiplicative identity.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// `10^-15`.
    pub const FEMTO: Self = Self::new(1, 1_000_000_000_000_000);
    /// `10^-12`.
    pub const PICO: Self = Self::new(1, 1_000_000_000_000);
    /// `10^-9`.
    pub const NANO: Self = Self::new(1, 1_000_000_000);
    /// `10^-6`.
    pub const MICRO: Self = Self::new(1, 1_000_000);
    /// `10^-3`.
    pub const MILLI: Self = Self::new(1, 1_000);
    /// `10^-2`.
    pub const CENTI: Self = Self::new(1, 100);
    /// `10^-1`.
    pub const DECI: Self = Self::new(1, 10);
    /// `10^3`.
    pub const KILO: Self = Self::new(1_000, 1);
    /// `10^6`.
    pub const MEGA: Self = Self::new(1_000_000, 1);
    /// `10^9`.
    pub const GIGA: Self = Self::new(1_000_000_000, 1);
    /// `10^12`.
    pub const TERA: Self = Self::new(1_000_000_000_000, 1);

    /// Builds and reduces `num / den`.
    ///
    /// # Panics
    ///
    /// If `den == 0`, or if either argument is `i64::MIN`. In a `const` item this is a compile error.
    pub const fn new(num: i64, den: i64) -> Self {
        expect_rational(Self::try_new(num, den))
    }

    /// Fallible form of [`Rational::new`].
    ///
    /// ```rust
    /// use dimty_core::{Rational, UnitError};
    ///
    /// assert_eq!(Rational::try_new(1, 0), Err(UnitError::ZeroDenominator));
    /// ```
    pub const fn try_new(num: i64, den: i64) -> UnitResult<Self> {
        if den == 0 {
            return Err(UnitError::ZeroDenominator);
        }
        if num == i64::MIN || den == i64::MIN {
            return Err(UnitError::Overflow);
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        Ok(Self { num, den })
    }

    /// An integer as a rational.
    pub const fn integer(value: i64) -> Self {
        Self::new(value, 1)
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn num(&self) -> i64 {
        self.num
    }

    /// Denominator, always positive.
    #[inline]
    pub const fn den(&self) -> i64 {
        self.den
    }

    /// `true` for `0/1`.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// `true` for `1/1`.
    #[inline]
    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Floating-point approximation `num / den`.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Product, cross-reducing first so intermediate terms stay small.
    pub const fn try_mul(self, rhs: Self) -> UnitResult<Self> {
        let g1 = gcd(self.num.unsigned_abs(), rhs.den.unsigned_abs()) as i64;
        let g2 = gcd(rhs.num.unsigned_abs(), self.den.unsigned_abs()) as i64;
        // g1 == 0 only when both terms are zero, which a valid denominator rules out.
        let num = match (self.num / g1).checked_mul(rhs.num / g2) {
            Some(n) => n,
            None => return Err(UnitError::Overflow),
        };
        let den = match (self.den / g2).checked_mul(rhs.den / g1) {
            Some(d) => d,
            None => return Err(UnitError::Overflow),
        };
        Self::try_new(num, den)
    }

    /// Multiplicative inverse. Zero has none.
    pub const fn try_recip(self) -> UnitResult<Self> {
        Self::try_new(self.den, self.num)
    }

    /// Quotient.
    pub const fn try_div(self, rhs: Self) -> UnitResult<Self> {
        match rhs.try_recip() {
            Ok(inv) => self.try_mul(inv),
            Err(err) => Err(err),
        }
    }

    /// Integer power. `k == 0` yields one for every base, zero included; negative `k` inverts first.
    pub const fn try_powi(self, k: i32) -> UnitResult<Self> {
        if k == 0 {
            return Ok(Self::ONE);
        }
        let mut base = if k < 0 {
            match self.try_recip() {
                Ok(inv) => inv,
                Err(err) => return Err(err),
            }
        } else {
            self
        };
        let mut exp = k.unsigned_abs();
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = match acc.try_mul(base) {
                    Ok(r) => r,
                    Err(err) => return Err(err),
                };
            }
            exp >>= 1;
            if exp > 0 {
                base = match base.try_mul(base) {
                    Ok(r) => r,
                    Err(err) => return Err(err),
                };
            }
        }
        Ok(acc)
    }

    /// Product. Panics on overflow.
    #[inline]
    pub const fn mul(self, rhs: Self) -> Self {
        expect_rational(self.try_mul(rhs))
    }

    /// Quotient. Panics on overflow or a zero divisor.
    #[inline]
    pub const fn div(self, rhs: Self) -> Self {
        expect_rational(self.try_div(rhs))
    }

    /// Inverse. Panics for zero.
    #[inline]
    pub const fn recip(self) -> Self {
        expect_rational(self.try_recip())
    }

    /// Integer power. Panics on overflow or when inverting zero.
    #[inline]
    pub const fn powi(self, k: i32) -> Self {
        expect_rational(self.try_powi(k))
    }

    /// Total order by numeric value, usable in `const` context.
    pub const fn const_cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication keeps the order; i128 cannot overflow here.
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        if lhs < rhs {
            Ordering::Less
        } else if lhs > rhs {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Equality usable in `const` context.
    #[inline]
    pub const fn const_eq(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.const_cmp(other)
    }
}

impl Mul for Rational {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Rational::mul(self, rhs)
    }
}

impl Div for Rational {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Rational::div(self, rhs)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Wire form of a rational; validated and reduced on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawRational {
    num: i64,
    den: i64,
}

#[cfg(feature = "serde")]
impl From<Rational> for RawRational {
    fn from(r: Rational) -> Self {
        Self {
            num: r.num,
            den: r.den,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawRational> for Rational {
    type Error = UnitError;

    fn try_from(raw: RawRational) -> UnitResult<Self> {
        Rational::try_new(raw.num, raw.den)
    }
}
