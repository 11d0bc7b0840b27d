//! Fixed-length exponent and ratio packs.
//!
//! A [`Pack<T, N>`] is an immutable array with element-wise algebra. The length is part of the type, so combining
//! packs of different lengths is rejected by the compiler rather than checked at run time.
//!
//! Two instantiations carry the dimension algebra:
//!
//! - [`IntegerPack<N>`]: integer exponents, combined with `add`/`sub`/`scale`.
//! - [`RatioPack<N>`]: [`Rational`] scale factors, combined with `mul`/`div`/`powi`.
//!
//! Both expose their algebra as `const fn` so unit definitions can be evaluated at compile time.

use crate::error::UnitResult;
use crate::rational::{expect_rational, Rational};
use core::fmt;

/// An ordered, fixed-length sequence of `N` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pack<T, const N: usize>([T; N]);

/// Pack of integer exponents.
pub type IntegerPack<const N: usize> = Pack<i32, N>;

/// Pack of rational scale factors.
pub type RatioPack<const N: usize> = Pack<Rational, N>;

impl<T: Copy, const N: usize> Pack<T, N> {
    /// Number of slots.
    pub const LEN: usize = N;

    /// Wraps an array.
    #[inline]
    pub const fn from_array(values: [T; N]) -> Self {
        Self(values)
    }

    /// Borrows the underlying array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Value at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= N`.
    #[inline]
    pub const fn get(&self, index: usize) -> T {
        self.0[index]
    }

    /// Number of slots (`N`).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` only for the zero-length pack.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Element-wise combination: `result[i] = f(self[i], other[i])`.
    pub fn zip<U: Copy, V>(self, other: Pack<U, N>, mut f: impl FnMut(T, U) -> V) -> Pack<V, N> {
        Pack(core::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Element-wise transformation: `result[i] = f(self[i])`.
    pub fn map<V>(self, mut f: impl FnMut(T) -> V) -> Pack<V, N> {
        Pack(core::array::from_fn(|i| f(self.0[i])))
    }

    /// Iterates over the slots in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Integer exponents
// ─────────────────────────────────────────────────────────────────────────────

impl<const N: usize> Pack<i32, N> {
    /// All exponents zero.
    pub const ZERO: Self = Self([0; N]);

    /// All exponents zero.
    #[inline]
    pub const fn make_default() -> Self {
        Self::ZERO
    }

    /// Zeros everywhere except `value` at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= N`.
    pub const fn make_single(index: usize, value: i32) -> Self {
        let mut out = [0; N];
        out[index] = value;
        Self(out)
    }

    /// Element-wise sum.
    pub const fn add(&self, other: &Self) -> Self {
        let mut out = [0; N];
        let mut i = 0;
        while i < N {
            out[i] = self.0[i] + other.0[i];
            i += 1;
        }
        Self(out)
    }

    /// Element-wise difference.
    pub const fn sub(&self, other: &Self) -> Self {
        let mut out = [0; N];
        let mut i = 0;
        while i < N {
            out[i] = self.0[i] - other.0[i];
            i += 1;
        }
        Self(out)
    }

    /// Every exponent multiplied by `k`.
    pub const fn scale(&self, k: i32) -> Self {
        let mut out = [0; N];
        let mut i = 0;
        while i < N {
            out[i] = self.0[i] * k;
            i += 1;
        }
        Self(out)
    }

    /// Number of non-zero exponents.
    pub const fn count_non_zero(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < N {
            if self.0[i] != 0 {
                count += 1;
            }
            i += 1;
        }
        count
    }

    /// Index of the first non-zero exponent, or `N` when every exponent is zero.
    pub const fn first_non_zero_index(&self) -> usize {
        let mut i = 0;
        while i < N {
            if self.0[i] != 0 {
                return i;
            }
            i += 1;
        }
        N
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.count_non_zero() == 0
    }

    /// Equality usable in `const` context.
    pub const fn const_eq(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rational ratios
// ─────────────────────────────────────────────────────────────────────────────

const fn expect_pack<const N: usize>(result: UnitResult<RatioPack<N>>) -> RatioPack<N> {
    match result {
        Ok(p) => p,
        Err(err) => err.panic(),
    }
}

impl<const N: usize> Pack<Rational, N> {
    /// All ratios one.
    pub const IDENTITY: Self = Self([Rational::ONE; N]);

    /// All ratios one.
    #[inline]
    pub const fn make_default() -> Self {
        Self::IDENTITY
    }

    /// Ones everywhere except `value` at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= N`.
    pub const fn make_single(index: usize, value: Rational) -> Self {
        let mut out = [Rational::ONE; N];
        out[index] = value;
        Self(out)
    }

    /// Element-wise product.
    pub const fn try_mul(&self, other: &Self) -> UnitResult<Self> {
        let mut out = [Rational::ONE; N];
        let mut i = 0;
        while i < N {
            out[i] = match self.0[i].try_mul(other.0[i]) {
                Ok(r) => r,
                Err(err) => return Err(err),
            };
            i += 1;
        }
        Ok(Self(out))
    }

    /// Element-wise quotient.
    pub const fn try_div(&self, other: &Self) -> UnitResult<Self> {
        let mut out = [Rational::ONE; N];
        let mut i = 0;
        while i < N {
            out[i] = match self.0[i].try_div(other.0[i]) {
                Ok(r) => r,
                Err(err) => return Err(err),
            };
            i += 1;
        }
        Ok(Self(out))
    }

    /// Every ratio raised to `k`.
    pub const fn try_powi(&self, k: i32) -> UnitResult<Self> {
        let mut out = [Rational::ONE; N];
        let mut i = 0;
        while i < N {
            out[i] = match self.0[i].try_powi(k) {
                Ok(r) => r,
                Err(err) => return Err(err),
            };
            i += 1;
        }
        Ok(Self(out))
    }

    /// Element-wise product. Panics on overflow.
    #[inline]
    pub const fn mul(&self, other: &Self) -> Self {
        expect_pack(self.try_mul(other))
    }

    /// Element-wise quotient. Panics on overflow or a zero divisor.
    #[inline]
    pub const fn div(&self, other: &Self) -> Self {
        expect_pack(self.try_div(other))
    }

    /// Every ratio raised to `k`. Panics on overflow.
    #[inline]
    pub const fn powi(&self, k: i32) -> Self {
        expect_pack(self.try_powi(k))
    }

    /// Exact product of all ratios.
    pub const fn try_product(&self) -> UnitResult<Rational> {
        let mut acc = Rational::ONE;
        let mut i = 0;
        while i < N {
            acc = match acc.try_mul(self.0[i]) {
                Ok(r) => r,
                Err(err) => return Err(err),
            };
            i += 1;
        }
        Ok(acc)
    }

    /// Exact product of all ratios. Panics on overflow.
    #[inline]
    pub const fn product(&self) -> Rational {
        expect_rational(self.try_product())
    }

    /// Product of all ratios in floating point. Never overflows the rational range.
    pub const fn value(&self) -> f64 {
        let mut acc = 1.0;
        let mut i = 0;
        while i < N {
            acc *= self.0[i].value();
            i += 1;
        }
        acc
    }

    /// Number of slots whose ratio is not one.
    pub const fn count_non_identity(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < N {
            if !self.0[i].is_one() {
                count += 1;
            }
            i += 1;
        }
        count
    }

    /// Equality usable in `const` context.
    pub const fn const_eq(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if !self.0[i].const_eq(&other.0[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Pack<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

impl<T, const N: usize> From<[T; N]> for Pack<T, N> {
    fn from(values: [T; N]) -> Self {
        Self(values)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: serde::Serialize, const N: usize> serde::Serialize for Pack<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(N)?;
        for v in &self.0 {
            tuple.serialize_element(v)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for Pack<T, N>
where
    T: serde::Deserialize<'de> + Copy + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::marker::PhantomData;
        use serde::de::{Error, SeqAccess, Visitor};

        struct PackVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> Visitor<'de> for PackVisitor<T, N>
        where
            T: serde::Deserialize<'de> + Copy + Default,
        {
            type Value = Pack<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of {N} elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Pack<T, N>, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut out = [T::default(); N];
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                }
                Ok(Pack(out))
            }
        }

        deserializer.deserialize_tuple(N, PackVisitor(PhantomData))
    }
}
