//! Quantity type and its implementations.

use crate::error::{UnitError, UnitResult};
use crate::marker::{Common, Pow, Prod, Quot, Symbol, UnitMarker, Unitless};
use crate::scalar::Scalar;
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rejects, at compile time, any instantiation pairing units of different dimensions.
const fn check_compatible<A: UnitMarker, B: UnitMarker>() {
    assert!(
        A::UNIT.is_compatible(&B::UNIT),
        "incompatible units: dimensions differ"
    );
}

/// A quantity with a specific unit.
///
/// `Quantity<U, R>` stores its value in the coherent SI unit of `U`'s dimension (the *base value*) together with
/// phantom type information about `U`. The user-facing [`value`](Quantity::value) is the base value divided by the
/// scale of `U`. Conversions between compatible units only relabel the quantity; the base value never changes.
///
/// # Examples
///
/// ```rust
/// use dimty_core::{Dimension, Quantity, Rational, Unit, UnitMarker};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub struct Meter;
/// impl UnitMarker for Meter {
///     const UNIT: Unit = Unit::new(Dimension::LENGTH);
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub struct Centimeter;
/// impl UnitMarker for Centimeter {
///     const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
/// }
///
/// let x = Quantity::<Centimeter>::new(250.0);
/// assert_eq!(x.base_value(), 2.5);
/// assert_eq!(x.to::<Meter>().value(), 2.5);
/// assert!(x == Quantity::<Meter>::new(2.5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: UnitMarker, R: Scalar = f64> {
    base: R,
    _unit: PhantomData<U>,
}

impl<U: UnitMarker, R: Scalar> Quantity<U, R> {
    const SCALE: f64 = U::UNIT.scale();

    /// Creates a quantity of `value` units of `U`.
    ///
    /// ```rust
    /// use dimty_core::{Dimension, Quantity, Rational, Unit, UnitMarker};
    ///
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Hour;
    /// impl UnitMarker for Hour {
    ///     const UNIT: Unit = Unit::base(Dimension::TIME, Rational::integer(3600));
    /// }
    ///
    /// let t = Quantity::<Hour>::new(2.0);
    /// assert_eq!(t.value(), 2.0);
    /// assert_eq!(t.base_value(), 7200.0);
    /// ```
    #[inline]
    pub fn new(value: R) -> Self {
        Self::from_base(R::cast_from_f64(value.into_f64() * Self::SCALE))
    }

    /// Creates a quantity directly from its base value, without scaling.
    #[inline]
    pub const fn from_base(base: R) -> Self {
        Self {
            base,
            _unit: PhantomData,
        }
    }

    /// Value in the coherent SI unit of the dimension.
    #[inline]
    pub const fn base_value(&self) -> R {
        self.base
    }

    /// Value in units of `U`.
    #[inline]
    pub fn value(&self) -> R {
        R::cast_from_f64(self.base.into_f64() / Self::SCALE)
    }

    /// Value-level unit of `U`.
    #[inline]
    pub const fn unit() -> Unit {
        U::UNIT
    }

    /// Printable symbol of `U`.
    #[inline]
    pub const fn symbol() -> Symbol<U> {
        Symbol::new()
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// The base value is unchanged; only the unit label moves. Converting to a unit of another dimension does not
    /// compile.
    ///
    /// ```rust
    /// use dimty_core::{Dimension, Quantity, Rational, Unit, UnitMarker};
    ///
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Meter;
    /// impl UnitMarker for Meter {
    ///     const UNIT: Unit = Unit::new(Dimension::LENGTH);
    /// }
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Kilometer;
    /// impl UnitMarker for Kilometer {
    ///     const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::KILO);
    /// }
    ///
    /// let km = Quantity::<Kilometer>::new(1.0);
    /// let m: Quantity<Meter> = km.to();
    /// assert_eq!(m.value(), 1000.0);
    /// ```
    ///
    /// ```compile_fail
    /// use dimty_core::{Dimension, Quantity, Unit, UnitMarker};
    ///
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Meter;
    /// impl UnitMarker for Meter {
    ///     const UNIT: Unit = Unit::new(Dimension::LENGTH);
    /// }
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Second;
    /// impl UnitMarker for Second {
    ///     const UNIT: Unit = Unit::new(Dimension::TIME);
    /// }
    ///
    /// let _ = Quantity::<Meter>::new(1.0).to::<Second>();
    /// ```
    #[inline]
    pub const fn to<T: UnitMarker>(self) -> Quantity<T, R> {
        const { check_compatible::<U, T>() };
        Quantity::from_base(self.base)
    }

    /// Sum of quantities in compatible units, expressed in their common unit (see [`Unit::common`]).
    ///
    /// ```rust
    /// use dimty_core::{Dimension, Quantity, Rational, Unit, UnitMarker};
    ///
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Meter;
    /// impl UnitMarker for Meter {
    ///     const UNIT: Unit = Unit::new(Dimension::LENGTH);
    /// }
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Centimeter;
    /// impl UnitMarker for Centimeter {
    ///     const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
    /// }
    ///
    /// let sum = Quantity::<Centimeter>::new(250.0).add_common(Quantity::<Meter>::new(2.0));
    /// assert!((sum.value() - 450.0).abs() < 1e-9);
    /// assert_eq!(sum.base_value(), 4.5);
    /// ```
    #[inline]
    pub fn add_common<B: UnitMarker>(self, rhs: Quantity<B, R>) -> Quantity<Common<U, B>, R> {
        const { check_compatible::<U, B>() };
        Quantity::from_base(self.base + rhs.base)
    }

    /// Difference of quantities in compatible units, expressed in their common unit.
    #[inline]
    pub fn sub_common<B: UnitMarker>(self, rhs: Quantity<B, R>) -> Quantity<Common<U, B>, R> {
        const { check_compatible::<U, B>() };
        Quantity::from_base(self.base - rhs.base)
    }

    /// Quotient `self / rhs`, or [`UnitError::ZeroDivisor`] when `rhs` is zero.
    ///
    /// The `/` operator follows the representation instead: infinities or NaN for floats, a panic for integers.
    #[inline]
    pub fn try_div<B: UnitMarker>(self, rhs: Quantity<B, R>) -> UnitResult<Quantity<Quot<U, B>, R>> {
        if rhs.base == R::zero() {
            return Err(UnitError::ZeroDivisor);
        }
        Ok(self / rhs)
    }

    /// Raises the quantity to the integer power `K`; the unit becomes `U^K`.
    ///
    /// ```rust
    /// use dimty_core::{Dimension, Quantity, Rational, Unit, UnitMarker};
    ///
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Centimeter;
    /// impl UnitMarker for Centimeter {
    ///     const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
    /// }
    ///
    /// let side = Quantity::<Centimeter>::new(3.0);
    /// let area = side.pow::<2>();
    /// assert!((area.value() - 9.0).abs() < 1e-9);
    /// assert_eq!(Quantity::<Centimeter>::unit().powi(2), area.unit_of());
    /// ```
    pub fn pow<const K: i32>(self) -> Quantity<Pow<U, K>, R> {
        let mut acc = R::one();
        for _ in 0..K.unsigned_abs() {
            acc = acc * self.base;
        }
        if K < 0 {
            acc = R::one() / acc;
        }
        Quantity::from_base(acc)
    }

    /// Unit of this quantity. Same as [`Quantity::unit`], callable on a value.
    #[inline]
    pub const fn unit_of(&self) -> Unit {
        U::UNIT
    }

    /// Smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.base < self.base {
            other
        } else {
            self
        }
    }

    /// Larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.base > self.base {
            other
        } else {
            self
        }
    }
}

/// Creates a quantity of `value` units of `U`.
///
/// ```rust
/// use dimty_core::{qty, Dimension, Quantity, Rational, Unit, UnitMarker};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Centimeter;
/// impl UnitMarker for Centimeter {
///     const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
/// }
///
/// let q = qty::<Centimeter, f64>(5.0);
/// assert!((q.base_value() - 0.05).abs() < 1e-15);
/// ```
#[inline]
pub fn qty<U: UnitMarker, R: Scalar>(value: R) -> Quantity<U, R> {
    Quantity::new(value)
}

/// How many `divisor`s fit in `numerator`, as a plain number: `numerator / divisor` with the divisor expressed in the
/// numerator's unit.
///
/// Returns [`UnitError::ZeroDivisor`] when the converted divisor is zero.
///
/// ```rust
/// use dimty_core::{try_quantity_cast, Dimension, Quantity, Rational, Unit, UnitError, UnitMarker};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Meter;
/// impl UnitMarker for Meter {
///     const UNIT: Unit = Unit::new(Dimension::LENGTH);
/// }
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Centimeter;
/// impl UnitMarker for Centimeter {
///     const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
/// }
///
/// let laps = try_quantity_cast(Quantity::<Meter>::new(9.0), Quantity::<Centimeter>::new(100.0));
/// assert!((laps.unwrap() - 9.0).abs() < 1e-12);
/// let none = try_quantity_cast(Quantity::<Meter>::new(9.0), Quantity::<Centimeter>::new(0.0));
/// assert_eq!(none, Err(UnitError::ZeroDivisor));
/// ```
pub fn try_quantity_cast<A, B, R>(numerator: Quantity<A, R>, divisor: Quantity<B, R>) -> UnitResult<R>
where
    A: UnitMarker,
    B: UnitMarker,
    R: Scalar,
{
    let divisor = divisor.to::<A>().value();
    if divisor == R::zero() {
        return Err(UnitError::ZeroDivisor);
    }
    Ok(numerator.value() / divisor)
}

/// Like [`try_quantity_cast`], but a zero divisor yields zero instead of an error.
pub fn quantity_cast<A, B, R>(numerator: Quantity<A, R>, divisor: Quantity<B, R>) -> R
where
    A: UnitMarker,
    B: UnitMarker,
    R: Scalar,
{
    match try_quantity_cast(numerator, divisor) {
        Ok(ratio) => ratio,
        Err(err) => {
            log::debug!("quantity_cast: {err}, returning zero");
            R::zero()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Simplification
// ─────────────────────────────────────────────────────────────────────────────

/// Trait for simplifying composite unit types.
///
/// Reduces `Quot<U, U>` to [`Unitless`] and `Quot<N, Quot<N, D>>` to `D`.
pub trait Simplify {
    /// The simplified unit type.
    type Out: UnitMarker;
    /// Numeric representation, unchanged by simplification.
    type Rep: Scalar;
    /// Convert this quantity to its simplified unit.
    fn simplify(self) -> Quantity<Self::Out, Self::Rep>;
}

impl<U: UnitMarker, R: Scalar> Simplify for Quantity<Quot<U, U>, R> {
    type Out = Unitless;
    type Rep = R;
    /// ```rust
    /// use dimty_core::{Dimension, Quantity, Rational, Simplify, Unit, UnitMarker, Unitless};
    ///
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Centimeter;
    /// impl UnitMarker for Centimeter {
    ///     const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
    /// }
    ///
    /// let ratio = Quantity::<Centimeter>::new(1.0) / Quantity::<Centimeter>::new(2.0);
    /// let unitless: Quantity<Unitless> = ratio.simplify();
    /// assert!((unitless.value() - 0.5).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Quantity<Unitless, R> {
        Quantity::from_base(self.value())
    }
}

impl<N: UnitMarker, D: UnitMarker, R: Scalar> Simplify for Quantity<Quot<N, Quot<N, D>>, R> {
    type Out = D;
    type Rep = R;
    fn simplify(self) -> Quantity<D, R> {
        Quantity::new(self.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: UnitMarker, R: Scalar> Add for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_base(self.base + rhs.base)
    }
}

impl<U: UnitMarker, R: Scalar> AddAssign for Quantity<U, R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.base = self.base + rhs.base;
    }
}

impl<U: UnitMarker, R: Scalar> Sub for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_base(self.base - rhs.base)
    }
}

impl<U: UnitMarker, R: Scalar> SubAssign for Quantity<U, R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.base = self.base - rhs.base;
    }
}

impl<U: UnitMarker, R: Scalar + Neg<Output = R>> Neg for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_base(-self.base)
    }
}

impl<A: UnitMarker, B: UnitMarker, R: Scalar> Mul<Quantity<B, R>> for Quantity<A, R> {
    type Output = Quantity<Prod<A, B>, R>;
    #[inline]
    fn mul(self, rhs: Quantity<B, R>) -> Self::Output {
        Quantity::from_base(self.base * rhs.base)
    }
}

impl<A: UnitMarker, B: UnitMarker, R: Scalar> Div<Quantity<B, R>> for Quantity<A, R> {
    type Output = Quantity<Quot<A, B>, R>;
    #[inline]
    fn div(self, rhs: Quantity<B, R>) -> Self::Output {
        Quantity::from_base(self.base / rhs.base)
    }
}

impl<U: UnitMarker, R: Scalar> Mul<R> for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: R) -> Self {
        Self::from_base(self.base * rhs)
    }
}

impl<U: UnitMarker, R: Scalar> MulAssign<R> for Quantity<U, R> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        self.base = self.base * rhs;
    }
}

impl<U: UnitMarker, R: Scalar> Div<R> for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: R) -> Self {
        Self::from_base(self.base / rhs)
    }
}

impl<U: UnitMarker, R: Scalar> DivAssign<R> for Quantity<U, R> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        self.base = self.base / rhs;
    }
}

crate::macros::impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<A: UnitMarker, B: UnitMarker, R: Scalar> PartialEq<Quantity<B, R>> for Quantity<A, R> {
    /// Exact comparison of base values. Comparing quantities of different dimensions does not compile.
    #[inline]
    fn eq(&self, other: &Quantity<B, R>) -> bool {
        const { check_compatible::<A, B>() };
        self.base == other.base
    }
}

impl<A: UnitMarker, B: UnitMarker, R: Scalar> PartialOrd<Quantity<B, R>> for Quantity<A, R> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<B, R>) -> Option<Ordering> {
        const { check_compatible::<A, B>() };
        self.base.partial_cmp(&other.base)
    }
}

impl<U: UnitMarker, R: Scalar> Default for Quantity<U, R> {
    fn default() -> Self {
        Self::from_base(R::zero())
    }
}

impl<U: UnitMarker, R: Scalar> Sum for Quantity<U, R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<U: UnitMarker, R: Scalar + Display> Display for Quantity<U, R> {
    /// Formats as `"{value} {symbol}"`, or just the value for unitless quantities. Precision flags apply to the value.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)?;
        if Symbol::<U>::is_empty() {
            return Ok(());
        }
        write!(f, " {}", Symbol::<U>::new())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: UnitMarker, R: Scalar + Serialize> Serialize for Quantity<U, R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: UnitMarker, R: Scalar + Deserialize<'de>> Deserialize<'de> for Quantity<U, R> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = R::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

#[cfg(feature = "serde")]
impl<U: UnitMarker> Serialize for Symbol<U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit symbols in serialized data. On input the
/// `unit` field is optional; when present it must match the symbol of the target unit.
///
/// # Examples
///
/// ```rust
/// use dimty_core::{Dimension, Quantity, Rational, Unit, UnitMarker};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub struct Kilometer;
/// impl UnitMarker for Kilometer {
///     const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::KILO);
/// }
///
/// #[derive(Serialize, Deserialize)]
/// struct Leg {
///     #[serde(with = "dimty_core::serde_with_unit")]
///     distance: Quantity<Kilometer>, // {"value": 12.5, "unit": "km"}
///
///     climb: Quantity<Kilometer>, // 0.4
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use alloc::string::String;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<U, R>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "kmh^-1"}
    /// ```
    pub fn serialize<U, R, S>(quantity: &Quantity<U, R>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: UnitMarker,
        R: Scalar + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", &Symbol::<U>::new())?;
        state.end()
    }

    /// Deserializes a `Quantity<U, R>` from a struct with `value` and optionally `unit` fields.
    pub fn deserialize<'de, U, R, D>(deserializer: D) -> Result<Quantity<U, R>, D::Error>
    where
        U: UnitMarker,
        R: Scalar + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, R>(PhantomData<(U, R)>);

        impl<'de, U: UnitMarker, R: Scalar + Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, R> {
            type Value = Quantity<U, R>;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U, R>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<R> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(ref found) = unit {
                    if !Symbol::<U>::matches(found) {
                        let expected = Symbol::<U>::new();
                        log::warn!("unit mismatch: expected '{expected}', found '{found}'");
                        return Err(de::Error::custom(format_args!(
                            "unit mismatch: expected '{expected}', found '{found}'"
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::rational::Rational;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct M;
    impl UnitMarker for M {
        const UNIT: Unit = Unit::new(Dimension::LENGTH);
        const SYMBOL: Option<&'static str> = Some("m");
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Cm;
    impl UnitMarker for Cm {
        const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
        const SYMBOL: Option<&'static str> = Some("cm");
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Km;
    impl UnitMarker for Km {
        const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::KILO);
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct S;
    impl UnitMarker for S {
        const UNIT: Unit = Unit::new(Dimension::TIME);
        const SYMBOL: Option<&'static str> = Some("s");
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct H;
    impl UnitMarker for H {
        const UNIT: Unit = Unit::base(Dimension::TIME, Rational::integer(3600));
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct J;
    impl UnitMarker for J {
        const UNIT: Unit = Unit::new(Dimension::ENERGY);
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Cal;
    impl UnitMarker for Cal {
        const UNIT: Unit = J::UNIT.with_factor(4.184);
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Kcal;
    impl UnitMarker for Kcal {
        const UNIT: Unit = Cal::UNIT.with_global(Rational::KILO);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_scales_to_base() {
        let q = Quantity::<Cm>::new(100.0);
        assert_relative_eq!(q.base_value(), 1.0);
        assert_relative_eq!(q.value(), 100.0);
        assert_relative_eq!(Quantity::<Cal>::new(1.0).base_value(), 4.184);
        assert_relative_eq!(Quantity::<Kcal>::new(1.0).base_value(), 4184.0);
    }

    #[test]
    fn from_base_skips_scaling() {
        let q = Quantity::<Cm>::from_base(2.0);
        assert_eq!(q.base_value(), 2.0);
        assert_relative_eq!(q.value(), 200.0);
    }

    #[test]
    fn qty_factory() {
        let q = qty::<Cm, f64>(5.0);
        assert_abs_diff_eq!(q.base_value(), 0.05, epsilon = 1e-15);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Quantity::<Km>::default().base_value(), 0.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn to_relabels_without_recomputing() {
        let q = Quantity::<Cm>::new(250.0);
        let m = q.to::<M>();
        assert_eq!(m.base_value(), q.base_value());
        assert_relative_eq!(m.value(), 2.5);
        assert_relative_eq!(m.to::<Km>().value(), 0.0025);
    }

    #[test]
    fn velocity_conversion() {
        let v = Quantity::<Quot<Km, H>>::new(72.0);
        assert_relative_eq!(v.to::<Quot<M, S>>().value(), 20.0, max_relative = 1e-12);
    }

    #[test]
    fn equality_compares_base_values() {
        assert!(Quantity::<M>::new(1.0) == Quantity::<Cm>::new(100.0));
        assert!(Quantity::<M>::new(1.0) != Quantity::<Cm>::new(99.0));
        assert!(Quantity::<Km>::new(1.0) > Quantity::<M>::new(999.0));
        assert!(Quantity::<Cm>::new(1.0) < Quantity::<M>::new(1.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn same_unit_add_sub() {
        let a = Quantity::<Cm>::new(30.0);
        let b = Quantity::<Cm>::new(12.0);
        assert_relative_eq!((a + b).value(), 42.0);
        assert_relative_eq!((a - b).value(), 18.0);
        let mut c = a;
        c += b;
        c -= Quantity::<Cm>::new(2.0);
        assert_relative_eq!(c.value(), 40.0);
        assert_relative_eq!((-a).value(), -30.0);
    }

    #[test]
    fn mixed_unit_add_uses_finer_unit() {
        let sum = Quantity::<Cm>::new(250.0).add_common(Quantity::<M>::new(2.0));
        assert_eq!(sum.unit_of(), Cm::UNIT);
        assert_relative_eq!(sum.value(), 450.0);
        assert_relative_eq!(sum.base_value(), 4.5);

        let reversed = Quantity::<M>::new(2.0).add_common(Quantity::<Cm>::new(250.0));
        assert_eq!(reversed.unit_of(), Cm::UNIT);
        assert_relative_eq!(reversed.value(), 450.0);

        let diff = Quantity::<Cm>::new(50.0).sub_common(Quantity::<M>::new(2.0));
        assert_relative_eq!(diff.value(), -150.0);
    }

    #[test]
    fn mixed_unit_add_prefers_rational_unit() {
        let sum = Quantity::<Cal>::new(1.0).add_common(Quantity::<J>::new(1.0));
        assert_eq!(sum.unit_of(), J::UNIT);
        assert_relative_eq!(sum.value(), 5.184);

        let both_real = Quantity::<Kcal>::new(1.0).add_common(Quantity::<Cal>::new(1000.0));
        assert_eq!(both_real.unit_of(), Kcal::UNIT);
        assert_relative_eq!(both_real.value(), 2.0);
    }

    #[test]
    fn product_and_quotient_units() {
        let v = Quantity::<M>::new(10.0) / Quantity::<S>::new(2.0);
        assert_eq!(v.unit_of().dim(), Dimension::VELOCITY);
        assert_relative_eq!(v.value(), 5.0);

        let area = Quantity::<Cm>::new(20.0) * Quantity::<M>::new(3.0);
        assert_eq!(area.unit_of().dim(), Dimension::AREA);
        assert_relative_eq!(area.base_value(), 0.6);
        assert_relative_eq!(area.value(), 60.0);
    }

    #[test]
    fn power() {
        let side = Quantity::<Cm>::new(3.0);
        assert_relative_eq!(side.pow::<3>().value(), 27.0, max_relative = 1e-12);
        assert_relative_eq!(side.pow::<{ -1 }>().value(), 1.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(side.pow::<0>().value(), 1.0);
    }

    #[test]
    fn scalar_ops() {
        let q = Quantity::<Km>::new(1.5);
        assert_relative_eq!((q * 2.0).value(), 3.0);
        assert_relative_eq!((2.0 * q).value(), 3.0);
        assert_relative_eq!((q / 3.0).value(), 0.5);
        let mut r = q;
        r *= 4.0;
        r /= 2.0;
        assert_relative_eq!(r.value(), 3.0);
        assert!(q * 1.0 == q);
        assert!(q / 1.0 == q);
    }

    #[test]
    fn integer_representation() {
        let q = Quantity::<M, i32>::new(5);
        assert_eq!(q.base_value(), 5);
        assert_eq!((q * 3).value(), 15);
        assert_eq!((3 * q).value(), 15);
        assert!(q * 1 == q);
        assert!(q / 1 == q);
        assert_eq!(Quantity::<Km, i64>::new(2).base_value(), 2000);
    }

    #[test]
    fn min_max_sum() {
        let a = Quantity::<M>::new(3.0);
        let b = Quantity::<M>::new(5.0);
        assert_eq!(a.min(b).value(), 3.0);
        assert_eq!(a.max(b).value(), 5.0);
        let total: Quantity<M> = [a, b, a].into_iter().sum();
        assert_relative_eq!(total.value(), 11.0);
    }

    #[test]
    fn simplify_same_unit_ratio() {
        let ratio = Quantity::<Km>::new(3.0) / Quantity::<Km>::new(4.0);
        assert_relative_eq!(ratio.simplify().value(), 0.75);
        let per = Quantity::<M>::new(10.0) / (Quantity::<M>::new(5.0) / Quantity::<S>::new(1.0));
        let t: Quantity<S> = per.simplify();
        assert_relative_eq!(t.value(), 2.0);
    }

    #[test]
    fn try_div_rejects_zero_divisor() {
        let speed = Quantity::<Km>::new(36.0).try_div(Quantity::<H>::new(10.0)).map(|q| q.base_value());
        assert_relative_eq!(speed.unwrap_or(f64::NAN), 1.0);
        assert_eq!(
            Quantity::<M>::new(1.0).try_div(Quantity::<S>::new(0.0)).map(|q| q.value()),
            Err(UnitError::ZeroDivisor)
        );
        assert_eq!(
            Quantity::<M, i32>::new(9).try_div(Quantity::<S, i32>::new(0)).map(|q| q.value()),
            Err(UnitError::ZeroDivisor)
        );
        assert_eq!(Quantity::<M, i32>::new(9).try_div(Quantity::<S, i32>::new(3)).map(|q| q.value()), Ok(3));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // quantity_cast
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_cast_divides_in_numerator_unit() {
        let n = quantity_cast(Quantity::<M>::new(9.0), Quantity::<Cm>::new(100.0));
        assert_relative_eq!(n, 9.0);
    }

    #[test]
    fn quantity_cast_zero_divisor() {
        let n = quantity_cast(Quantity::<M>::new(9.0), Quantity::<Cm>::new(0.0));
        assert_eq!(n, 0.0);
        assert_eq!(
            try_quantity_cast(Quantity::<M>::new(9.0), Quantity::<Cm>::new(0.0)),
            Err(UnitError::ZeroDivisor)
        );
        assert_eq!(quantity_cast(Quantity::<M, i32>::new(9), Quantity::<M, i32>::new(0)), 0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_uses_symbol() {
        assert_eq!(format!("{}", Quantity::<Cm>::new(12.5)), "12.5 cm");
        assert_eq!(format!("{:.1}", Quantity::<S>::new(2.26)), "2.3 s");
        assert_eq!(format!("{}", Quantity::<Km>::new(3.0)), "3 km");
        assert_eq!(format!("{}", Quantity::<Quot<M, S>>::new(4.0)), "4 ms^-1");
        assert_eq!(format!("{}", Quantity::<Unitless>::new(0.5)), "0.5");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn round_trip_conversion(v in -1e9f64..1e9) {
            let q = Quantity::<Km>::new(v);
            let back = q.to::<Cm>().to::<Km>();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn mul_then_div_is_identity(a in -1e6f64..1e6, b in 1e-3f64..1e6) {
            let x = Quantity::<Cm>::new(a);
            let y = Quantity::<S>::new(b);
            let back = (x * y) / y;
            prop_assert!((back.base_value() - x.base_value()).abs() <= 1e-9 * x.base_value().abs().max(1.0));
        }

        #[test]
        fn real_unit_round_trip(v in -1e6f64..1e6) {
            let back = Quantity::<Kcal>::new(v).to::<J>().to::<Kcal>();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[derive(Debug, Serialize, Deserialize)]
        struct Leg {
            #[serde(with = "crate::serde_with_unit")]
            distance: Quantity<Km>,
            duration: Quantity<S>,
        }

        #[test]
        fn quantity_serializes_value() {
            let json = serde_json::to_string(&Quantity::<Km>::new(12.0)).unwrap();
            assert_eq!(json, "12.0");
            let q: Quantity<Km> = serde_json::from_str("2.5").unwrap();
            assert_relative_eq!(q.base_value(), 2500.0);
        }

        #[test]
        fn with_unit_round_trip() {
            let leg = Leg {
                distance: Quantity::new(40.0),
                duration: Quantity::new(5.0),
            };
            let json = serde_json::to_string(&leg).unwrap();
            assert_eq!(json, r#"{"distance":{"value":40.0,"unit":"km"},"duration":5.0}"#);
            let back: Leg = serde_json::from_str(&json).unwrap();
            assert_relative_eq!(back.distance.value(), 40.0);
            assert_relative_eq!(back.duration.value(), 5.0);
        }

        #[test]
        fn with_unit_accepts_missing_unit() {
            let leg: Leg = serde_json::from_str(r#"{"distance":{"value":3.0},"duration":1.0}"#).unwrap();
            assert_relative_eq!(leg.distance.value(), 3.0);
        }

        #[test]
        fn with_unit_rejects_mismatch() {
            let err = serde_json::from_str::<Leg>(r#"{"distance":{"value":3.0,"unit":"m"},"duration":1.0}"#)
                .unwrap_err()
                .to_string();
            assert!(err.contains("unit mismatch"), "{err}");
        }

        #[test]
        fn with_unit_rejects_missing_value() {
            let err = serde_json::from_str::<Leg>(r#"{"distance":{"unit":"km"},"duration":1.0}"#)
                .unwrap_err()
                .to_string();
            assert!(err.contains("missing field"), "{err}");
        }

        #[test]
        fn generated_symbol_is_serialized() {
            #[derive(Serialize)]
            struct Wrapper {
                #[serde(with = "crate::serde_with_unit")]
                v: Quantity<Quot<M, S>>,
            }
            let json = serde_json::to_string(&Wrapper { v: Quantity::new(2.0) }).unwrap();
            assert_eq!(json, r#"{"v":{"value":2.0,"unit":"ms^-1"}}"#);
        }
    }
}
