//! Type-level units.
//!
//! A unit marker is a zero-sized type carrying a [`Unit`] as an associated constant. Composite markers compute their
//! unit from their operands by const evaluation, so `Quot<Kilometer, Hour>` knows its dimension and scale at compile
//! time without any runtime state.

use crate::format::renders_as;
use crate::unit::Unit;
use core::fmt::{self, Debug, Display, Formatter};
use core::marker::PhantomData;

/// Trait implemented by every **unit marker** type.
///
/// * `UNIT` is the value-level unit: dimension, per-slot ratios, global scale and optional real factor.
/// * `SYMBOL` overrides the generated name of `UNIT` (e.g. `"N"` instead of `"mkgs^-2"`). Composite markers leave it
///   `None`.
///
/// Implement it with `#[derive(UnitMarker)]`:
///
/// ```rust
/// use dimty_core::{Dimension, Quantity, Rational, Unit, UnitMarker};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub struct Furlong;
/// impl UnitMarker for Furlong {
///     const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::new(201_168, 1_000));
///     const SYMBOL: Option<&'static str> = Some("fur");
/// }
///
/// let race = Quantity::<Furlong>::new(5.0);
/// assert!((race.base_value() - 1005.84).abs() < 1e-9);
/// ```
pub trait UnitMarker: Copy + PartialEq + Debug + 'static {
    /// Value-level unit.
    const UNIT: Unit;

    /// Printable symbol, if the unit has a conventional name.
    const SYMBOL: Option<&'static str> = None;
}

/// Product of two units, `A·B`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prod<A: UnitMarker, B: UnitMarker>(PhantomData<(A, B)>);

impl<A: UnitMarker, B: UnitMarker> UnitMarker for Prod<A, B> {
    const UNIT: Unit = A::UNIT.mul(&B::UNIT);
}

/// Quotient of two units, `A/B`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quot<A: UnitMarker, B: UnitMarker>(PhantomData<(A, B)>);

impl<A: UnitMarker, B: UnitMarker> UnitMarker for Quot<A, B> {
    const UNIT: Unit = A::UNIT.div(&B::UNIT);
}

/// Integer power of a unit, `U^K`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pow<U: UnitMarker, const K: i32>(PhantomData<U>);

impl<U: UnitMarker, const K: i32> UnitMarker for Pow<U, K> {
    const UNIT: Unit = U::UNIT.powi(K);
}

/// Unit chosen when a quantity in `B` is added to one in `A`; see [`Unit::common`].
///
/// Naming this type for incompatible `A` and `B` is a compile error as soon as its unit is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Common<A: UnitMarker, B: UnitMarker>(PhantomData<(A, B)>);

impl<A: UnitMarker, B: UnitMarker> UnitMarker for Common<A, B> {
    const UNIT: Unit = A::UNIT.common(&B::UNIT);
    const SYMBOL: Option<&'static str> = if A::UNIT.common_keeps_left(&B::UNIT) {
        A::SYMBOL
    } else {
        B::SYMBOL
    };
}

/// Zero-sized marker for dimensionless quantities.
///
/// `Unitless` has scale one and an empty symbol. It is the target of [`Simplify`](crate::Simplify) for same-unit
/// ratios such as `Meters / Meters`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl UnitMarker for Unitless {
    const UNIT: Unit = Unit::DIMENSIONLESS;
    const SYMBOL: Option<&'static str> = Some("");
}

/// Display adapter printing the symbol of `U`.
///
/// ```rust
/// use dimty_core::{Dimension, Quot, Symbol, Unit, UnitMarker};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct M;
/// impl UnitMarker for M {
///     const UNIT: Unit = Unit::new(Dimension::LENGTH);
/// }
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct S;
/// impl UnitMarker for S {
///     const UNIT: Unit = Unit::new(Dimension::TIME);
///     const SYMBOL: Option<&'static str> = Some("sec");
/// }
///
/// assert_eq!(Symbol::<S>::new().to_string(), "sec");
/// assert_eq!(Symbol::<Quot<M, S>>::new().to_string(), "ms^-1");
/// ```
pub struct Symbol<U: UnitMarker>(PhantomData<U>);

impl<U: UnitMarker> Symbol<U> {
    /// Adapter for `U`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// `true` when `U` prints as `text`.
    pub fn matches(text: &str) -> bool {
        match U::SYMBOL {
            Some(symbol) => symbol == text,
            None => renders_as(&U::UNIT, text),
        }
    }

    /// `true` when `U` prints as nothing.
    pub fn is_empty() -> bool {
        Self::matches("")
    }
}

impl<U: UnitMarker> Default for Symbol<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: UnitMarker> Display for Symbol<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match U::SYMBOL {
            Some(symbol) => f.write_str(symbol),
            None => Display::fmt(&U::UNIT, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::rational::Rational;
    use approx::assert_relative_eq;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Km;
    impl UnitMarker for Km {
        const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::KILO);
        const SYMBOL: Option<&'static str> = Some("km");
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Cm;
    impl UnitMarker for Cm {
        const UNIT: Unit = Unit::base(Dimension::LENGTH, Rational::CENTI);
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Hr;
    impl UnitMarker for Hr {
        const UNIT: Unit = Unit::base(Dimension::TIME, Rational::integer(3600));
        const SYMBOL: Option<&'static str> = Some("h");
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Deg;
    impl UnitMarker for Deg {
        const UNIT: Unit = Unit::new(Dimension::ANGLE).with_factor(core::f64::consts::PI / 180.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Composite units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quotient_unit() {
        let kmh = <Quot<Km, Hr>>::UNIT;
        assert_eq!(kmh.dim(), Dimension::VELOCITY);
        assert_relative_eq!(kmh.scale(), 1000.0 / 3600.0);
        assert_eq!(<Quot<Km, Km>>::UNIT.dim(), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn product_and_power_agree() {
        assert_eq!(<Prod<Cm, Cm>>::UNIT, <Pow<Cm, 2>>::UNIT);
        assert_eq!(<Pow<Cm, 2>>::UNIT.dim(), Dimension::AREA);
        assert_relative_eq!(<Pow<Km, { -1 }>>::UNIT.scale(), 1e-3);
        assert_eq!(<Pow<Km, 0>>::UNIT.dim(), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn real_factor_propagates() {
        assert!(<Prod<Deg, Hr>>::UNIT.is_real());
        assert!(!<Prod<Km, Hr>>::UNIT.is_real());
    }

    #[test]
    fn common_prefers_finer_unit() {
        assert_eq!(<Common<Km, Cm>>::UNIT, Cm::UNIT);
        assert_eq!(<Common<Cm, Km>>::UNIT, Cm::UNIT);
        assert_eq!(<Common<Km, Km>>::UNIT, Km::UNIT);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Symbols
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn symbol_prefers_declared_name() {
        assert_eq!(Symbol::<Km>::new().to_string(), "km");
        assert_eq!(Symbol::<Cm>::new().to_string(), "cm");
        assert_eq!(Symbol::<Quot<Km, Hr>>::new().to_string(), "kmh^-1");
        assert_eq!(Symbol::<Unitless>::new().to_string(), "");
    }

    #[test]
    fn common_carries_the_chosen_symbol() {
        assert_eq!(<Common<Km, Cm>>::SYMBOL, None);
        assert_eq!(<Common<Cm, Km>>::SYMBOL, None);
        assert_eq!(<Common<Deg, Deg>>::SYMBOL, None);
        assert_eq!(Symbol::<Common<Cm, Km>>::new().to_string(), "cm");
        assert_eq!(<Common<Km, Km>>::SYMBOL, Some("km"));
    }

    #[test]
    fn symbol_matching() {
        assert!(Symbol::<Km>::matches("km"));
        assert!(!Symbol::<Km>::matches("m"));
        assert!(Symbol::<Quot<Cm, Hr>>::matches("cmh^-1"));
        assert!(Symbol::<Unitless>::is_empty());
        assert!(!Symbol::<Cm>::is_empty());
    }
}
