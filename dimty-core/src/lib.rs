//! Core type system for compile-time dimensional analysis.
//!
//! `dimty-core` models units as values that the compiler evaluates:
//!
//! - A [`Dimension`] is a vector of integer exponents over the seven SI base quantities and four extra ones (angle,
//!   currency, information, count).
//! - A [`DimensionRatio`] holds, per base quantity, the exact [`Rational`] scale of the unit chosen for it.
//! - A [`Unit`] combines both with a global rational scale and an optional real factor for conversions that are not
//!   rational (calories, degrees).
//! - A *unit marker* is a zero-sized type implementing [`UnitMarker`]; composite markers ([`Prod`], [`Quot`],
//!   [`Pow`], [`Common`]) compute their unit in `const` context.
//! - A [`Quantity<U, R>`] stores its value in SI base units; conversions between compatible units only relabel it.
//!
//! Most users should depend on `dimty` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimensionally inconsistent code (adding a length to a mass, converting metres to
//!   seconds).
//! - Exact rational bookkeeping of SI prefixes per base quantity, so `km/h` to `m/s` is `5/18` exactly.
//! - A deterministic *common unit* for mixed-unit sums ([`Unit::common`]).
//! - Zero runtime overhead for unit tags (phantom types and associated constants only).
//!
//! # What this crate does not try to solve
//!
//! - Runtime unit parsing or dimension inference from strings.
//! - Affine scales (degrees Celsius); only a multiplicative real factor is supported.
//! - Arbitrary-precision rationals; numerators and denominators are `i64`.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use dimty_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Compose derived units with `*` and `/`:
//!
//! ```rust
//! use dimty_core::length::Meters;
//! use dimty_core::time::Seconds;
//! use dimty_core::velocity::{KilometerPerHour, MetersPerSecond};
//!
//! let v: MetersPerSecond = Meters::new(100.0) / Seconds::new(20.0);
//! assert!((v.value() - 5.0).abs() < 1e-12);
//! assert!((v.to::<KilometerPerHour>().value() - 18.0).abs() < 1e-12);
//! ```
//!
//! Add quantities in different units; the result is expressed in their common unit:
//!
//! ```rust
//! use dimty_core::length::{Centimeter, Centimeters, Meters};
//!
//! let sum = Centimeters::new(250.0).add_common(Meters::new(2.0));
//! assert!((sum.to::<Centimeter>().value() - 450.0).abs() < 1e-9);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimty-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimty-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: `Serialize`/`Deserialize` for the value-level types and for `Quantity<U, R>` (raw value only), plus the
//!   [`serde_with_unit`] helper.
//!
//! # Panics and errors
//!
//! The `const fn` constructors and operators panic on a violated precondition (zero denominator, `i64` overflow,
//! non-simple dimension, incompatible units). Evaluated in a `const` item, such a panic is a compile error. Each has
//! a `try_*` twin returning [`UnitResult`]. Quantity arithmetic follows IEEE-754 (or integer) semantics of the
//! representation type; [`quantity_cast`] returns zero for a zero divisor, [`try_quantity_cast`] and
//! [`Quantity::try_div`] report [`UnitError::ZeroDivisor`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dim_ratio;
mod dimension;
mod error;
pub mod format;
pub mod kinds;
mod macros;
mod marker;
mod pack;
mod quantity;
mod rational;
mod scalar;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dim_ratio::DimensionRatio;
pub use dimension::{BaseDim, Dimension, ExtraDim, SiDim};
pub use error::{UnitError, UnitResult};
pub use marker::{Common, Pow, Prod, Quot, Symbol, UnitMarker, Unitless};
pub use pack::{IntegerPack, Pack, RatioPack};
pub use quantity::{qty, quantity_cast, try_quantity_cast, Quantity, Simplify};
pub use rational::Rational;
pub use scalar::Scalar;
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `dimty-core` so they can implement conversion traits without running into Rust's orphan
/// rules.
pub mod units;

pub use units::amount;
pub use units::angle;
pub use units::current;
pub use units::energy;
pub use units::force;
pub use units::length;
pub use units::luminous;
pub use units::mass;
pub use units::power;
pub use units::temperature;
pub use units::time;
pub use units::unitless;
pub use units::velocity;

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test units for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub struct TestUnit;
    impl UnitMarker for TestUnit {
        const UNIT: Unit = Unit::new(Dimension::COUNT);
        const SYMBOL: Option<&'static str> = Some("tu");
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub struct DoubleTestUnit;
    impl UnitMarker for DoubleTestUnit {
        const UNIT: Unit = Unit::base(Dimension::COUNT, Rational::integer(2));
        const SYMBOL: Option<&'static str> = Some("dtu");
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub struct HalfTestUnit;
    impl UnitMarker for HalfTestUnit {
        const UNIT: Unit = Unit::base(Dimension::COUNT, Rational::new(1, 2));
        const SYMBOL: Option<&'static str> = Some("htu");
    }

    type TU = Quantity<TestUnit>;
    type Dtu = Quantity<DoubleTestUnit>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_new_and_value() {
        let q = TU::new(42.0);
        assert_eq!(q.value(), 42.0);
    }

    #[test]
    fn quantity_base_value_is_scaled() {
        assert_eq!(Dtu::new(3.0).base_value(), 6.0);
        assert_eq!(Quantity::<HalfTestUnit>::new(3.0).base_value(), 1.5);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion via `to`
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_conversion_to_same_unit() {
        let q = TU::new(10.0);
        let converted = q.to::<TestUnit>();
        assert_eq!(converted.value(), 10.0);
    }

    #[test]
    fn quantity_conversion_to_different_unit() {
        // 1 dtu = 2 tu, so 10 tu = 5 dtu
        let q = TU::new(10.0);
        let converted = q.to::<DoubleTestUnit>();
        assert!((converted.value() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn quantity_conversion_roundtrip() {
        let original = TU::new(100.0);
        let back = original.to::<HalfTestUnit>().to::<DoubleTestUnit>().to::<TestUnit>();
        assert_eq!(back.value(), original.value());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operator traits
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_sub() {
        let a = TU::new(3.0);
        let b = TU::new(7.0);
        assert_eq!((a + b).value(), 10.0);
        assert_eq!((b - a).value(), 4.0);
    }

    #[test]
    fn operator_mul_div_by_scalar() {
        let q = Dtu::new(5.0);
        assert_eq!((q * 3.0).value(), 15.0);
        assert_eq!((3.0 * q).value(), 15.0);
        assert_eq!((q / 5.0).value(), 1.0);
    }

    #[test]
    fn operator_neg() {
        let q = TU::new(5.0);
        assert_eq!((-q).value(), -5.0);
        assert_eq!((-(-q)).value(), 5.0);
    }

    #[test]
    fn operator_assign() {
        let mut q = TU::new(5.0);
        q += TU::new(3.0);
        q -= TU::new(1.0);
        q *= 2.0;
        q /= 7.0;
        assert_eq!(q.value(), 2.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Composite units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn division_creates_quot_type() {
        let num = TU::new(100.0);
        let den = Dtu::new(20.0);
        let ratio: Quantity<Quot<TestUnit, DoubleTestUnit>> = num / den;
        assert!((ratio.value() - 5.0).abs() < 1e-12);
        assert!(ratio.unit_of().dim().is_dimensionless());
    }

    #[test]
    fn quot_multiplication_recovers_numerator() {
        let rate: Quantity<Quot<TestUnit, DoubleTestUnit>> = Quantity::new(5.0);
        let count = Dtu::new(4.0);
        let result: TU = (rate * count).to();
        assert!((result.value() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn simplify_quot_u_u_to_unitless() {
        let ratio: Quantity<Quot<TestUnit, TestUnit>> = Quantity::new(1.23456);
        let unitless: Quantity<Unitless> = ratio.simplify();
        assert!((unitless.value() - 1.23456).abs() < 1e-12);
    }

    #[test]
    fn simplify_quot_n_quot_n_d_to_d() {
        let q: Quantity<Quot<TestUnit, Quot<TestUnit, DoubleTestUnit>>> = Quantity::new(7.5);
        let d: Dtu = q.simplify();
        assert!((d.value() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn common_unit_picks_finer_scale() {
        let sum = Dtu::new(1.0).add_common(Quantity::<HalfTestUnit>::new(2.0));
        assert_eq!(sum.unit_of(), HalfTestUnit::UNIT);
        assert_eq!(sum.value(), 6.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_simple() {
        assert_eq!(format!("{}", TU::new(1.5)), "1.5 tu");
        assert_eq!(format!("{}", Dtu::new(-2.0)), "-2 dtu");
    }

    #[test]
    fn display_generated_symbol() {
        let q: Quantity<Quot<TestUnit, Pow<TestUnit, 2>>> = Quantity::new(3.0);
        assert_eq!(format!("{}", q), "3 ct^-1");
    }
}
