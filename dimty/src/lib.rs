//! Compile-time dimensional analysis for Rust.
//!
//! `dimty` is the user-facing crate in this workspace. It re-exports the full API from `dimty-core` plus the
//! predefined units (lengths, masses, times, energies, …) at the crate root.
//!
//! A value is always a `Quantity<U, R>`, where `U` is a zero-sized type describing the unit and `R` the numeric
//! representation (`f64` by default). The dimension and scale of `U` are evaluated by the compiler, so mixing
//! incompatible dimensions is a type error and unit bookkeeping costs nothing at runtime.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to kilograms, or convert seconds to metres).
//! - Composes units through arithmetic: `Meters / Seconds` is a velocity, `Newtons * Meters` is an energy.
//! - Tracks SI prefixes exactly, per base quantity, and picks a common unit for mixed-unit sums.
//!
//! # What this crate does not try to solve
//!
//! - Parsing units from strings at runtime.
//! - Affine temperature scales (Celsius, Fahrenheit).
//! - Automatic simplification of arbitrary unit expressions; use [`Quantity::to`] to name the unit you want.
//!
//! # Quick start
//!
//! Convert between units of one dimension:
//!
//! ```rust
//! use dimty::{Centimeter, Kilometers, Meter};
//!
//! let d = Kilometers::new(2.5);
//! assert!((d.to::<Meter>().value() - 2_500.0).abs() < 1e-9);
//! assert!((d.to::<Centimeter>().value() - 250_000.0).abs() < 1e-6);
//! ```
//!
//! Compose derived units:
//!
//! ```rust
//! use dimty::{Hours, KilometerPerHour, Kilometers, MeterPerSecond};
//!
//! let v = Kilometers::new(144.0) / Hours::new(2.0);
//! assert!((v.to::<KilometerPerHour>().value() - 72.0).abs() < 1e-9);
//! assert!((v.to::<MeterPerSecond>().value() - 20.0).abs() < 1e-9);
//! ```
//!
//! Add quantities in different units; the result is expressed in the finer one:
//!
//! ```rust
//! use dimty::{Centimeters, Meters};
//!
//! let total = Centimeters::new(250.0).add_common(Meters::new(2.0));
//! assert!((total.value() - 450.0).abs() < 1e-9);
//! assert_eq!(total.to_string(), "450 cm");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! Quantities of different dimensions cannot be added:
//!
//! ```compile_fail
//! use dimty::{Kilograms, Meters};
//!
//! let _ = Meters::new(1.0) + Kilograms::new(1.0);
//! ```
//!
//! nor converted into each other:
//!
//! ```compile_fail
//! use dimty::{Second, Meters};
//!
//! let _ = Meters::new(1.0).to::<Second>();
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `dimty::length` (metres with SI prefixes, ångström, square and cubic metres, litres)
//! - `dimty::mass` (grams with SI prefixes, tonnes, atomic mass units)
//! - `dimty::time` (seconds with SI prefixes, minutes, hours, days, years)
//! - `dimty::current`, `dimty::temperature`, `dimty::amount`, `dimty::luminous` (the remaining SI base units)
//! - `dimty::angle` (radians, degrees)
//! - `dimty::velocity` (metres per second, kilometres per hour, speed of light)
//! - `dimty::force`, `dimty::energy`, `dimty::power` (newtons, joules and calories, watts)
//! - `dimty::unitless` (ratios, percent, parts per million)
//! - `dimty::kinds` (`Length<U>`, `Energy<U>`, … aliases)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimty-core`.
//! - `serde`: enables `serde` support for `Quantity<U, R>`; serialization is the raw value only, or `{value, unit}`
//!   through [`serde_with_unit`](dimty_core::serde_with_unit).
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimty = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Dimension mismatches are compile errors. Conversions and arithmetic follow the semantics of the representation
//! type (IEEE-754 for floats). The value-level APIs (`Rational`, `Unit`) panic on zero denominators and overflow in
//! their `const fn` forms, which turns into a compile error in `const` items, and return [`UnitError`] from their
//! `try_*` forms.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimty_core::*;

/// Derive macro used by `dimty-core` to define unit marker types.
///
/// This macro expands in terms of `crate::UnitMarker` and `crate::Unit`, so it is intended for use inside
/// `dimty-core` (or crates exposing the same crate-root API). Most users should implement
/// [`UnitMarker`](dimty_core::UnitMarker) by hand instead.
pub use dimty_derive::UnitMarker;

pub use dimty_core::units::amount::*;
pub use dimty_core::units::angle::*;
pub use dimty_core::units::current::*;
pub use dimty_core::units::energy::*;
pub use dimty_core::units::force::*;
pub use dimty_core::units::length::*;
pub use dimty_core::units::luminous::*;
pub use dimty_core::units::mass::*;
pub use dimty_core::units::power::*;
pub use dimty_core::units::temperature::*;
pub use dimty_core::units::time::*;
pub use dimty_core::units::unitless::*;
pub use dimty_core::units::velocity::*;
